use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginRes, RUserLogin};
use crate::utils::password::verify_password;
use crate::utils::token::TokenService;

#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "Users",
    request_body = RUserLogin,
    responses(
        (status = 200, description = "Authorized", body = LoginRes),
        (status = 400, description = "username or password is missing"),
        (status = 403, description = "username or password is invalid"),
        (status = 500, description = "Internal server error")
    )
)]
#[post("/users/login")]
pub async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    tokens: web::Data<TokenService>,
    body: web::Json<RUserLogin>,
) -> ApiResult<LoginRes> {
    let username = body.username.trim();
    let password = body.password.trim();

    if username.is_empty() {
        return Err(AppError::Validation("username is required".to_string()));
    }
    if password.is_empty() {
        return Err(AppError::Validation("password is required".to_string()));
    }

    if let Some(user) = db.find_user_by_username(username).await? {
        let matches =
            verify_password(password, &user.password).map_err(|e| AppError::Internal(e.to_string()))?;
        if matches {
            let token = tokens
                .issue(user.id)
                .map_err(|e| AppError::Internal(e.to_string()))?;
            return Ok(ApiResponse::Ok(LoginRes {
                username: user.username,
                token,
            }));
        }
    }

    // One response for unknown user and wrong password alike.
    Err(AppError::InvalidCredentials)
}
