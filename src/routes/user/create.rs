use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, PublicUser, RUserCreate, UserCreateRes};
use crate::utils::password::hash_password;

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = RUserCreate,
    responses(
        (status = 201, description = "New user registered", body = UserCreateRes),
        (status = 400, description = "username or password is missing"),
        (status = 422, description = "Username is already taken"),
        (status = 500, description = "Internal server error")
    )
)]
#[post("/users")]
pub async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    let username = body.username.trim();
    let password = body.password.trim();

    if username.is_empty() {
        return Err(AppError::Validation("username is required".to_string()));
    }
    if password.is_empty() {
        return Err(AppError::Validation("password is required".to_string()));
    }

    let hashed = hash_password(password).map_err(|e| AppError::Internal(e.to_string()))?;

    let user = db
        .create_user(DBUserCreate {
            username: username.to_string(),
            password_hash: hashed,
        })
        .await?;

    Ok(ApiResponse::Created(UserCreateRes {
        user: PublicUser {
            id: user.id,
            username: user.username,
        },
    }))
}
