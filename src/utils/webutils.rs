use actix_web::{dev::ServiceRequest, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::types::error::AppError;
use crate::utils::token::TokenService;

/// Bearer validator for `HttpAuthentication::bearer`. A missing or malformed
/// `Authorization` header is rejected with 401 by the extractor before this
/// runs; a token that fails verification is rejected here with 403.
///
/// The verified user id is dropped: handlers that need a caller identity read
/// a `userId` field from the request body instead, which is never checked
/// against the token. Known defect, kept as-is; see DESIGN.md.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let tokens = match req.app_data::<web::Data<TokenService>>() {
        Some(tokens) => tokens,
        None => {
            let err = AppError::Internal("TokenService not configured".to_string());
            return Err((err.into(), req));
        }
    };

    match tokens.verify(credentials.token()) {
        Ok(_user_id) => Ok(req),
        Err(_) => Err((AppError::Forbidden.into(), req)),
    }
}
