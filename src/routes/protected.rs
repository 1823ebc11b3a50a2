use actix_web::get;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct Response {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/protected",
    tag = "Auth",
    responses(
        (status = 200, description = "You are authorized", body = Response),
        (status = 401, description = "Authorization is required"),
        (status = 403, description = "Invalid auth token")
    )
)]
#[get("/protected")]
pub async fn protected(_req: actix_web::HttpRequest) -> ApiResult<Response> {
    Ok(ApiResponse::Ok(Response {
        message: "You are authorized".to_string(),
    }))
}
