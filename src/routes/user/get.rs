use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{UserGetRes, UserView};

#[utoipa::path(
    get,
    path = "/api/users/{userId}",
    tag = "Users",
    params(("userId" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User data, or a null user when absent", body = UserGetRes),
        (status = 500, description = "Internal server error")
    )
)]
#[get("/users/{user_id}")]
pub async fn get_user(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<UserGetRes> {
    let user_id = path.into_inner();

    // A missing user is not a 404 on this path; the body is just null.
    let user = match db.find_user_by_id(&user_id).await? {
        Some(user) => {
            let forms_id = db.member_form_ids(&user_id).await?;
            Some(UserView {
                id: user.id,
                username: user.username,
                forms_id,
            })
        }
        None => None,
    };

    Ok(ApiResponse::Ok(UserGetRes { user }))
}
