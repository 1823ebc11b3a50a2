use actix_web::{post, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::form::{DBFormCreate, FormCreateRes, FormView, RFormCreate};
use crate::types::response::{ApiResponse, ApiResult};

#[utoipa::path(
    post,
    path = "/api/forms",
    tag = "Forms",
    request_body = RFormCreate,
    responses(
        (status = 201, description = "Form created", body = FormCreateRes),
        (status = 401, description = "Authorization is required"),
        (status = 403, description = "Invalid auth token"),
        (status = 500, description = "Internal server error")
    )
)]
#[post("/forms")]
pub async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    body: web::Json<RFormCreate>,
) -> ApiResult<FormCreateRes> {
    let body = body.into_inner();

    // authorId and usersId are not pre-validated here; a dangling reference
    // comes back from the datastore as a 500.
    let (form, users_id) = db
        .create_form(DBFormCreate {
            title: body.title,
            fields: body.fields,
            author_id: body.author_id,
            users_id: body.users_id,
        })
        .await?;

    Ok(ApiResponse::Created(FormCreateRes {
        form: FormView::from_parts(form, users_id),
    }))
}
