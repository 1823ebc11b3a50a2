use actix_web::{delete, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::form::RFormDelete;
use crate::types::response::{ApiResponse, ApiResult};

#[utoipa::path(
    delete,
    path = "/api/forms/{formId}",
    tag = "Forms",
    params(("formId" = Uuid, Path, description = "Form id")),
    request_body = RFormDelete,
    responses(
        (status = 200, description = "Form deleted"),
        (status = 403, description = "Caller is not the author"),
        (status = 404, description = "Form not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[delete("/forms/{form_id}")]
pub async fn delete(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RFormDelete>,
) -> ApiResult<()> {
    let form_id = path.into_inner();

    let access = db
        .get_form_access(&form_id)
        .await?
        .ok_or(AppError::NotFound)?;

    // Author only. Membership grants edit, never delete.
    if body.user_id != access.author_id {
        return Err(AppError::Forbidden);
    }

    db.delete_form(&form_id).await?;
    Ok(ApiResponse::EmptyOk)
}
