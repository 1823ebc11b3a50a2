use actix_web::{put, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::form::{DBFormUpdate, FormEditRes, FormView, RFormEdit};
use crate::types::response::{ApiResponse, ApiResult};

#[utoipa::path(
    put,
    path = "/api/forms/{formId}/edit",
    tag = "Forms",
    params(("formId" = Uuid, Path, description = "Form id")),
    request_body = RFormEdit,
    responses(
        (status = 200, description = "Form updated", body = FormEditRes),
        (status = 403, description = "Caller is neither author nor member"),
        (status = 404, description = "Form not found"),
        (status = 500, description = "Internal server error")
    )
)]
#[put("/forms/{form_id}/edit")]
pub async fn edit(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
    body: web::Json<RFormEdit>,
) -> ApiResult<FormEditRes> {
    let form_id = path.into_inner();
    let body = body.into_inner();

    let access = db
        .get_form_access(&form_id)
        .await?
        .ok_or(AppError::NotFound)?;

    // Author or current member may edit. Membership is judged against the set
    // on record, not the list being submitted.
    if body.user_id != access.author_id && !access.users_id.contains(&body.user_id) {
        return Err(AppError::Forbidden);
    }

    let (form, users_id) = db
        .update_form(
            &form_id,
            DBFormUpdate {
                title: body.title,
                fields: body.fields,
                users_id: body.users_id,
            },
        )
        .await?;

    Ok(ApiResponse::Ok(FormEditRes {
        updated_form: FormView::from_parts(form, users_id),
    }))
}
