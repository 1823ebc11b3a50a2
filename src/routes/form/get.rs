use actix_web::web;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::form::{FormGetRes, FormView};
use crate::types::response::{ApiResponse, ApiResult};

// Registered by hand in routes::configure_routes (with a method guard) rather
// than through a route macro, because DELETE on the same path is a different,
// authenticated handler.
#[utoipa::path(
    get,
    path = "/api/forms/{formId}",
    tag = "Forms",
    params(("formId" = Uuid, Path, description = "Form id")),
    responses(
        (status = 200, description = "Form data, or a null form when absent", body = FormGetRes),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_form(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<PostgresService>>,
    path: web::Path<Uuid>,
) -> ApiResult<FormGetRes> {
    let form_id = path.into_inner();

    // Same contract as the user lookup: absent means a null body, not 404.
    let form = db
        .find_form_by_id(&form_id)
        .await?
        .map(|(form, users_id)| FormView::from_parts(form, users_id));

    Ok(ApiResponse::Ok(FormGetRes { form }))
}
