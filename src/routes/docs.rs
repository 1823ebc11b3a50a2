use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::types::form::{
    FormCreateRes, FormEditRes, FormGetRes, FormView, RFormCreate, RFormDelete, RFormEdit,
};
use crate::types::user::{
    LoginRes, PublicUser, RUserCreate, RUserLogin, UserCreateRes, UserGetRes, UserView,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::user::get::get_user,
        crate::routes::user::create::create,
        crate::routes::user::login::login,
        crate::routes::protected::protected,
        crate::routes::form::get::get_form,
        crate::routes::form::create::create,
        crate::routes::form::edit::edit,
        crate::routes::form::delete::delete,
    ),
    components(schemas(
        RUserCreate,
        RUserLogin,
        PublicUser,
        UserView,
        UserCreateRes,
        UserGetRes,
        LoginRes,
        RFormCreate,
        RFormEdit,
        RFormDelete,
        FormView,
        FormCreateRes,
        FormGetRes,
        FormEditRes,
        crate::routes::protected::Response,
    )),
    tags(
        (name = "Users", description = "Registration, lookup and login"),
        (name = "Forms", description = "Form CRUD with author/member authorization"),
        (name = "Auth", description = "Token check")
    )
)]
pub struct ApiDoc;

/// Static OpenAPI document for the routes above.
#[get("/docs.json")]
pub async fn docs_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
