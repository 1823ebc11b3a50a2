use actix_web::{guard, web};
use actix_web_httpauth::middleware::HttpAuthentication;

use crate::utils::webutils::validate_token;

pub mod docs;
pub mod form;
pub mod protected;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let auth = HttpAuthentication::bearer(validate_token);

    cfg.service(docs::docs_json);
    cfg.service(
        web::scope("/api")
            .service(user::create::create)
            .service(user::login::login)
            .service(user::get::get_user)
            // GET shares its path with the authenticated DELETE below. The
            // resource-level method guard lets non-GET requests fall through
            // to the auth scope instead of answering 405 here.
            .service(
                web::resource("/forms/{form_id}")
                    .guard(guard::Get())
                    .route(web::get().to(form::get::get_form)),
            )
            .service(
                web::scope("")
                    .wrap(auth)
                    .service(protected::protected)
                    .service(form::create::create)
                    .service(form::edit::edit)
                    .service(form::delete::delete),
            ),
    );
}
