use actix_web::{web, App, HttpServer};
use forms_api::config::EnvConfig;
use forms_api::db::postgres_service::PostgresService;
use forms_api::routes::configure_routes;
use forms_api::utils::token::TokenService;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );
    let token_service = TokenService::new(&config.jwt_secret);

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(token_service.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
