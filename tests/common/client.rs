use actix_web::{web, App};
use forms_api::db::postgres_service::PostgresService;
use forms_api::types::error::AppError;
use forms_api::types::form::DBFormCreate;
use forms_api::types::user::DBUserCreate;
use forms_api::utils::password::hash_password;
use forms_api::utils::token::TokenService;
use std::sync::Arc;
use uuid::Uuid;

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub tokens: TokenService,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient {
            db,
            tokens: TokenService::new(super::TEST_JWT_SECRET),
        }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.tokens.clone()))
            .configure(forms_api::routes::configure_routes)
    }

    /// Insert a user directly and hand back (id, bearer token).
    #[allow(dead_code)]
    pub async fn create_test_user(
        &self,
        username: Option<String>,
    ) -> Result<(Uuid, String), AppError> {
        let username = username.unwrap_or_else(|| format!("user-{}", Uuid::new_v4()));
        let hashed = hash_password("password123").expect("Failed to hash password");

        let user = self
            .db
            .create_user(DBUserCreate {
                username,
                password_hash: hashed,
            })
            .await?;

        let token = self.tokens.issue(user.id).expect("Failed to issue token");

        Ok((user.id, token))
    }

    /// Insert a form directly with the given author and member list.
    #[allow(dead_code)]
    pub async fn create_test_form(&self, author_id: Uuid, users_id: Vec<Uuid>) -> Uuid {
        let (form, _) = self
            .db
            .create_form(DBFormCreate {
                title: "Test Form".to_string(),
                fields: serde_json::json!({}),
                author_id,
                users_id,
            })
            .await
            .expect("Failed to create form");
        form.id
    }
}
