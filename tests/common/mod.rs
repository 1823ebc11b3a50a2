use forms_api::config::EnvConfig;
use forms_api::db::postgres_service::PostgresService;
use std::sync::Arc;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::postgres::Postgres;

pub mod client;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

#[allow(dead_code)]
pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        jwt_secret: TEST_JWT_SECRET.to_string(),
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use forms_api::types::form::RFormCreate;
    use forms_api::types::user::RUserCreate;
    use uuid::Uuid;

    pub fn sample_user() -> RUserCreate {
        RUserCreate {
            username: "testuser".to_string(),
            password: "password123".to_string(),
        }
    }

    pub fn sample_user_with_username(username: &str) -> RUserCreate {
        RUserCreate {
            username: username.to_string(),
            password: "password123".to_string(),
        }
    }

    pub fn sample_form(author_id: Uuid, users_id: Vec<Uuid>) -> RFormCreate {
        RFormCreate {
            title: "Test Form".to_string(),
            fields: serde_json::json!({ "q1": { "label": "Name", "type": "text" } }),
            author_id,
            users_id,
        }
    }
}
