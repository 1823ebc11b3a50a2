mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use uuid::Uuid;

#[tokio::test]
async fn test_user_registration_flow_success() {
    println!("\n\n[+] Running test: test_user_registration_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;
    println!("[+] Actix web app initialized.");

    let user_data = test_data::sample_user();
    println!("[>] Sending request to register user: {:?}", user_data.username);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&user_data)
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["user"]["username"], "testuser");
    assert!(body["user"]["id"].is_string());
    // The response never carries the password, not even hashed.
    assert!(body["user"].get("password").is_none());

    println!("[>] Verifying user in database.");
    let stored = ctx
        .db
        .find_user_by_username("testuser")
        .await
        .expect("Failed to query user")
        .expect("User not found in database");
    assert_ne!(stored.password, user_data.password);
    assert!(stored.password.starts_with("$2"));
    println!("[/] Test passed: registration flow successful.");
}

#[tokio::test]
async fn test_user_registration_trims_whitespace() {
    println!("\n\n[+] Running test: test_user_registration_trims_whitespace");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(serde_json::json!({ "username": "  padded  ", "password": "  pw1  " }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["username"], "padded");
    println!("[/] Test passed: username and password are trimmed.");
}

#[tokio::test]
async fn test_user_registration_missing_fields() {
    println!("\n\n[+] Running test: test_user_registration_missing_fields");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    println!("[>] Sending request with blank username.");
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(serde_json::json!({ "username": "   ", "password": "pw1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    println!("[>] Sending request with blank password.");
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(serde_json::json!({ "username": "someone", "password": "   " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    println!("[/] Test passed: blank fields rejected with 400.");
}

#[tokio::test]
async fn test_user_registration_duplicate_username() {
    println!("\n\n[+] Running test: test_user_registration_duplicate_username");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user_data = test_data::sample_user_with_username("dupe");

    println!("[>] Registering user the first time.");
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&user_data)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let original = ctx
        .db
        .find_user_by_username("dupe")
        .await
        .unwrap()
        .expect("User not found");

    println!("[>] Registering the same username again.");
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(serde_json::json!({ "username": "dupe", "password": "other-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // The original record is untouched.
    let after = ctx
        .db
        .find_user_by_username("dupe")
        .await
        .unwrap()
        .expect("User not found");
    assert_eq!(after.id, original.id);
    assert_eq!(after.password, original.password);
    println!("[/] Test passed: duplicate username rejected with 422.");
}

#[tokio::test]
async fn test_get_user_flow() {
    println!("\n\n[+] Running test: test_get_user_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (author_id, _) = client.create_test_user(None).await.unwrap();
    let (member_id, _) = client
        .create_test_user(Some("member-user".to_string()))
        .await
        .unwrap();
    let form_id = client.create_test_form(author_id, vec![member_id]).await;

    println!("[>] Fetching member user by id.");
    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", member_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["user"]["username"], "member-user");
    assert!(body["user"].get("password").is_none());
    assert_eq!(body["user"]["formsId"][0], form_id.to_string());
    println!("[/] Test passed: user lookup returns formsId and no password.");
}

#[tokio::test]
async fn test_get_missing_user_returns_null() {
    println!("\n\n[+] Running test: test_get_missing_user_returns_null");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    println!("[>] Fetching a user id that does not exist.");
    let req = test::TestRequest::get()
        .uri(&format!("/api/users/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());

    // Not a 404 on this path: 200 with a null user.
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["user"].is_null());
    println!("[/] Test passed: missing user comes back as 200 with null.");
}
