mod common;

use auth::Identity;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_user_success() {
    let app = TestApp::spawn().await;

    let body = app.register("Ana", "ana@x.com", "secret123").await;

    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Ana");
    assert_eq!(body["data"]["email"], "ana@x.com");
    assert_eq!(body["data"]["active"], true);
    assert!(body["data"]["created_at"].is_string());
    assert!(body["data"].get("credential").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;
    app.register("Ana", "ana@x.com", "secret123").await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "name": "Other Ana",
            "email": "ana@x.com",
            "password": "another"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "name": "Ana",
            "email": "not-an-email",
            "password": "secret123"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_blank_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/register")
        .json(&json!({
            "name": "Ana",
            "email": "ana@x.com",
            "password": "   "
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("password required"));
}

#[tokio::test]
async fn test_login_returns_token_for_identity() {
    let app = TestApp::spawn().await;
    app.register("Ana", "ana@x.com", "secret123").await;

    let token = app.login("ana@x.com", "secret123").await;

    let identity = auth::extract(&token, &app.signing_config).expect("Invalid token");
    assert_eq!(identity, Identity::new(1, "Ana", "ana@x.com"));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;
    app.register("Ana", "ana@x.com", "secret123").await;

    let response = app
        .post("/api/auth/login")
        .json(&json!({
            "email": "ana@x.com",
            "password": "secret124"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email_is_indistinguishable() {
    let app = TestApp::spawn().await;
    app.register("Ana", "ana@x.com", "secret123").await;

    let wrong_password = app
        .post("/api/auth/login")
        .json(&json!({ "email": "ana@x.com", "password": "nope" }))
        .send()
        .await
        .expect("Failed to execute request");
    let unknown_email = app
        .post("/api/auth/login")
        .json(&json!({ "email": "bia@x.com", "password": "nope" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let first: serde_json::Value = wrong_password.json().await.unwrap();
    let second: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_get_current_user() {
    let app = TestApp::spawn().await;
    app.register("Ana", "ana@x.com", "secret123").await;
    let token = app.login("ana@x.com", "secret123").await;

    let response = app
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Ana");
    assert_eq!(body["data"]["email"], "ana@x.com");
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/me")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_malformed_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/api/users/me", "not-a-token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_non_bearer_scheme() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/me")
        .header("Authorization", "Basic YW5hOnNlY3JldA==")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let app = TestApp::spawn().await;
    app.register("Ana", "ana@x.com", "secret123").await;

    let mut expired_config = app.signing_config.clone();
    expired_config.token_lifetime = chrono::Duration::minutes(-1);
    let token = auth::issue(&Identity::new(1, "Ana", "ana@x.com"), &expired_config).unwrap();

    let response = app
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_foreign_signature() {
    let app = TestApp::spawn().await;

    let mut foreign_config = app.signing_config.clone();
    foreign_config.secret_key = b"some-other-secret-key-with-32-bytes!".to_vec();
    let token = auth::issue(&Identity::new(1, "Ana", "ana@x.com"), &foreign_config).unwrap();

    let response = app
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_and_get_users() {
    let app = TestApp::spawn().await;
    app.register("Ana", "ana@x.com", "secret123").await;
    app.register("Bia", "bia@x.com", "secret456").await;
    let token = app.login("ana@x.com", "secret123").await;

    let response = app
        .get_authenticated("/api/users", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let users = body["data"].as_array().expect("Expected a list");
    assert_eq!(users.len(), 2);
    assert_eq!(users[1]["email"], "bia@x.com");

    let response = app
        .get_authenticated("/api/users/2", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Bia");
}

#[tokio::test]
async fn test_get_user_not_found() {
    let app = TestApp::spawn().await;
    app.register("Ana", "ana@x.com", "secret123").await;
    let token = app.login("ana@x.com", "secret123").await;

    let response = app
        .get_authenticated("/api/users/42", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_invalid_id() {
    let app = TestApp::spawn().await;
    app.register("Ana", "ana@x.com", "secret123").await;
    let token = app.login("ana@x.com", "secret123").await;

    let response = app
        .get_authenticated("/api/users/abc", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_user_by_email() {
    let app = TestApp::spawn().await;
    app.register("Ana", "ana@x.com", "secret123").await;
    app.register("Bia", "bia@x.com", "secret456").await;
    let token = app.login("ana@x.com", "secret123").await;

    let response = app
        .get_authenticated("/api/users/by-email/BIA@x.com", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], 2);
    assert_eq!(body["data"]["email"], "bia@x.com");
    assert!(body["data"].get("credential").is_none());
}

#[tokio::test]
async fn test_get_user_by_email_not_found() {
    let app = TestApp::spawn().await;
    app.register("Ana", "ana@x.com", "secret123").await;
    let token = app.login("ana@x.com", "secret123").await;

    let response = app
        .get_authenticated("/api/users/by-email/ghost@x.com", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("ghost@x.com"));
}

#[tokio::test]
async fn test_get_user_by_email_requires_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/users/by-email/ana@x.com")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_identity_rejects_unknown_subject() {
    let app = TestApp::spawn_with(true).await;

    // Validly signed, but no user 99 exists in this service.
    let token = auth::issue(&Identity::new(99, "Ghost", "ghost@x.com"), &app.signing_config)
        .unwrap();

    let response = app
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_trusted_claims_accept_unknown_subject() {
    let app = TestApp::spawn().await;

    let token = auth::issue(&Identity::new(99, "Ghost", "ghost@x.com"), &app.signing_config)
        .unwrap();

    let response = app
        .get_authenticated("/api/users/me", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Ghost");
}
