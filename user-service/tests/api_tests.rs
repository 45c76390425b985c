mod common;

use chrono::Duration;
use chrono::Utc;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_user_success() {
    let app = TestApp::spawn().await;

    let response = app.create_user("test@test.com", "secret123").await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 201);
    assert_eq!(body["data"]["email"], "test@test.com");
    assert_eq!(body["data"]["full_name"], "Test User");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_create_user_duplicate_email() {
    let app = TestApp::spawn().await;

    app.create_user("test@test.com", "secret123").await;
    let response = app.create_user("test@test.com", "other").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_create_user_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app.create_user("not-an-email", "secret123").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_sign_in_success() {
    let app = TestApp::spawn().await;
    app.create_user("test@test.com", "secret123").await;

    let response = app.sign_in("test@test.com", "secret123").await;

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["subject"], "test@test.com");
    assert!(body["data"]["expires_at"].is_string());

    let token = body["data"]["token"].as_str().expect("Missing token");
    assert_eq!(token.split('.').count(), 3);

    let claims = app
        .authenticator
        .validate_token(token)
        .expect("Issued token did not validate");
    assert_eq!(claims.sub, "test@test.com");
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn test_sign_in_failures_are_indistinguishable() {
    let app = TestApp::spawn().await;
    app.create_user("test@test.com", "secret123").await;

    let wrong_password = app.sign_in("test@test.com", "wrong").await;
    let unknown_user = app.sign_in("nobody@test.com", "secret123").await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_user: serde_json::Value = unknown_user.json().await.unwrap();
    assert_eq!(wrong_password, unknown_user);
    assert_eq!(wrong_password["data"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_sign_in_failures_revealed_when_configured() {
    let app = TestApp::spawn_with(true).await;
    app.create_user("test@test.com", "secret123").await;

    let wrong_password = app.sign_in("test@test.com", "wrong").await;
    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);

    let unknown_user = app.sign_in("nobody@test.com", "secret123").await;
    assert_eq!(unknown_user.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validate_token_with_bearer_header() {
    let app = TestApp::spawn().await;
    let token = app.signed_in_token("test@test.com", "secret123").await;

    let response = app
        .get_authenticated("/api/auth/validate", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["subject"], "test@test.com");
    assert!(body["data"].get("token").is_none());
}

#[tokio::test]
async fn test_validate_token_in_body() {
    let app = TestApp::spawn().await;
    let token = app.signed_in_token("test@test.com", "secret123").await;

    let response = app
        .post("/api/auth/validate")
        .json(&json!({ "token": token }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["subject"], "test@test.com");
}

#[tokio::test]
async fn test_validate_expired_token() {
    let app = TestApp::spawn().await;
    app.create_user("test@test.com", "secret123").await;

    // Expired ten minutes ago.
    let issued = app
        .authenticator
        .generate_token_at("test@test.com", Utc::now() - Duration::minutes(70))
        .unwrap();

    let response = app
        .get_authenticated("/api/auth/validate", &issued.access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Token expired");
}

#[tokio::test]
async fn test_validate_token_signed_with_other_key() {
    let app = TestApp::spawn().await;
    app.create_user("test@test.com", "secret123").await;

    let other_key = auth::SigningKey::from_secret("some-other-secret-key-at-least-32-bytes").unwrap();
    let forged = auth::TokenCodec::new(&other_key)
        .encode("test@test.com", Utc::now(), Duration::hours(1))
        .unwrap();

    let response = app
        .get_authenticated("/api/auth/validate", &forged)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid token");
}

#[tokio::test]
async fn test_validate_malformed_token() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/auth/validate")
        .json(&json!({ "token": "not.a-token" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_validate_without_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/auth/validate")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_validate_token_for_removed_account() {
    let app = TestApp::spawn().await;
    let token = app.signed_in_token("test@test.com", "secret123").await;

    assert!(app.repository.remove("test@test.com").await);

    let response = app
        .get_authenticated("/api/auth/validate", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_requires_token() {
    let app = TestApp::spawn().await;
    app.create_user("test@test.com", "secret123").await;

    let response = app
        .get("/api/users/test@test.com")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_user_with_token() {
    let app = TestApp::spawn().await;
    let token = app.signed_in_token("test@test.com", "secret123").await;

    let response = app
        .get_authenticated("/api/users/test@test.com", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "test@test.com");
}

#[tokio::test]
async fn test_get_unknown_user_with_token() {
    let app = TestApp::spawn().await;
    let token = app.signed_in_token("test@test.com", "secret123").await;

    let response = app
        .get_authenticated("/api/users/nobody@test.com", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_user_with_expired_token() {
    let app = TestApp::spawn().await;
    app.create_user("test@test.com", "secret123").await;

    let issued = app
        .authenticator
        .generate_token_at("test@test.com", Utc::now() - Duration::hours(2))
        .unwrap();

    let response = app
        .get_authenticated("/api/users/test@test.com", &issued.access_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_requires_token() {
    let app = TestApp::spawn().await;
    app.create_user("test@test.com", "secret123").await;

    let response = app
        .get("/api/users")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_users_with_token() {
    let app = TestApp::spawn().await;
    let token = app.signed_in_token("first@test.com", "secret123").await;
    app.create_user("second@test.com", "secret456").await;

    let response = app
        .get_authenticated("/api/users", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let users = body["data"].as_array().expect("Expected a list of users");
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "first@test.com");
    assert_eq!(users[1]["email"], "second@test.com");
    assert!(users.iter().all(|user| user.get("password_hash").is_none()));
}
