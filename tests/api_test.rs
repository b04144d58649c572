//! Integration tests for API endpoints.
//!
//! The router runs over in-memory repositories, so no database or Redis
//! connection is needed.

mod common;

use std::sync::atomic::Ordering;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use cleanview_backend::api::api_router;
use cleanview_backend::domain::GetUserByUsernameQuery;

use common::seeded_services;

async fn app() -> Router {
    let (services, _) = seeded_services().await;
    api_router(services)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn sign_up_ana(app: &Router) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/v1/authentication/sign-up",
        None,
        Some(json!({"username": "ana", "email": "ana@x.com", "password": "pw1"})),
    )
    .await
}

async fn token_for_ana(app: &Router) -> String {
    sign_up_ana(app).await;
    let (_, body) = send(
        app,
        Method::POST,
        "/api/v1/authentication/sign-in",
        None,
        Some(json!({"email": "ana@x.com", "password": "pw1"})),
    )
    .await;
    body["token"].as_str().unwrap().to_string()
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_sign_up_then_sign_in_same_id() {
    let app = app().await;

    let (status, created) = sign_up_ana(&app).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["username"], "ana");
    assert_eq!(created["email"], "ana@x.com");
    assert_eq!(created["roles"], json!(["ROLE_USER"]));
    assert!(created.get("password").is_none());

    let (status, signed_in) = send(
        &app,
        Method::POST,
        "/api/v1/authentication/sign-in",
        None,
        Some(json!({"email": "ana@x.com", "password": "pw1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(signed_in["id"], created["id"]);
    assert_eq!(signed_in["username"], "ana");
    assert!(signed_in["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn test_sign_up_profile_failure_keeps_user() {
    let (services, uow) = seeded_services().await;
    uow.profiles.fail_writes.store(true, Ordering::SeqCst);
    let app = api_router(services.clone());

    let (status, body) = sign_up_ana(&app).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");

    // The committed user stays without a profile; a retry reports the name as taken
    let orphan = services
        .user_queries()
        .get_user_by_username(GetUserByUsernameQuery {
            username: "ana".to_string(),
        })
        .await
        .unwrap();
    assert!(orphan.is_some());

    uow.profiles.fail_writes.store(false, Ordering::SeqCst);
    let (status, body) = sign_up_ana(&app).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "USERNAME_TAKEN");
}

#[tokio::test]
async fn test_sign_up_duplicate_is_bad_request() {
    let app = app().await;
    sign_up_ana(&app).await;

    let (status, body) = sign_up_ana(&app).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "USERNAME_TAKEN");
    assert_eq!(body["error"]["message"], "Username already exists");
}

#[tokio::test]
async fn test_sign_up_unknown_role_is_bad_request() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/authentication/sign-up",
        None,
        Some(json!({"username": "bea", "email": "bea@x.com", "password": "pw1", "roles": ["ROLE_GUEST"]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "ROLE_NOT_FOUND");
}

#[tokio::test]
async fn test_sign_up_with_admin_role() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/authentication/sign-up",
        None,
        Some(json!({"username": "root", "email": "root@x.com", "password": "pw1", "roles": ["ROLE_ADMIN"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["roles"], json!(["ROLE_ADMIN"]));
}

#[tokio::test]
async fn test_sign_in_failures_are_not_found() {
    let app = app().await;
    sign_up_ana(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/authentication/sign-in",
        None,
        Some(json!({"email": "ana@x.com", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "INVALID_PASSWORD");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/authentication/sign-in",
        None,
        Some(json!({"email": "nobody@x.com", "password": "pw1"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_sign_in_validates_email() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/authentication/sign-in",
        None,
        Some(json!({"email": "not-an-email", "password": "pw1"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Protected routes
// =============================================================================

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = app().await;

    for uri in ["/api/v1/users", "/api/v1/roles", "/api/v1/profiles", "/api/v1/stores"] {
        let (status, body) = send(&app, Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    let (status, _) = send(&app, Method::GET, "/api/v1/users", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_queries() {
    let app = app().await;
    let token = token_for_ana(&app).await;

    let (status, users) = send(&app, Method::GET, "/api/v1/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().map(Vec::len), Some(1));
    let id = users[0]["id"].as_str().unwrap().to_string();

    let (status, user) = send(&app, Method::GET, &format!("/api/v1/users/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["username"], "ana");

    let (status, user) = send(&app, Method::GET, "/api/v1/users/username/ana", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["id"], id.as_str());

    let (status, body) = send(&app, Method::GET, "/api/v1/users/username/ghost", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let missing = uuid::Uuid::new_v4();
    let (status, _) = send(&app, Method::GET, &format!("/api/v1/users/{missing}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_roles_are_listed() {
    let app = app().await;
    let token = token_for_ana(&app).await;

    let (status, roles) = send(&app, Method::GET, "/api/v1/roles", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = roles
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|r| r["name"].as_str())
        .collect();
    assert_eq!(names, vec!["ROLE_USER", "ROLE_ADMIN"]);
}

#[tokio::test]
async fn test_sign_up_creates_profile() {
    let app = app().await;
    let token = token_for_ana(&app).await;

    let (status, profiles) = send(&app, Method::GET, "/api/v1/profiles", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let profile = &profiles[0];
    assert_eq!(profile["username"], "ana");
    assert!(profile.get("password").is_none());

    let id = profile["id"].as_str().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/api/v1/profiles/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["userId"], profile["userId"]);
}

// =============================================================================
// Stores
// =============================================================================

#[tokio::test]
async fn test_create_and_fetch_store() {
    let app = app().await;
    let token = token_for_ana(&app).await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/v1/stores",
        Some(&token),
        Some(json!({
            "name": "Tienda Miraflores",
            "numberStore": 12,
            "amountSensor": 4,
            "fillPercent": 75,
            "color": "green",
            "ubication": "Av. Larco 345, Lima"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["numberStore"], 12);
    assert_eq!(created["fillPercent"], 75);

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/api/v1/stores/{id}"), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, stores) = send(&app, Method::GET, "/api/v1/stores", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stores.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_create_store_validation() {
    let app = app().await;
    let token = token_for_ana(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/stores",
        Some(&token),
        Some(json!({
            "name": "S1",
            "numberStore": 1,
            "amountSensor": 2,
            "fillPercent": 140,
            "color": "red",
            "ubication": "Lima"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
