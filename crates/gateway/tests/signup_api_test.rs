//! Integration tests for the signup endpoint.
//!
//! The router runs against the in-memory store or a mocked repository, so no
//! database is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::RepositoryError;
use domain::{NewUser, User};
use gateway_lib::routes::create_router;
use gateway_lib::state::AppState;
use user_service_lib::repository::{
    InMemoryUserStore, MockUserRepository, RepoResult, UserRepository,
};
use user_service_lib::service::SignupManager;

// =============================================================================
// Test Helpers
// =============================================================================

fn app_with(repo: Arc<dyn UserRepository>) -> Router {
    create_router(AppState::new(Arc::new(SignupManager::new(repo))))
}

fn in_memory_app() -> (Router, Arc<InMemoryUserStore>) {
    let store = Arc::new(InMemoryUserStore::new());
    (app_with(store.clone()), store)
}

async fn post_raw(app: &Router, body: &str, content_type: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method("POST").uri("/api/auth/signup");
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

async fn post_signup(app: &Router, body: Value) -> (StatusCode, Value) {
    post_raw(app, &body.to_string(), Some("application/json")).await
}

fn mock_failing_create(err: RepositoryError) -> Router {
    let mut repo = MockUserRepository::new();
    repo.expect_exists_by_email().returning(|_| Ok(false));
    repo.expect_create()
        .times(1)
        .returning(move |_| Err(err.clone()));
    app_with(Arc::new(repo))
}

// =============================================================================
// Success
// =============================================================================

#[tokio::test]
async fn test_signup_created_without_password() {
    let (app, store) = in_memory_app();

    let (status, body) = post_signup(
        &app,
        json!({ "name": "A", "email": "a@b.com", "password": "secret1" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User created successfully");

    let user = body["user"].as_object().unwrap();
    assert_eq!(user["name"], "A");
    assert_eq!(user["email"], "a@b.com");
    assert_eq!(user["role"], "user");
    assert!(user.contains_key("id"));
    assert!(user.keys().all(|k| !k.to_lowercase().contains("password")));

    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_signup_normalizes_fields() {
    let (app, store) = in_memory_app();

    let (status, body) = post_signup(
        &app,
        json!({
            "name": "  Ada  ",
            "email": "  Ada@Example.COM ",
            "password": "secret1",
            "phone": " +1 555 0100 ",
            "role": "partner",
            "employeeId": "EMP-1"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["name"], "Ada");
    assert_eq!(body["user"]["email"], "ada@example.com");
    assert_eq!(body["user"]["phone"], "+1 555 0100");
    assert_eq!(body["user"]["role"], "partner");
    assert_eq!(body["user"]["employeeId"], "EMP-1");
    assert!(store.exists_by_email("ada@example.com").await.unwrap());
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_missing_fields_rejected() {
    let (app, store) = in_memory_app();
    let bodies = [
        json!({ "email": "a@b.com", "password": "secret1" }),
        json!({ "name": "A", "password": "secret1" }),
        json!({ "name": "A", "email": "a@b.com" }),
        json!({ "name": "", "email": "a@b.com", "password": "secret1" }),
        json!({ "name": "A", "email": "a@b.com", "password": null }),
        json!({}),
    ];

    for body in bodies {
        let (status, response) = post_signup(&app, body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response["message"], "Please provide name, email and password");
    }
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_invalid_email_rejected() {
    let (app, _) = in_memory_app();

    for email in ["plain", "a@b", "a@b .com", "@b.com"] {
        let (status, body) = post_signup(
            &app,
            json!({ "name": "A", "email": email, "password": "secret1" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("valid email"));
    }
}

#[tokio::test]
async fn test_short_password_rejected() {
    let (app, store) = in_memory_app();

    for password in ["1", "12345"] {
        let (status, body) = post_signup(
            &app,
            json!({ "name": "A", "email": "a@b.com", "password": password }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Password must be at least 6 characters long");
    }
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_malformed_bodies_rejected() {
    let (app, _) = in_memory_app();
    let cases = [
        ("not json", Some("application/json")),
        ("[1, 2, 3]", Some("application/json")),
        (r#""a string""#, Some("application/json")),
        (r#"{"name": 5, "email": "a@b.com", "password": "secret1"}"#, Some("application/json")),
        ("not json", None),
        ("", Some("application/json")),
    ];

    for (body, content_type) in cases {
        let (status, response) = post_raw(&app, body, content_type).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response, json!({ "message": "Invalid request body" }));
    }
}

#[tokio::test]
async fn test_json_body_accepted_regardless_of_content_type() {
    let (app, store) = in_memory_app();
    let body = r#"{"name": "A", "email": "a@b.com", "password": "secret1"}"#;

    let (status, response) = post_raw(&app, body, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["user"]["email"], "a@b.com");

    let (status, _) = post_raw(
        &app,
        r#"{"name": "B", "email": "c@d.com", "password": "secret1"}"#,
        Some("text/plain"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    assert_eq!(store.len().await, 2);
}

// =============================================================================
// Duplicates
// =============================================================================

#[tokio::test]
async fn test_duplicate_email_rejected_and_not_stored_twice() {
    let (app, store) = in_memory_app();
    let body = json!({ "name": "A", "email": "a@b.com", "password": "secret1" });

    let (status, _) = post_signup(&app, body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    for _ in 0..3 {
        let (status, response) = post_signup(&app, body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["message"], "User with this email already exists");
    }

    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_duplicate_email_differing_only_in_case() {
    let (app, store) = in_memory_app();

    post_signup(&app, json!({ "name": "A", "email": "a@b.com", "password": "secret1" })).await;
    let (status, body) = post_signup(
        &app,
        json!({ "name": "B", "email": " A@B.COM", "password": "secret2" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("already exists"));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_duplicate_employee_id_from_storage() {
    let (app, store) = in_memory_app();

    post_signup(
        &app,
        json!({ "name": "A", "email": "a@b.com", "password": "secret1", "employeeId": "E1" }),
    )
    .await;
    let (status, body) = post_signup(
        &app,
        json!({ "name": "B", "email": "c@d.com", "password": "secret1", "employeeId": "E1" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "employeeId already exists");
    assert_eq!(store.len().await, 1);
}

// =============================================================================
// Repository failure mapping
// =============================================================================

#[tokio::test]
async fn test_storage_duplicate_key_maps_to_bad_request() {
    let app = mock_failing_create(RepositoryError::duplicate("email"));

    let (status, body) = post_signup(
        &app,
        json!({ "name": "A", "email": "a@b.com", "password": "secret1" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "email already exists" }));
}

#[tokio::test]
async fn test_schema_validation_messages_joined() {
    let (app, store) = in_memory_app();

    let (status, body) = post_signup(
        &app,
        json!({
            "name": "A",
            "email": "a@b.com",
            "password": "secret1",
            "phone": "call me maybe",
            "role": "root"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("Please provide a valid phone number, root is not a valid role"));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_connection_failure_maps_to_server_error() {
    let app = mock_failing_create(RepositoryError::ConnectionFailure("refused".to_string()));

    let (status, body) = post_signup(
        &app,
        json!({ "name": "A", "email": "a@b.com", "password": "secret1" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Database operation failed: refused" }));
}

#[tokio::test]
async fn test_validation_failure_never_reaches_repository() {
    let mut repo = MockUserRepository::new();
    repo.expect_exists_by_email().never();
    repo.expect_create().never();
    let app = app_with(Arc::new(repo));

    let (status, _) = post_signup(&app, json!({ "name": "A", "email": "nope", "password": "1" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Repository whose insert path blows up outright.
struct PanickingRepository;

#[async_trait]
impl UserRepository for PanickingRepository {
    async fn find_by_email(&self, _email: &str) -> RepoResult<Option<User>> {
        Ok(None)
    }

    async fn exists_by_email(&self, _email: &str) -> RepoResult<bool> {
        Ok(false)
    }

    async fn create(&self, _user: NewUser) -> RepoResult<User> {
        panic!("insert hook blew up")
    }
}

#[tokio::test]
async fn test_unexpected_fault_is_generic_server_error() {
    let app = app_with(Arc::new(PanickingRepository));

    let (status, body) = post_signup(
        &app,
        json!({ "name": "A", "email": "a@b.com", "password": "secret1" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "An unexpected error occurred" }));
}

// =============================================================================
// Ancillary routes
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let (app, _) = in_memory_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_document_describes_signup() {
    let (app, _) = in_memory_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let doc: Value = serde_json::from_slice(&bytes).unwrap();

    assert!(doc["paths"]["/api/auth/signup"]["post"].is_object());
    let payload = &doc["components"]["schemas"]["SignupPayload"]["properties"];
    assert_eq!(payload["email"]["example"], "ada@example.com");
    assert!(payload["employeeId"].is_object());
}
