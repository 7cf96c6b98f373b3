/// Integration tests for the todolist API
///
/// These tests run the full router in-process against a real database:
/// - Signup and login flows
/// - Todo CRUD with authentication
/// - Ownership isolation between users
/// - The fixed 401 response for unauthenticated requests

mod common;

use axum::http::StatusCode;
use common::{json_request, response_json, TestContext};
use serde_json::json;
use tower::Service as _;
use uuid::Uuid;

/// Signup returns a token that works against the todo endpoints
#[tokio::test]
async fn test_signup_token_grants_access() {
    let ctx = TestContext::new().await.unwrap();

    let email = format!("signup-{}@example.com", Uuid::new_v4());
    let request = json_request(
        "POST",
        "/auth/signup",
        None,
        Some(json!({ "email": email, "password": "1234" })),
    );

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let token = body["token"].as_str().expect("token should be a string");
    assert!(!token.is_empty());

    // The fresh token authenticates a todos request
    let request = json_request("GET", "/api/todos", Some(token), None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!([]));

    ctx.cleanup().await.unwrap();
}

/// Signing up twice with the same email is a conflict
#[tokio::test]
async fn test_signup_duplicate_email() {
    let ctx = TestContext::new().await.unwrap();

    let email = format!("dup-{}@example.com", Uuid::new_v4());
    let body = json!({ "email": email, "password": "1234" });

    let request = json_request("POST", "/auth/signup", None, Some(body.clone()));
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = json_request("POST", "/auth/signup", None, Some(body));
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body = response_json(response).await;
    assert!(body["error"].is_string());

    ctx.cleanup().await.unwrap();
}

/// Login with correct credentials returns a working token
#[tokio::test]
async fn test_login_success() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": ctx.user.email, "password": common::TEST_PASSWORD })),
    );

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let token = body["token"].as_str().expect("token should be a string");

    let request = json_request("GET", "/api/todos", Some(token), None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    ctx.cleanup().await.unwrap();
}

/// Wrong password and unknown email both produce the same 401
#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": ctx.user.email, "password": "wrong" })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = json_request(
        "POST",
        "/auth/login",
        None,
        Some(json!({ "email": "nobody@example.com", "password": "1234" })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    ctx.cleanup().await.unwrap();
}

/// Creating a todo returns the full stored record with 200
#[tokio::test]
async fn test_create_todo() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "POST",
        "/api/todos",
        Some(&ctx.auth_header()),
        Some(json!({ "todo": "Testing!" })),
    );

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["todo"], "Testing!");
    assert_eq!(body["completed"], false);
    assert_eq!(body["owner_id"], ctx.user.id);
    assert!(body["id"].is_i64());

    ctx.cleanup().await.unwrap();
}

/// An explicit completed flag at creation is honored
#[tokio::test]
async fn test_create_todo_with_completed_flag() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "POST",
        "/api/todos",
        Some(&ctx.auth_header()),
        Some(json!({ "todo": "Already done", "completed": true })),
    );

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["completed"], true);

    ctx.cleanup().await.unwrap();
}

/// List returns the caller's todos in insertion order
#[tokio::test]
async fn test_list_todos_in_order() {
    let ctx = TestContext::new().await.unwrap();

    for text in ["first", "second", "third"] {
        let request = json_request(
            "POST",
            "/api/todos",
            Some(&ctx.auth_header()),
            Some(json!({ "todo": text })),
        );
        let response = ctx.app.clone().call(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let request = json_request("GET", "/api/todos", Some(&ctx.auth_header()), None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let todos = body.as_array().expect("list should be an array");
    assert_eq!(todos.len(), 3);
    assert_eq!(todos[0]["todo"], "first");
    assert_eq!(todos[1]["todo"], "second");
    assert_eq!(todos[2]["todo"], "third");

    // Listing again with no intervening writes returns the same sequence
    let request = json_request("GET", "/api/todos", Some(&ctx.auth_header()), None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response_json(response).await, body);

    ctx.cleanup().await.unwrap();
}

/// Getting a todo by id returns the same record create did
#[tokio::test]
async fn test_get_todo() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "POST",
        "/api/todos",
        Some(&ctx.auth_header()),
        Some(json!({ "todo": "fetch me" })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    let created = response_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let request = json_request(
        "GET",
        &format!("/api/todos/{}", id),
        Some(&ctx.auth_header()),
        None,
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, created);

    ctx.cleanup().await.unwrap();
}

/// A nonexistent id is a 404
#[tokio::test]
async fn test_get_todo_not_found() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "GET",
        "/api/todos/999999",
        Some(&ctx.auth_header()),
        None,
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    ctx.cleanup().await.unwrap();
}

/// A partial update changes only the supplied field
#[tokio::test]
async fn test_update_todo_partial() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "POST",
        "/api/todos",
        Some(&ctx.auth_header()),
        Some(json!({ "todo": "Testing!" })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    let created = response_json(response).await;
    let id = created["id"].as_i64().unwrap();

    // Flip completed without touching the text
    let request = json_request(
        "PUT",
        &format!("/api/todos/{}", id),
        Some(&ctx.auth_header()),
        Some(json!({ "completed": true })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["todo"], "Testing!");
    assert_eq!(body["completed"], true);
    assert_eq!(body["id"], id);

    ctx.cleanup().await.unwrap();
}

/// Updating both fields at once works too
#[tokio::test]
async fn test_update_todo_full() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "POST",
        "/api/todos",
        Some(&ctx.auth_header()),
        Some(json!({ "todo": "before" })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    let id = response_json(response).await["id"].as_i64().unwrap();

    let request = json_request(
        "PUT",
        &format!("/api/todos/{}", id),
        Some(&ctx.auth_header()),
        Some(json!({ "todo": "after", "completed": true })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["todo"], "after");
    assert_eq!(body["completed"], true);

    ctx.cleanup().await.unwrap();
}

/// Delete returns the removed record and empties the list
#[tokio::test]
async fn test_delete_todo() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "POST",
        "/api/todos",
        Some(&ctx.auth_header()),
        Some(json!({ "todo": "remove me" })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    let created = response_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let request = json_request(
        "DELETE",
        &format!("/api/todos/{}", id),
        Some(&ctx.auth_header()),
        None,
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, created);

    // Deleting again is a 404
    let request = json_request(
        "DELETE",
        &format!("/api/todos/{}", id),
        Some(&ctx.auth_header()),
        None,
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // And the list is empty
    let request = json_request("GET", "/api/todos", Some(&ctx.auth_header()), None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response_json(response).await, json!([]));

    ctx.cleanup().await.unwrap();
}

/// A request with no authorization header gets the fixed 401 body
#[tokio::test]
async fn test_missing_token_rejected() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request("GET", "/api/todos", None, None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response_json(response).await,
        json!({ "error": "no authorization found" })
    );

    ctx.cleanup().await.unwrap();
}

/// A garbage token gets the same fixed 401 body
#[tokio::test]
async fn test_invalid_token_rejected() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "POST",
        "/api/todos",
        Some("not-a-real-token"),
        Some(json!({ "todo": "should not exist" })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response_json(response).await,
        json!({ "error": "no authorization found" })
    );

    ctx.cleanup().await.unwrap();
}

/// A Bearer-prefixed token is accepted
#[tokio::test]
async fn test_bearer_prefixed_token_accepted() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "GET",
        "/api/todos",
        Some(&format!("Bearer {}", ctx.token)),
        None,
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    ctx.cleanup().await.unwrap();
}

/// One user can never see or touch another user's todos
#[tokio::test]
async fn test_ownership_isolation() {
    let ctx = TestContext::new().await.unwrap();
    let (other_user, other_token) = ctx.create_other_user().await.unwrap();

    // First user creates a todo
    let request = json_request(
        "POST",
        "/api/todos",
        Some(&ctx.auth_header()),
        Some(json!({ "todo": "mine" })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    let id = response_json(response).await["id"].as_i64().unwrap();

    // Second user can't get it
    let request = json_request(
        "GET",
        &format!("/api/todos/{}", id),
        Some(&other_token),
        None,
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Can't update it
    let request = json_request(
        "PUT",
        &format!("/api/todos/{}", id),
        Some(&other_token),
        Some(json!({ "completed": true })),
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Can't delete it
    let request = json_request(
        "DELETE",
        &format!("/api/todos/{}", id),
        Some(&other_token),
        None,
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // And doesn't see it in their list
    let request = json_request("GET", "/api/todos", Some(&other_token), None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response_json(response).await, json!([]));

    // The owner still has it, untouched
    let request = json_request(
        "GET",
        &format!("/api/todos/{}", id),
        Some(&ctx.auth_header()),
        None,
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["completed"], false);

    // Cleanup the extra user before the context user
    todolist_shared::models::user::User::delete(&ctx.db, other_user.id)
        .await
        .unwrap();
    ctx.cleanup().await.unwrap();
}

/// A body that isn't valid JSON gets a 400 with the JSON error shape
#[tokio::test]
async fn test_malformed_body_rejected_as_json() {
    let ctx = TestContext::new().await.unwrap();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/todos")
        .header("authorization", ctx.auth_header())
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(body["error"].is_string());

    ctx.cleanup().await.unwrap();
}

/// A non-numeric todo id gets a 400 with the JSON error shape
#[tokio::test]
async fn test_non_numeric_id_rejected_as_json() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request(
        "GET",
        "/api/todos/not-a-number",
        Some(&ctx.auth_header()),
        None,
    );
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert!(body["error"].is_string());

    ctx.cleanup().await.unwrap();
}

/// Health check reports a connected database
#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new().await.unwrap();

    let request = json_request("GET", "/health", None, None);
    let response = ctx.app.clone().call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");

    ctx.cleanup().await.unwrap();
}
