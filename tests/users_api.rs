//! End-to-end tests driving the router through HTTP requests

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use rest_users::api::{create_router, create_router_with_options, AppState, RouterOptions};
use rest_users::infrastructure::page::FilePageRenderer;
use rest_users::infrastructure::user::{InMemoryUserRepository, UserService};

fn create_state() -> AppState {
    let templates = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates");
    let repository = Arc::new(InMemoryUserRepository::new());

    AppState::new(
        Arc::new(UserService::new(repository)),
        Arc::new(FilePageRenderer::new(templates)),
    )
}

fn create_app() -> Router {
    create_router(create_state())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, text) = send(app, method, uri, body).await;
    (status, serde_json::from_str(&text).unwrap())
}

fn user(username: &str, email: &str, password: &str) -> Value {
    json!({"username": username, "email": email, "password": password})
}

#[tokio::test]
async fn test_create_get_delete_scenario() {
    let app = create_app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/users/",
        Some(user("alice", "a@x.com", "Secret1x")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "username": "alice", "email": "a@x.com"}));

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/users/",
        Some(user("bob", "bad-email", "Secret1x")),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["message"], "invalid email");
    assert_eq!(body["error"]["param"], "email");

    let (status, body) = send_json(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "username": "alice", "email": "a@x.com"}));

    let (status, body) = send_json(&app, Method::DELETE, "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "username": "alice", "email": "a@x.com"}));

    let (status, body) = send_json(&app, Method::GET, "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_list_users_in_creation_order() {
    let app = create_app();

    let (status, body) = send_json(&app, Method::GET, "/users/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"users": []}));

    for name in ["alice", "bob", "carol"] {
        let email = format!("{name}@x.com");
        send_json(&app, Method::POST, "/users/", Some(user(name, &email, "Secret1x"))).await;
    }

    let (_, body) = send_json(&app, Method::GET, "/users/", None).await;
    let users = body["users"].as_array().unwrap();
    let ids: Vec<u64> = users.iter().map(|u| u["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(users[1]["username"], "bob");
}

#[tokio::test]
async fn test_password_rules_reported_in_order() {
    let app = create_app();

    let cases = [
        ("Sh0rt", "password must have at least 8 characters."),
        ("lowercase1", "password must contain at least one uppercase letter."),
        ("NoDigitsHere", "password must contain at least one number."),
    ];

    for (password, message) in cases {
        let (status, body) = send_json(
            &app,
            Method::POST,
            "/users/",
            Some(user("alice", "a@x.com", password)),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["message"], message);
        assert_eq!(body["error"]["param"], "password");
    }

    let (_, body) = send_json(&app, Method::GET, "/users/", None).await;
    assert_eq!(body, json!({"users": []}));
}

#[tokio::test]
async fn test_update_keeps_id() {
    let app = create_app();
    send_json(&app, Method::POST, "/users/", Some(user("alice", "a@x.com", "Secret1x"))).await;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/users/1",
        Some(user("alicia", "alicia@x.com", "Changed99")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "username": "alicia", "email": "alicia@x.com"})
    );

    let (_, body) = send_json(&app, Method::GET, "/users/1", None).await;
    assert_eq!(body["username"], "alicia");
}

#[tokio::test]
async fn test_update_missing_and_invalid() {
    let app = create_app();

    let (status, _) = send_json(
        &app,
        Method::PUT,
        "/users/5",
        Some(user("alice", "a@x.com", "Secret1x")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    send_json(&app, Method::POST, "/users/", Some(user("alice", "a@x.com", "Secret1x"))).await;
    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/users/1",
        Some(user("", "a@x.com", "Secret1x")),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["param"], "username");
}

#[tokio::test]
async fn test_ids_after_deletion() {
    let app = create_app();
    for name in ["alice", "bob", "carol"] {
        send_json(&app, Method::POST, "/users/", Some(user(name, "x@x.com", "Secret1x"))).await;
    }

    send_json(&app, Method::DELETE, "/users/2", None).await;

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/users/",
        Some(user("dave", "d@x.com", "Secret1x")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 4);

    // Record 3 now sits at position 2; update must still hit record 3
    let (_, body) = send_json(
        &app,
        Method::PUT,
        "/users/3",
        Some(user("caroline", "c@x.com", "Secret1x")),
    )
    .await;
    assert_eq!(body["id"], 3);

    let (_, body) = send_json(&app, Method::GET, "/users/", None).await;
    let names: Vec<&str> = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alice", "caroline", "dave"]);
}

#[tokio::test]
async fn test_password_never_returned() {
    let app = create_app();

    let (_, created) = send(
        &app,
        Method::POST,
        "/users/",
        Some(user("alice", "a@x.com", "Secret1x")),
    )
    .await;
    let (_, listed) = send(&app, Method::GET, "/users/", None).await;
    let (_, fetched) = send(&app, Method::GET, "/users/1", None).await;
    let (_, deleted) = send(&app, Method::DELETE, "/users/1", None).await;

    for body in [created, listed, fetched, deleted] {
        assert!(!body.contains("Secret1x"));
        assert!(!body.contains("password"));
    }
}

#[tokio::test]
async fn test_malformed_requests() {
    let app = create_app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/users/",
        Some(json!({"username": "alice", "email": "a@x.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "json_parse_error");

    let (status, body) = send_json(&app, Method::GET, "/users/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["param"], "id");

    let (status, _) = send_json(&app, Method::GET, "/users/0", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send_json(&app, Method::GET, "/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_html_pages() {
    let app = create_app();

    let (status, html) = send(&app, Method::GET, "/get_users.html", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<title>Users</title>"));
    assert!(html.contains("fetch(\"/users/\")"));

    let (status, html) = send(&app, Method::GET, "/create_user.html", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<form id=\"create-user\">"));
}

#[tokio::test]
async fn test_api_only_router_has_no_pages() {
    let app = create_router_with_options(create_state(), RouterOptions::default());

    let (status, _) = send(&app, Method::GET, "/get_users.html", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/users/", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_probes() {
    let app = create_app();

    let (status, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send_json(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"][0]["name"], "user_store");

    let (status, _) = send(&app, Method::GET, "/live", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_response_headers() {
    let app = create_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/users/")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-request-id"], "req-42");
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert!(headers.contains_key("content-security-policy"));
}
