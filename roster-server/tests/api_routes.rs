//! JSON API and health tests

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use roster_server::db::create_pool_with_options;
use roster_server::{build_router, run_migrations, ServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> Router {
    let pool = create_pool_with_options("sqlite::memory:", 1)
        .await
        .expect("pool creation failed");
    run_migrations(&pool).await.expect("migrations failed");
    build_router(pool, &ServerConfig::default())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

fn create(name: &str) -> Request<Body> {
    Request::post("/api/students")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "name": name }).to_string()))
        .unwrap()
}

fn list() -> Request<Body> {
    Request::get("/api/students").body(Body::empty()).unwrap()
}

#[tokio::test]
async fn list_starts_empty() {
    let app = app().await;

    let (status, body) = send(&app, list()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_returns_201_with_record() {
    let app = app().await;

    let (status, body) = send(&app, create("  Alice ")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Alice");
    assert!(body["id"].as_i64().unwrap() >= 1);
}

#[tokio::test]
async fn list_reflects_insertion_order() {
    let app = app().await;

    send(&app, create("Alice")).await;
    send(&app, create("Bob")).await;

    let (_, body) = send(&app, list()).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[tokio::test]
async fn blank_name_is_400() {
    let app = app().await;

    let (status, body) = send(&app, create("   ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (_, body) = send(&app, list()).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn oversized_name_is_400() {
    let app = app().await;

    let (status, body) = send(&app, create(&"x".repeat(256))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "student name exceeds maximum length of 255 characters"
    );
}

fn create_raw(body: &'static str, content_type: &'static str) -> Request<Body> {
    Request::post("/api/students")
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn missing_name_field_is_400_json() {
    let app = app().await;

    let (status, body) = send(&app, create_raw("{}", "application/json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert!(body["message"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn malformed_json_is_400_json() {
    let app = app().await;

    let (status, body) = send(&app, create_raw("{\"name\":", "application/json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn non_json_content_type_is_400_json() {
    let app = app().await;

    let (status, body) = send(&app, create_raw("name=Alice", "text/plain")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");

    let (_, body) = send(&app, list()).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn storage_failure_is_500() {
    let pool = create_pool_with_options("sqlite::memory:", 1).await.unwrap();
    let app = build_router(pool, &ServerConfig::default());

    let (status, body) = send(&app, create("Alice")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal_error");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app().await;

    let (status, body) = send(
        &app,
        Request::get("/health").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn health_reports_closed_pool() {
    let pool = create_pool_with_options("sqlite::memory:", 1).await.unwrap();
    let app = build_router(pool.clone(), &ServerConfig::default());
    pool.close().await;

    let (status, body) = send(
        &app,
        Request::get("/health").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
}
