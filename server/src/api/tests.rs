//! HTTP tests for the `/api/tasks` collection against an in-memory database.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::api::{create_router, AppState};
use crate::repository::init_db;

async fn test_router() -> Router {
    let db = init_db(&PathBuf::from(":memory:")).await.expect("Failed to init test DB");
    create_router(AppState::new(&db), None)
}

async fn api(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let body = match body {
        Some(v) => Body::from(serde_json::to_string(&v).unwrap()),
        None => Body::empty(),
    };
    let req = builder.body(body).unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn sample_task(router: &Router) -> Value {
    let (status, task) = api(
        router,
        "POST",
        "/api/tasks",
        Some(json!({"title": "Test Task", "description": "Test Description"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    task
}

#[tokio::test]
async fn test_get_tasks_empty() {
    let router = test_router().await;
    let (status, body) = api(&router, "GET", "/api/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_get_tasks_with_data() {
    let router = test_router().await;
    sample_task(&router).await;

    let (status, body) = api(&router, "GET", "/api/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["title"], "Test Task");
}

#[tokio::test]
async fn test_create_task_with_title_only() {
    let router = test_router().await;
    let (status, body) = api(&router, "POST", "/api/tasks", Some(json!({"title": "New Task"}))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "New Task");
    assert_eq!(body["description"], "");
    assert_eq!(body["completed"], false);
    assert!(body["id"].is_u64());
}

#[tokio::test]
async fn test_create_task_without_title() {
    let router = test_router().await;
    for payload in [json!({"description": "Only description"}), json!({}), json!({"title": "  "})] {
        let (status, body) = api(&router, "POST", "/api/tasks", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Title is required");
    }

    let (_, tasks) = api(&router, "GET", "/api/tasks", None).await;
    assert_eq!(tasks, json!([]));
}

#[tokio::test]
async fn test_create_task_malformed_body() {
    let router = test_router().await;
    let req = Request::builder()
        .method("POST")
        .uri("/api/tasks")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_update_task_title_keeps_description() {
    let router = test_router().await;
    let task = sample_task(&router).await;
    let uri = format!("/api/tasks/{}", task["id"]);

    let (status, body) = api(&router, "PUT", &uri, Some(json!({"title": "Updated Title"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Updated Title");
    assert_eq!(body["description"], "Test Description");
}

#[tokio::test]
async fn test_update_task_completed() {
    let router = test_router().await;
    let task = sample_task(&router).await;
    let uri = format!("/api/tasks/{}", task["id"]);

    let (status, body) = api(&router, "PUT", &uri, Some(json!({"completed": true}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed"], true);

    let (_, tasks) = api(&router, "GET", "/api/tasks", None).await;
    assert_eq!(tasks[0]["completed"], true);
}

#[tokio::test]
async fn test_update_task_blank_title_rejected() {
    let router = test_router().await;
    let task = sample_task(&router).await;
    let uri = format!("/api/tasks/{}", task["id"]);

    let (status, body) = api(&router, "PUT", &uri, Some(json!({"title": ""}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Title is required");
}

#[tokio::test]
async fn test_update_task_not_found() {
    let router = test_router().await;
    let (status, body) = api(&router, "PUT", "/api/tasks/999", Some(json!({"title": "Updated Title"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Task not found");

    let (status, _) = api(&router, "PUT", "/api/tasks/abc", Some(json!({"completed": true}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_task() {
    let router = test_router().await;
    let task = sample_task(&router).await;
    let uri = format!("/api/tasks/{}", task["id"]);

    let (status, body) = api(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task deleted successfully");

    let (_, tasks) = api(&router, "GET", "/api/tasks", None).await;
    assert_eq!(tasks, json!([]));
}

#[tokio::test]
async fn test_delete_task_not_found() {
    let router = test_router().await;
    let (status, body) = api(&router, "DELETE", "/api/tasks/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Task not found");
}

async fn get_text(router: &Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn test_home_page_served_from_static_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Taskboard</h1>").unwrap();

    let db = init_db(&PathBuf::from(":memory:")).await.unwrap();
    let router = create_router(AppState::new(&db), Some(dir.path().to_path_buf()));

    let (status, body) = get_text(&router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Taskboard"), "{}", body);

    // Unknown front-end paths fall back to the index page
    let (status, body) = get_text(&router, "/some/page").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Taskboard"), "{}", body);

    let (status, _) = get_text(&router, "/api/tasks").await;
    assert_eq!(status, StatusCode::OK);
}
