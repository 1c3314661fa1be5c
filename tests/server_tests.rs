//! # Server Tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use tessera::server::{AppState, Plan, ServerConfig, router};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn app(plan: Plan) -> Router {
    let config = ServerConfig {
        listen_addr: "127.0.0.1:0".to_string(),
        upload_dir: std::env::temp_dir().join("tessera-test-uploads"),
        data_dir: None,
        plan,
    };
    router(Arc::new(AppState::new(config)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn content_of(count: usize) -> String {
    let instances: Vec<Value> = (1..=count)
        .map(|id| json!({"id": id, "type": "text", "data": {"content": format!("Block {}", id)}}))
        .collect();
    Value::Array(instances).to_string()
}

// ============================================================================
// PROJECTS
// ============================================================================

#[tokio::test]
async fn create_then_fetch() {
    let app = app(Plan::Free);
    let (status, created) = send(&app, "POST", "/api/projects", Some(json!({"name": "Launch"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created, json!({"id": 1, "name": "Launch"}));

    let (status, project) = send(&app, "GET", "/api/projects/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(project["name"], json!("Launch"));
    assert_eq!(project["content"], Value::Null);
}

#[tokio::test]
async fn missing_name_uses_default() {
    let app = app(Plan::Free);
    let (_, created) = send(&app, "POST", "/api/projects", Some(json!({}))).await;
    assert_eq!(created["name"], json!("Untitled Project"));
}

#[tokio::test]
async fn project_limit_is_enforced() {
    let app = app(Plan::Free);
    for _ in 0..3 {
        let (status, _) = send(&app, "POST", "/api/projects", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, body) = send(&app, "POST", "/api/projects", Some(json!({}))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        json!("Project limit reached. Upgrade to Pro for unlimited projects.")
    );
}

#[tokio::test]
async fn save_within_limit_succeeds() {
    let app = app(Plan::Free);
    send(&app, "POST", "/api/projects", Some(json!({}))).await;
    let (status, body) = send(
        &app,
        "PUT",
        "/api/projects/1",
        Some(json!({"name": "Renamed", "content": content_of(10)})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));

    let (_, project) = send(&app, "GET", "/api/projects/1", None).await;
    assert_eq!(project["name"], json!("Renamed"));
}

#[tokio::test]
async fn save_over_component_limit_is_refused() {
    let app = app(Plan::Free);
    send(&app, "POST", "/api/projects", Some(json!({}))).await;
    let (status, body) = send(
        &app,
        "PUT",
        "/api/projects/1",
        Some(json!({"content": content_of(11)})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        json!("Component limit exceeded. Free tier allows 10 components.")
    );

    let (_, project) = send(&app, "GET", "/api/projects/1", None).await;
    assert_eq!(project["content"], Value::Null);
}

#[tokio::test]
async fn pro_plan_allows_more_components() {
    let app = app(Plan::Pro);
    send(&app, "POST", "/api/projects", Some(json!({}))).await;
    let (status, _) = send(
        &app,
        "PUT",
        "/api/projects/1",
        Some(json!({"content": content_of(11)})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delete_removes_project() {
    let app = app(Plan::Free);
    send(&app, "POST", "/api/projects", Some(json!({}))).await;
    let (status, _) = send(&app, "DELETE", "/api/projects/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", "/api/projects/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// EXPORT
// ============================================================================

#[tokio::test]
async fn export_html() {
    let app = app(Plan::Free);
    send(&app, "POST", "/api/projects", Some(json!({}))).await;
    send(
        &app,
        "PUT",
        "/api/projects/1",
        Some(json!({
            "content": content_of(2),
            "settings": json!({"title": "Export Test"}).to_string()
        })),
    )
    .await;

    let (status, body) = send(&app, "GET", "/api/export/1/html", None).await;
    assert_eq!(status, StatusCode::OK);
    let html = body["html"].as_str().unwrap();
    assert!(html.contains("<title>Export Test</title>"));
    assert!(html.contains("Block 2"));
}

#[tokio::test]
async fn export_rejects_other_formats() {
    let app = app(Plan::Free);
    send(&app, "POST", "/api/projects", Some(json!({}))).await;
    let (status, body) = send(&app, "GET", "/api/export/1/zip", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid format"));
}

// ============================================================================
// UPLOADS
// ============================================================================

#[tokio::test]
async fn uploaded_svg_is_served_sandboxed() {
    let app = app(Plan::Free);
    let dir = std::env::temp_dir().join("tessera-test-uploads");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("sandbox-check.svg"),
        r#"<svg xmlns="http://www.w3.org/2000/svg"><script>alert(1)</script></svg>"#,
    )
    .unwrap();

    let request = Request::builder()
        .uri("/uploads/sandbox-check.svg")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-security-policy")
            .and_then(|v| v.to_str().ok()),
        Some("sandbox")
    );
}

// ============================================================================
// EDITOR API
// ============================================================================

#[tokio::test]
async fn catalog_lists_every_type() {
    let app = app(Plan::Free);
    let (status, body) = send(&app, "GET", "/api/components", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(36));
}

#[tokio::test]
async fn unknown_template_is_bad_request() {
    let app = app(Plan::Free);
    let (status, body) = send(&app, "GET", "/api/components/carousel", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("carousel"));
}

#[tokio::test]
async fn render_marks_selection() {
    let app = app(Plan::Free);
    let (status, body) = send(
        &app,
        "POST",
        "/api/render",
        Some(json!({
            "instances": [
                {"id": 1, "type": "text", "data": {"content": "One"}},
                {"id": 2, "type": "text", "data": {"content": "Two"}}
            ],
            "selected": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let html = body["html"].as_str().unwrap();
    assert_eq!(html.matches("canvas-component selected").count(), 1);
}

#[tokio::test]
async fn schema_applies_edit() {
    let app = app(Plan::Free);
    let (_, template) = send(&app, "GET", "/api/components/gallery", None).await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/schema",
        Some(json!({
            "instance": {"id": 5, "type": "gallery", "data": template["data"]},
            "edit": {"op": "append_item", "list": "images"}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let before = template["data"]["images"].as_array().unwrap().len();
    let after = body["instance"]["data"]["images"].as_array().unwrap().len();
    assert_eq!(after, before + 1);
    assert_eq!(body["form"]["type"], json!("gallery"));
}
