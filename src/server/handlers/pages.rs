//! HTML pages: the project index and live previews.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::catalog;
use crate::markup::{Node, el, escape_text};
use crate::render;

use super::super::state::AppState;

/// GET / - List projects with links to their previews.
///
/// The component catalog is injected as `window.__COMPONENT_TYPES` so an
/// editor script can build its palette without an extra request.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let projects = state.list().await;
    let list: Node = if projects.is_empty() {
        el("p").text("No projects yet. Create one with POST /api/projects.").into()
    } else {
        el("ul")
            .children(projects.iter().map(|p| {
                el("li").child(
                    el("a")
                        .url("href", &format!("/preview/{}", p.record.id))
                        .text(p.record.name.clone()),
                )
            }))
            .into()
    };

    // `<` is escaped so the JSON cannot close the script element.
    let types = serde_json::to_string(&catalog::component_types())
        .unwrap_or_else(|_| "[]".to_string())
        .replace('<', "\\u003c");

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Tessera</title>
<script>window.__COMPONENT_TYPES={types}</script>
</head>
<body style="font-family: system-ui, sans-serif; padding: 2rem;">
<h1>Projects</h1>
{list}
<p style="color: #64748b;">Plan: {plan} (up to {limit} components per page). Build {boot}.</p>
</body>
</html>
"#,
        types = types,
        list = list.to_html(),
        plan = escape_text(state.plan().title()),
        limit = state.plan().max_components(),
        boot = state.boot_time,
    ))
}

/// GET /preview/:id - The exported page, served as HTML.
pub async fn preview(State(state): State<Arc<AppState>>, Path(id): Path<u64>) -> Response {
    match state.get(id).await {
        Some(project) => {
            let project = project.record.decode();
            Html(render::render_page(&project.instances, &project.settings)).into_response()
        }
        None => (StatusCode::NOT_FOUND, "Project not found").into_response(),
    }
}
