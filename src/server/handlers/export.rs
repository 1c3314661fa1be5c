//! Export handler.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::error::TesseraError;
use crate::render;

use super::super::state::AppState;
use super::{ApiError, api_error};

#[derive(Debug, Serialize)]
pub struct HtmlExport {
    pub html: String,
}

/// GET /api/export/:id/:format - Export a project. Only `html` is supported.
pub async fn export(
    State(state): State<Arc<AppState>>,
    Path((id, format)): Path<(u64, String)>,
) -> Result<Json<HtmlExport>, ApiError> {
    if format != "html" {
        return Err(api_error(StatusCode::BAD_REQUEST, "Invalid format"));
    }
    let project = state.get(id).await.ok_or(TesseraError::NotFound(id))?.record.decode();
    let html = render::render_page(&project.instances, &project.settings);
    info!(project = id, bytes = html.len(), "exported html");
    Ok(Json(HtmlExport { html }))
}
