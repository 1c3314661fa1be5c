//! Project CRUD handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::TesseraError;
use crate::persist::{self, DEFAULT_PROJECT_NAME, ProjectRecord, ProjectUpdate};

use super::super::state::AppState;
use super::{ApiError, api_error};

/// Request body for creating a project.
#[derive(Debug, Deserialize)]
pub struct CreateProject {
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    DEFAULT_PROJECT_NAME.to_string()
}

/// Project summary returned by create and list.
#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

/// GET /api/projects - List projects.
pub async fn list(State(state): State<Arc<AppState>>) -> Json<Vec<ProjectSummary>> {
    let projects = state.list().await;
    Json(
        projects
            .into_iter()
            .map(|p| ProjectSummary {
                id: p.record.id,
                name: p.record.name,
            })
            .collect(),
    )
}

/// POST /api/projects - Create an empty project.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProject>,
) -> Result<Json<ProjectSummary>, ApiError> {
    let project = state.create(&req.name).await.map_err(|e| match e {
        TesseraError::LimitExceeded { .. } => api_error(
            StatusCode::FORBIDDEN,
            "Project limit reached. Upgrade to Pro for unlimited projects.",
        ),
        other => other.into(),
    })?;
    info!(project = project.record.id, name = %project.record.name, "project created");
    Ok(Json(ProjectSummary {
        id: project.record.id,
        name: project.record.name,
    }))
}

/// GET /api/projects/:id - Fetch a project.
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<ProjectRecord>, ApiError> {
    let project = state.get(id).await.ok_or(TesseraError::NotFound(id))?;
    Ok(Json(project.record))
}

/// PUT /api/projects/:id - Save a project.
///
/// Content holding more components than the plan allows is refused.
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(update): Json<ProjectUpdate>,
) -> Result<Json<Success>, ApiError> {
    if let Some(content) = &update.content {
        let count = persist::content_len(content)?;
        let plan = state.plan();
        if count > plan.max_components() {
            warn!(project = id, count, limit = plan.max_components(), "save over component limit");
            return Err(api_error(
                StatusCode::FORBIDDEN,
                format!(
                    "Component limit exceeded. {} tier allows {} components.",
                    plan.title(),
                    plan.max_components()
                ),
            ));
        }
    }
    state.update(id, update).await?;
    info!(project = id, "project saved");
    Ok(Json(Success { success: true }))
}

/// DELETE /api/projects/:id - Delete a project.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Success>, ApiError> {
    state.delete(id).await?;
    info!(project = id, "project deleted");
    Ok(Json(Success { success: true }))
}
