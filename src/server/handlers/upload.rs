//! Image upload handler.

use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::super::state::AppState;
use super::{ApiError, api_error};

/// Extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

/// Largest accepted request body.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

const INVALID_TYPE: &str = "Invalid file type. Allowed: png, jpg, jpeg, gif, webp, svg";

/// Response from the upload endpoint.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Lowercased extension of an allowed file name.
pub fn allowed_extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// POST /api/upload - Store an image and return its URL.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("Multipart error: {}", e)))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| api_error(StatusCode::BAD_REQUEST, format!("Failed to read file: {}", e)))?;
            file = Some((file_name, bytes.to_vec()));
            break;
        }
    }

    let (file_name, bytes) = file.ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "No file provided"))?;
    if file_name.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "No file selected"));
    }
    let ext = allowed_extension(&file_name).ok_or_else(|| api_error(StatusCode::BAD_REQUEST, INVALID_TYPE))?;

    let stored_name = format!("{}.{}", Uuid::new_v4().simple(), ext);
    let dir = &state.config.upload_dir;
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("Upload failed: {}", e)))?;
    tokio::fs::write(dir.join(&stored_name), &bytes)
        .await
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, format!("Upload failed: {}", e)))?;

    info!(original = %file_name, stored = %stored_name, size = bytes.len(), "file uploaded");
    Ok(Json(UploadResponse {
        url: format!("/uploads/{}", stored_name),
    }))
}
