//! Project store and asset uploader, and their HTTP implementation.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::TesseraError;
use crate::persist::{ProjectRecord, ProjectUpdate};

/// Loads and saves one project.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn load(&self) -> Result<ProjectRecord, TesseraError>;

    /// Save a snapshot. Failure is reported, never rolled back locally.
    async fn save(&self, update: ProjectUpdate) -> Result<(), TesseraError>;
}

/// Stores an uploaded file and returns the URL it is served from.
#[async_trait]
pub trait AssetUploader: Send + Sync {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, TesseraError>;
}

/// Error body returned by the server on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct UploadBody {
    url: String,
}

/// [`ProjectStore`] and [`AssetUploader`] backed by the project API.
#[derive(Debug, Clone)]
pub struct HttpProjectClient {
    http: reqwest::Client,
    base_url: String,
    project_id: u64,
}

impl HttpProjectClient {
    pub fn new(base_url: impl Into<String>, project_id: u64) -> Result<Self, TesseraError> {
        let http = reqwest::Client::builder()
            .user_agent("tessera/0.1")
            .build()
            .map_err(|e| TesseraError::Http(format!("HTTP client error: {}", e)))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project_id,
        })
    }

    fn project_url(&self) -> String {
        format!("{}/api/projects/{}", self.base_url, self.project_id)
    }

    fn upload_url(&self) -> String {
        format!("{}/api/upload", self.base_url)
    }
}

/// The server's message for a failed response, or the status line.
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status_text(status),
    }
}

fn status_text(status: StatusCode) -> String {
    format!("{} {}", status.as_u16(), status.canonical_reason().unwrap_or("error"))
}

#[async_trait]
impl ProjectStore for HttpProjectClient {
    async fn load(&self) -> Result<ProjectRecord, TesseraError> {
        let response = self.http.get(self.project_url()).send().await?;
        if !response.status().is_success() {
            return Err(TesseraError::Http(error_message(response).await));
        }
        let record: ProjectRecord = response.json().await?;
        info!(project = record.id, name = %record.name, "project loaded");
        Ok(record)
    }

    async fn save(&self, update: ProjectUpdate) -> Result<(), TesseraError> {
        let response = self.http.put(self.project_url()).json(&update).send().await?;
        if response.status().is_success() {
            debug!(project = self.project_id, "project saved");
            Ok(())
        } else {
            Err(TesseraError::SaveFailure(error_message(response).await))
        }
    }
}

#[async_trait]
impl AssetUploader for HttpProjectClient {
    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<String, TesseraError> {
        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime.as_ref())
            .map_err(|e| TesseraError::UploadFailure(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| TesseraError::UploadFailure(e.to_string()))?;
        if !response.status().is_success() {
            return Err(TesseraError::UploadFailure(error_message(response).await));
        }
        let body: UploadBody = response
            .json()
            .await
            .map_err(|e| TesseraError::UploadFailure(e.to_string()))?;
        Ok(body.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = HttpProjectClient::new("http://localhost:8080/", 7).unwrap();
        assert_eq!(client.project_url(), "http://localhost:8080/api/projects/7");
        assert_eq!(client.upload_url(), "http://localhost:8080/api/upload");
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(StatusCode::FORBIDDEN), "403 Forbidden");
    }
}
