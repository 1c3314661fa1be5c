//! Error types for the page builder.

use thiserror::Error;

/// Errors that can occur while editing, rendering, or persisting a page.
#[derive(Debug, Error)]
pub enum TesseraError {
    /// The component type is not registered in the catalog.
    #[error("Unknown component type: {0}")]
    UnknownComponentType(String),

    /// The document already holds as many components as the plan allows.
    #[error("Component limit reached. Your plan allows {limit} components per page.")]
    LimitExceeded { limit: usize },

    /// Removing the item would leave a required list empty.
    #[error("The {list} list needs at least one item")]
    MinimumItemCountViolation { list: String },

    /// Persisted content or settings could not be parsed.
    #[error("Malformed persisted state: {0}")]
    MalformedPersistedState(String),

    /// A field path could not be parsed or does not address existing data.
    #[error("Invalid field path: {0}")]
    InvalidFieldPath(String),

    /// No component instance with this id.
    #[error("Component not found: {0}")]
    NotFound(u64),

    /// An asset upload was rejected or could not be completed.
    #[error("Upload failed: {0}")]
    UploadFailure(String),

    /// The project store refused or failed to save.
    #[error("Save failed: {0}")]
    SaveFailure(String),

    /// Transport-level HTTP error.
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for TesseraError {
    fn from(err: reqwest::Error) -> Self {
        TesseraError::Http(err.to_string())
    }
}
