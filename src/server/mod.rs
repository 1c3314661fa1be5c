//! # Preview Server
//!
//! Hosts the project API the editor talks to, plus HTML previews.
//!
//! ## Usage
//!
//! ```bash
//! tessera serve --listen 0.0.0.0:8080 --data-dir ./projects --plan pro
//! ```
//!
//! Then open http://localhost:8080 in a browser to list projects.
//!
//! ## Routes
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `GET/POST /api/projects` | list, create |
//! | `GET/PUT/DELETE /api/projects/:id` | load, save, delete |
//! | `POST /api/upload` | image upload, served sandboxed under `/uploads` |
//! | `GET /api/export/:id/html` | standalone page |
//! | `GET /api/components[/:type]` | catalog and templates |
//! | `POST /api/render` | canvas markup for instances |
//! | `POST /api/schema` | properties form, optionally after an edit |

mod handlers;
mod state;

pub use handlers::upload::{ALLOWED_EXTENSIONS, allowed_extension};
pub use state::{AppState, Plan, ServerConfig, StoredProject};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{services::ServeDir, set_header::SetResponseHeader, trace::TraceLayer};
use tracing::info;

use crate::error::TesseraError;

/// Build the application router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    // Uploaded files never run script on this origin, SVG included.
    let uploads = SetResponseHeader::overriding(
        ServeDir::new(&state.config.upload_dir),
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("sandbox"),
    );
    Router::new()
        // Pages
        .route("/", get(handlers::pages::index))
        .route("/preview/:id", get(handlers::pages::preview))
        // Project API
        .route(
            "/api/projects",
            get(handlers::projects::list).post(handlers::projects::create),
        )
        .route(
            "/api/projects/:id",
            get(handlers::projects::get)
                .put(handlers::projects::update)
                .delete(handlers::projects::delete),
        )
        .route("/api/export/:id/:format", get(handlers::export::export))
        // Uploads
        .route(
            "/api/upload",
            post(handlers::upload::upload)
                .layer(DefaultBodyLimit::max(handlers::upload::MAX_UPLOAD_BYTES)),
        )
        .nest_service("/uploads", uploads)
        // Editor API
        .route("/api/components", get(handlers::editor::components))
        .route("/api/components/:type", get(handlers::editor::template))
        .route("/api/render", post(handlers::editor::render))
        .route("/api/schema", post(handlers::editor::schema))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use tessera::server::{Plan, ServerConfig, serve};
///
/// # async fn example() -> Result<(), tessera::TesseraError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     upload_dir: "uploads".into(),
///     data_dir: None,
///     plan: Plan::Free,
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), TesseraError> {
    tokio::fs::create_dir_all(&config.upload_dir).await?;
    let app_state = Arc::new(AppState::load(config.clone()).await?);
    let app = router(app_state);

    info!(
        listen = %config.listen_addr,
        plan = config.plan.title(),
        uploads = %config.upload_dir.display(),
        "tessera server starting"
    );

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| TesseraError::Http(format!("Failed to bind to {}: {}", config.listen_addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| TesseraError::Http(format!("Server error: {}", e)))?;

    Ok(())
}
