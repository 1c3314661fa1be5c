//! # Mutation Controller
//!
//! The single owner of an open document. Every user intent goes through the
//! controller, which applies it to the [`Document`], and then schedules a
//! debounced save of the new snapshot.
//!
//! ```text
//! intent ──► MutationController ──► Document
//!                   │                  │
//!                   │                  ├──► render::render_document
//!                   │                  └──► schema::form_for
//!                   └──► SaveScheduler ──► ProjectStore (after 1s quiet)
//! ```
//!
//! Intents that change nothing (moving the first instance up, selecting)
//! do not schedule a save.

pub mod client;
pub mod save;

pub use client::{AssetUploader, HttpProjectClient, ProjectStore};
pub use save::{DEFAULT_SAVE_DELAY, SaveScheduler, SaveStatus};

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::document::{ComponentInstance, Direction, Document};
use crate::error::TesseraError;
use crate::markup::Node;
use crate::persist;
use crate::render;
use crate::schema::{self, FieldEdit, FormSchema};
use crate::settings::Settings;

/// Controller tuning.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Quiet period between the last edit and the save.
    pub save_delay: Duration,
    /// Plan limit on instances per page.
    pub max_components: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            save_delay: DEFAULT_SAVE_DELAY,
            max_components: 10,
        }
    }
}

pub struct MutationController {
    document: Document,
    name: String,
    settings: Settings,
    saver: SaveScheduler,
    uploader: Option<Arc<dyn AssetUploader>>,
}

impl MutationController {
    pub fn new(
        document: Document,
        name: impl Into<String>,
        settings: Settings,
        store: Arc<dyn ProjectStore>,
        config: &ControllerConfig,
    ) -> Self {
        Self {
            document,
            name: name.into(),
            settings,
            saver: SaveScheduler::new(store, config.save_delay),
            uploader: None,
        }
    }

    /// Load the project from `store` and open it.
    ///
    /// Malformed content or settings open as an empty page or defaults; only
    /// a failed fetch is an error.
    pub async fn load(store: Arc<dyn ProjectStore>, config: &ControllerConfig) -> Result<Self, TesseraError> {
        let project = store.load().await?.decode();
        info!(
            project = project.id,
            components = project.instances.len(),
            "opening project"
        );
        let name = project.name.clone();
        let settings = project.settings.clone();
        let document = project.into_document(config.max_components);
        Ok(Self::new(document, name, settings, store, config))
    }

    pub fn with_uploader(mut self, uploader: Arc<dyn AssetUploader>) -> Self {
        self.uploader = Some(uploader);
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn save_status(&self) -> watch::Receiver<SaveStatus> {
        self.saver.subscribe()
    }

    pub fn has_pending_save(&self) -> bool {
        self.saver.is_pending()
    }

    fn snapshot(&self) -> Result<persist::ProjectUpdate, TesseraError> {
        persist::encode_update(&self.name, &self.document, &self.settings)
    }

    fn changed(&mut self) {
        match self.snapshot() {
            Ok(update) => self.saver.schedule(update),
            Err(err) => warn!(error = %err, "could not encode snapshot, save skipped"),
        }
    }

    // ========================================================================
    // INTENTS
    // ========================================================================

    /// Add an instance of `type_name` at the end of the page.
    pub fn add(&mut self, type_name: &str) -> Result<u64, TesseraError> {
        let id = self.document.add_instance(type_name)?;
        info!(id, type_name, "component added");
        self.changed();
        Ok(id)
    }

    pub fn move_instance(&mut self, id: u64, direction: Direction) -> bool {
        let moved = self.document.move_instance(id, direction);
        if moved {
            self.changed();
        }
        moved
    }

    pub fn remove(&mut self, id: u64) -> Option<ComponentInstance> {
        let removed = self.document.remove_instance(id)?;
        info!(id, type_name = %removed.type_name, "component removed");
        self.changed();
        Some(removed)
    }

    /// Remove every instance.
    pub fn clear(&mut self) {
        self.document.clear();
        self.changed();
    }

    /// Change the selection. Selection is editor state and is not saved.
    pub fn select(&mut self, id: Option<u64>) -> bool {
        self.document.select(id)
    }

    pub fn patch_field(&mut self, id: u64, path: &str, value: Value) -> Result<(), TesseraError> {
        self.document.patch_field(id, path, value)?;
        self.changed();
        Ok(())
    }

    /// Apply an edit emitted by a properties form.
    pub fn edit(&mut self, id: u64, edit: &FieldEdit) -> Result<(), TesseraError> {
        edit.apply(&mut self.document, id)?;
        self.changed();
        Ok(())
    }

    pub fn rename(&mut self, name: &str) {
        self.name = name.trim().to_string();
        self.changed();
    }

    pub fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.changed();
    }

    /// Upload a file and write its URL to `path` once the upload succeeds.
    ///
    /// On failure the field keeps its old value.
    pub async fn upload_into(
        &mut self,
        id: u64,
        path: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, TesseraError> {
        let uploader = self
            .uploader
            .clone()
            .ok_or_else(|| TesseraError::UploadFailure("no uploader configured".into()))?;
        if self.document.get(id).is_none() {
            return Err(TesseraError::NotFound(id));
        }
        let url = uploader.upload(file_name, bytes).await.inspect_err(|err| {
            warn!(id, path, error = %err, "upload failed");
        })?;
        self.patch_field(id, path, Value::String(url.clone()))?;
        info!(id, path, url = %url, "upload stored");
        Ok(url)
    }

    /// Save now, cancelling any pending save.
    pub async fn flush(&mut self) -> Result<(), TesseraError> {
        let update = self.snapshot()?;
        self.saver.flush(update).await
    }

    // ========================================================================
    // VIEWS
    // ========================================================================

    /// The editor canvas.
    pub fn render(&self) -> Node {
        render::render_document(&self.document)
    }

    /// The properties form of the selected instance.
    pub fn selected_form(&self) -> Option<FormSchema> {
        self.document.selected().and_then(schema::form_for)
    }

    /// The page as standalone HTML.
    pub fn export_html(&self) -> String {
        render::render_page(self.document.instances(), &self.settings)
    }
}
