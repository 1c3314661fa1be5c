//! # Project Persistence Format
//!
//! A project travels as `{ id, name, content, settings }` where `content` and
//! `settings` are themselves JSON strings: the instance list and the page
//! settings. Decoding is forgiving. A missing or unparseable `content` loads
//! as an empty page and bad `settings` load as defaults; each fallback is
//! logged and never fails the load.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::document::{ComponentInstance, Document};
use crate::error::TesseraError;
use crate::settings::Settings;

/// A project as stored and sent over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default = "default_name")]
    pub name: String,
    /// JSON string of the instance list.
    #[serde(default)]
    pub content: Option<String>,
    /// JSON string of the settings.
    #[serde(default)]
    pub settings: Option<String>,
}

/// Body of a save. Absent fields are left unchanged by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<String>,
}

/// A decoded project.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub instances: Vec<ComponentInstance>,
    pub settings: Settings,
}

pub const DEFAULT_PROJECT_NAME: &str = "Untitled Project";

fn default_name() -> String {
    DEFAULT_PROJECT_NAME.to_string()
}

impl ProjectRecord {
    /// A fresh project. Content and settings stay unset until the first save.
    pub fn new(id: u64, name: &str) -> Self {
        let name = name.trim();
        Self {
            id,
            name: if name.is_empty() { default_name() } else { name.to_string() },
            content: None,
            settings: None,
        }
    }

    /// Decode content and settings, falling back where they are malformed.
    pub fn decode(&self) -> Project {
        Project {
            id: self.id,
            name: self.name.clone(),
            instances: decode_content(self.content.as_deref()).unwrap_or_else(|err| {
                warn!(project = self.id, error = %err, "content unreadable, loading empty page");
                Vec::new()
            }),
            settings: decode_settings(self.settings.as_deref()).unwrap_or_else(|err| {
                warn!(project = self.id, error = %err, "settings unreadable, using defaults");
                Settings::default()
            }),
        }
    }

    /// Merge a save into this record.
    pub fn apply(&mut self, update: ProjectUpdate) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if update.content.is_some() {
            self.content = update.content;
        }
        if update.settings.is_some() {
            self.settings = update.settings;
        }
    }
}

impl Project {
    /// Load the instances into a document with the given limit.
    pub fn into_document(self, max_components: usize) -> Document {
        Document::from_instances(self.instances, max_components)
    }
}

/// Parse the `content` string. Absent content is an empty page.
pub fn decode_content(content: Option<&str>) -> Result<Vec<ComponentInstance>, TesseraError> {
    match content {
        None => Ok(Vec::new()),
        Some(s) if s.trim().is_empty() => Ok(Vec::new()),
        Some(s) => serde_json::from_str(s).map_err(|e| TesseraError::MalformedPersistedState(format!("content: {}", e))),
    }
}

/// Parse the `settings` string. Absent settings are the defaults.
pub fn decode_settings(settings: Option<&str>) -> Result<Settings, TesseraError> {
    match settings {
        None => Ok(Settings::default()),
        Some(s) if s.trim().is_empty() => Ok(Settings::default()),
        Some(s) => serde_json::from_str(s).map_err(|e| TesseraError::MalformedPersistedState(format!("settings: {}", e))),
    }
}

/// Count the instances in a `content` string without decoding them.
pub fn content_len(content: &str) -> Result<usize, TesseraError> {
    let items: Vec<serde_json::Value> = serde_json::from_str(content)
        .map_err(|e| TesseraError::MalformedPersistedState(format!("content: {}", e)))?;
    Ok(items.len())
}

pub fn encode_content(instances: &[ComponentInstance]) -> Result<String, TesseraError> {
    Ok(serde_json::to_string(instances)?)
}

pub fn encode_settings(settings: &Settings) -> Result<String, TesseraError> {
    Ok(serde_json::to_string(settings)?)
}

/// The save body for a document snapshot.
pub fn encode_update(name: &str, document: &Document, settings: &Settings) -> Result<ProjectUpdate, TesseraError> {
    Ok(ProjectUpdate {
        name: Some(name.to_string()),
        content: Some(encode_content(document.instances())?),
        settings: Some(encode_settings(settings)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record(content: Option<&str>, settings: Option<&str>) -> ProjectRecord {
        ProjectRecord {
            id: 4,
            name: "Site".into(),
            content: content.map(str::to_string),
            settings: settings.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_content_is_empty_page() {
        let project = record(None, None).decode();
        assert!(project.instances.is_empty());
        assert_eq!(project.settings, Settings::default());
    }

    #[test]
    fn test_malformed_content_falls_back() {
        let project = record(Some("{not json"), Some("oops")).decode();
        assert!(project.instances.is_empty());
        assert_eq!(project.settings.title, "My Website");
        assert!(matches!(
            decode_content(Some("{not json")),
            Err(TesseraError::MalformedPersistedState(_))
        ));
    }

    #[test]
    fn test_save_then_load_preserves_document() {
        let mut doc = Document::new(10);
        let hero = doc.add_instance("hero").unwrap();
        doc.add_instance("graph").unwrap();
        doc.patch_field(hero, "title", json!("Saved")).unwrap();
        let settings = Settings {
            title: "Shop".into(),
            ..Settings::default()
        };

        let mut stored = ProjectRecord::new(4, "Site");
        stored.apply(encode_update("Renamed", &doc, &settings).unwrap());

        let project = stored.decode();
        assert_eq!(project.name, "Renamed");
        assert_eq!(project.settings, settings);
        let loaded = project.into_document(10);
        assert_eq!(loaded.instances(), doc.instances());
    }

    #[test]
    fn test_unknown_types_survive_round_trip() {
        let content = r#"[{"id": 9, "type": "carousel", "data": {"slides": 3}}]"#;
        let instances = decode_content(Some(content)).unwrap();
        assert_eq!(instances[0].type_name, "carousel");
        let again = encode_content(&instances).unwrap();
        assert_eq!(decode_content(Some(&again)).unwrap(), instances);
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let mut stored = ProjectRecord::new(1, "  ");
        assert_eq!(stored.name, DEFAULT_PROJECT_NAME);
        let settings = stored.settings.clone();
        stored.apply(ProjectUpdate {
            content: Some("[]".into()),
            ..ProjectUpdate::default()
        });
        assert_eq!(stored.settings, settings);
        assert_eq!(stored.name, DEFAULT_PROJECT_NAME);
    }

    #[test]
    fn test_content_len() {
        assert_eq!(content_len("[{}, {}]").unwrap(), 2);
        assert!(content_len("{}").is_err());
    }
}
