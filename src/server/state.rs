//! Server state and configuration.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::TesseraError;
use crate::persist::{ProjectRecord, ProjectUpdate};

/// Subscription plan, which sets the per-page component limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    #[default]
    Free,
    Pro,
}

impl Plan {
    pub fn max_components(self) -> usize {
        match self {
            Plan::Free => 10,
            Plan::Pro => 999,
        }
    }

    pub fn max_projects(self) -> usize {
        match self {
            Plan::Free => 3,
            Plan::Pro => 999,
        }
    }

    /// Name shown in limit messages.
    pub fn title(self) -> &'static str {
        match self {
            Plan::Free => "Free",
            Plan::Pro => "Pro",
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Directory uploaded files are written to and served from.
    pub upload_dir: PathBuf,
    /// Directory holding one `<id>.json` per project. Projects live in
    /// memory only when unset.
    pub data_dir: Option<PathBuf>,
    pub plan: Plan,
}

/// A project as kept by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredProject {
    #[serde(flatten)]
    pub record: ProjectRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    /// Unix timestamp of server boot for cache busting.
    pub boot_time: u64,
    projects: RwLock<BTreeMap<u64, StoredProject>>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let boot_time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            config,
            boot_time,
            projects: RwLock::new(BTreeMap::new()),
        }
    }

    /// State with projects reloaded from `data_dir`.
    pub async fn load(config: ServerConfig) -> Result<Self, TesseraError> {
        let projects = match &config.data_dir {
            Some(dir) => read_projects(dir).await?,
            None => BTreeMap::new(),
        };
        if !projects.is_empty() {
            info!(count = projects.len(), "projects loaded from disk");
        }
        let state = Self::new(config);
        *state.projects.write().await = projects;
        Ok(state)
    }

    pub fn plan(&self) -> Plan {
        self.config.plan
    }

    pub async fn list(&self) -> Vec<StoredProject> {
        self.projects.read().await.values().cloned().collect()
    }

    pub async fn get(&self, id: u64) -> Option<StoredProject> {
        self.projects.read().await.get(&id).cloned()
    }

    /// Create a project, refusing once the plan's project limit is reached.
    pub async fn create(&self, name: &str) -> Result<StoredProject, TesseraError> {
        let mut projects = self.projects.write().await;
        if projects.len() >= self.plan().max_projects() {
            return Err(TesseraError::LimitExceeded {
                limit: self.plan().max_projects(),
            });
        }
        let id = projects.keys().next_back().map_or(1, |last| last + 1);
        let now = Utc::now();
        let project = StoredProject {
            record: ProjectRecord::new(id, name),
            created_at: now,
            updated_at: now,
        };
        self.write_file(&project).await?;
        projects.insert(id, project.clone());
        Ok(project)
    }

    pub async fn update(&self, id: u64, update: ProjectUpdate) -> Result<StoredProject, TesseraError> {
        let mut projects = self.projects.write().await;
        let project = projects.get_mut(&id).ok_or(TesseraError::NotFound(id))?;
        let mut updated = project.clone();
        updated.record.apply(update);
        updated.updated_at = Utc::now();
        self.write_file(&updated).await?;
        *project = updated.clone();
        Ok(updated)
    }

    pub async fn delete(&self, id: u64) -> Result<(), TesseraError> {
        let mut projects = self.projects.write().await;
        if projects.remove(&id).is_none() {
            return Err(TesseraError::NotFound(id));
        }
        if let Some(dir) = &self.config.data_dir {
            match tokio::fs::remove_file(project_file(dir, id)).await {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => return Err(e.into()),
                _ => {}
            }
        }
        Ok(())
    }

    async fn write_file(&self, project: &StoredProject) -> Result<(), TesseraError> {
        let Some(dir) = &self.config.data_dir else {
            return Ok(());
        };
        let json = serde_json::to_vec_pretty(project)?;
        tokio::fs::write(project_file(dir, project.record.id), json).await?;
        Ok(())
    }
}

fn project_file(dir: &Path, id: u64) -> PathBuf {
    dir.join(format!("{}.json", id))
}

async fn read_projects(dir: &Path) -> Result<BTreeMap<u64, StoredProject>, TesseraError> {
    tokio::fs::create_dir_all(dir).await?;
    let mut projects = BTreeMap::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let bytes = tokio::fs::read(&path).await?;
        match serde_json::from_slice::<StoredProject>(&bytes) {
            Ok(project) => {
                projects.insert(project.record.id, project);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable project file"),
        }
    }
    Ok(projects)
}
