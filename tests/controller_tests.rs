//! # Controller Tests
//!
//! Mutation controller behavior against in-memory stores, with Tokio's clock
//! paused so debounce timing is exact.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tessera::TesseraError;
use tessera::controller::{
    AssetUploader, ControllerConfig, MutationController, ProjectStore, SaveStatus,
};
use tessera::document::Direction;
use tessera::persist::{ProjectRecord, ProjectUpdate, decode_content};
use tessera::schema::FieldEdit;

// ============================================================================
// TEST DOUBLES
// ============================================================================

struct MemoryStore {
    record: ProjectRecord,
    saves: Mutex<Vec<ProjectUpdate>>,
    fail: AtomicBool,
}

impl MemoryStore {
    fn new(record: ProjectRecord) -> Arc<Self> {
        Arc::new(Self {
            record,
            saves: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        })
    }

    fn empty() -> Arc<Self> {
        Self::new(ProjectRecord::new(1, "Test"))
    }

    fn saves(&self) -> Vec<ProjectUpdate> {
        self.saves.lock().unwrap().clone()
    }

    /// Instance count of the most recent save.
    fn last_saved_len(&self) -> usize {
        let saves = self.saves();
        let content = saves.last().and_then(|s| s.content.clone());
        decode_content(content.as_deref()).unwrap().len()
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn load(&self) -> Result<ProjectRecord, TesseraError> {
        Ok(self.record.clone())
    }

    async fn save(&self, update: ProjectUpdate) -> Result<(), TesseraError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(TesseraError::SaveFailure(
                "Component limit exceeded. Free tier allows 10 components.".into(),
            ));
        }
        self.saves.lock().unwrap().push(update);
        Ok(())
    }
}

/// Store whose first save takes five seconds, records its snapshot, and
/// then reports a failure.
struct SlowFirstSave {
    inner: Arc<MemoryStore>,
    calls: AtomicUsize,
}

#[async_trait]
impl ProjectStore for SlowFirstSave {
    async fn load(&self) -> Result<ProjectRecord, TesseraError> {
        self.inner.load().await
    }

    async fn save(&self, update: ProjectUpdate) -> Result<(), TesseraError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            tokio::time::sleep(Duration::from_secs(5)).await;
            self.inner.saves.lock().unwrap().push(update);
            return Err(TesseraError::SaveFailure("late failure".into()));
        }
        self.inner.save(update).await
    }
}

struct FixedUploader {
    result: Result<String, String>,
}

#[async_trait]
impl AssetUploader for FixedUploader {
    async fn upload(&self, _file_name: &str, _bytes: Vec<u8>) -> Result<String, TesseraError> {
        self.result.clone().map_err(TesseraError::UploadFailure)
    }
}

fn config() -> ControllerConfig {
    ControllerConfig {
        save_delay: Duration::from_millis(1000),
        max_components: 10,
    }
}

async fn open(store: &Arc<MemoryStore>) -> MutationController {
    MutationController::load(store.clone(), &config()).await.unwrap()
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

// ============================================================================
// DEBOUNCE
// ============================================================================

#[tokio::test(start_paused = true)]
async fn burst_of_edits_saves_once_with_latest_snapshot() {
    let store = MemoryStore::empty();
    let mut controller = open(&store).await;

    controller.add("hero").unwrap();
    controller.add("text").unwrap();
    controller.add("footer").unwrap();
    assert!(controller.has_pending_save());

    advance(1500).await;
    assert_eq!(store.saves().len(), 1);
    assert_eq!(store.last_saved_len(), 3);
    assert_eq!(*controller.save_status().borrow(), SaveStatus::Saved);
}

#[tokio::test(start_paused = true)]
async fn each_edit_restarts_the_timer() {
    let store = MemoryStore::empty();
    let mut controller = open(&store).await;

    controller.add("hero").unwrap();
    advance(600).await;
    controller.add("text").unwrap();
    advance(600).await;
    assert!(store.saves().is_empty());

    advance(500).await;
    assert_eq!(store.saves().len(), 1);
    assert_eq!(store.last_saved_len(), 2);
}

#[tokio::test(start_paused = true)]
async fn flush_saves_immediately_and_cancels_timer() {
    let store = MemoryStore::empty();
    let mut controller = open(&store).await;

    controller.add("hero").unwrap();
    controller.flush().await.unwrap();
    assert_eq!(store.saves().len(), 1);
    assert!(!controller.has_pending_save());

    advance(2000).await;
    assert_eq!(store.saves().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn no_op_intents_do_not_save() {
    let store = MemoryStore::empty();
    let mut controller = open(&store).await;
    let id = controller.add("hero").unwrap();
    controller.flush().await.unwrap();

    assert!(!controller.move_instance(id, Direction::Up));
    assert!(controller.select(Some(id)));
    assert!(!controller.has_pending_save());

    advance(2000).await;
    assert_eq!(store.saves().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn failed_save_reports_and_keeps_local_state() {
    let store = MemoryStore::empty();
    store.fail.store(true, Ordering::SeqCst);
    let mut controller = open(&store).await;

    controller.add("hero").unwrap();
    let err = controller.flush().await.unwrap_err();
    assert!(matches!(err, TesseraError::SaveFailure(_)));
    assert_eq!(controller.document().len(), 1);

    let status = controller.save_status().borrow().clone();
    assert_eq!(
        status,
        SaveStatus::Failed("Save failed: Component limit exceeded. Free tier allows 10 components.".into())
    );
}

#[tokio::test(start_paused = true)]
async fn slow_save_cannot_overwrite_newer_snapshot() {
    let memory = MemoryStore::empty();
    let store = Arc::new(SlowFirstSave {
        inner: memory.clone(),
        calls: AtomicUsize::new(0),
    });
    let mut controller = MutationController::load(store.clone(), &config()).await.unwrap();

    controller.add("hero").unwrap();
    advance(1100).await;
    assert_eq!(store.calls.load(Ordering::SeqCst), 1);

    controller.add("text").unwrap();
    controller.flush().await.unwrap();
    advance(10_000).await;

    let lens: Vec<usize> = memory
        .saves()
        .iter()
        .map(|s| decode_content(s.content.as_deref()).unwrap().len())
        .collect();
    assert_eq!(lens, vec![1, 2]);
    assert_eq!(*controller.save_status().borrow(), SaveStatus::Saved);
}

#[tokio::test(start_paused = true)]
async fn queued_older_snapshot_is_skipped() {
    let memory = MemoryStore::empty();
    let store = Arc::new(SlowFirstSave {
        inner: memory.clone(),
        calls: AtomicUsize::new(0),
    });
    let mut controller = MutationController::load(store.clone(), &config()).await.unwrap();

    controller.add("hero").unwrap();
    advance(1100).await;
    controller.add("text").unwrap();
    advance(1100).await;
    controller.add("footer").unwrap();
    controller.flush().await.unwrap();
    advance(10_000).await;

    // The two-instance snapshot waited behind the slow save and was superseded.
    assert_eq!(store.calls.load(Ordering::SeqCst), 2);
    assert_eq!(memory.last_saved_len(), 3);
    assert_eq!(*controller.save_status().borrow(), SaveStatus::Saved);
}

// ============================================================================
// INTENTS
// ============================================================================

#[tokio::test(start_paused = true)]
async fn limit_is_enforced() {
    let store = MemoryStore::empty();
    let mut controller = MutationController::load(
        store.clone(),
        &ControllerConfig {
            max_components: 2,
            ..config()
        },
    )
    .await
    .unwrap();

    controller.add("hero").unwrap();
    controller.add("text").unwrap();
    let err = controller.add("footer").unwrap_err();
    assert!(matches!(err, TesseraError::LimitExceeded { limit: 2 }));
    assert_eq!(controller.document().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn form_edits_flow_into_render() {
    let store = MemoryStore::empty();
    let mut controller = open(&store).await;
    let id = controller.add("pricing").unwrap();
    controller.select(Some(id));

    let form = controller.selected_form().unwrap();
    let features = form.field("plans[0].features").unwrap().clone();
    controller.edit(id, &features.edit("Unlimited pages, SSL").unwrap()).unwrap();
    controller.edit(id, &FieldEdit::AppendItem { list: "plans".into() }).unwrap();

    let html = controller.render().to_html();
    assert!(html.contains("Unlimited pages"));
    assert!(html.contains("New Plan"));
    assert_eq!(
        controller.document().get(id).unwrap().data["plans"][0]["features"],
        json!(["Unlimited pages", "SSL"])
    );
}

#[tokio::test(start_paused = true)]
async fn removing_selected_clears_selection() {
    let store = MemoryStore::empty();
    let mut controller = open(&store).await;
    let id = controller.add("hero").unwrap();
    controller.select(Some(id));
    controller.remove(id).unwrap();
    assert_eq!(controller.document().selected_id(), None);
    assert!(controller.selected_form().is_none());
}

// ============================================================================
// LOAD AND UPLOAD
// ============================================================================

#[tokio::test(start_paused = true)]
async fn malformed_content_loads_as_empty_page() {
    let store = MemoryStore::new(ProjectRecord {
        id: 3,
        name: "Broken".into(),
        content: Some("not json".into()),
        settings: None,
    });
    let controller = open(&store).await;
    assert!(controller.document().is_empty());
    assert_eq!(controller.name(), "Broken");
    assert_eq!(controller.settings().title, "My Website");
}

#[tokio::test(start_paused = true)]
async fn load_keeps_persisted_ids() {
    let store = MemoryStore::new(ProjectRecord {
        id: 3,
        name: "Saved".into(),
        content: Some(r#"[{"id": 40, "type": "hero", "data": {}}, {"id": 7, "type": "text", "data": {}}]"#.into()),
        settings: None,
    });
    let mut controller = open(&store).await;
    let ids: Vec<u64> = controller.document().instances().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![40, 7]);
    assert_eq!(controller.add("footer").unwrap(), 41);
}

#[tokio::test(start_paused = true)]
async fn upload_patches_field_on_success() {
    let store = MemoryStore::empty();
    let controller = open(&store).await;
    let mut controller = controller.with_uploader(Arc::new(FixedUploader {
        result: Ok("/uploads/abc.png".into()),
    }));
    let id = controller.add("image").unwrap();

    let url = controller.upload_into(id, "src", "photo.png", vec![1, 2, 3]).await.unwrap();
    assert_eq!(url, "/uploads/abc.png");
    assert_eq!(controller.document().get(id).unwrap().data["src"], json!("/uploads/abc.png"));
}

#[tokio::test(start_paused = true)]
async fn failed_upload_leaves_field_unchanged() {
    let store = MemoryStore::empty();
    let controller = open(&store).await;
    let mut controller = controller.with_uploader(Arc::new(FixedUploader {
        result: Err("Invalid file type. Allowed: png, jpg, jpeg, gif, webp, svg".into()),
    }));
    let id = controller.add("image").unwrap();
    let before = controller.document().get(id).unwrap().data["src"].clone();

    let err = controller.upload_into(id, "src", "notes.txt", vec![]).await.unwrap_err();
    assert!(matches!(err, TesseraError::UploadFailure(_)));
    assert_eq!(controller.document().get(id).unwrap().data["src"], before);
}
