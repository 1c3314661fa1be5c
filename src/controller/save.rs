//! Debounced saving.
//!
//! Every [`SaveScheduler::schedule`] cancels the pending save and starts a new
//! timer, so a burst of edits produces one save of the latest snapshot. A save
//! that has already started is left to finish.
//!
//! Saves reach the store one at a time, in the order they were requested.
//! Each snapshot carries a sequence number: a save that finds a newer one
//! queued behind it is skipped, and only the newest save publishes its
//! outcome on the [`SaveStatus`] watch channel.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::client::ProjectStore;
use crate::error::TesseraError;
use crate::persist::ProjectUpdate;

/// Default wait between the last edit and the save.
pub const DEFAULT_SAVE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    /// Nothing saved yet this session.
    Idle,
    Saving,
    Saved,
    Failed(String),
}

/// Serializes store calls and tracks the newest snapshot sent to it.
struct SaveQueue {
    store: Arc<dyn ProjectStore>,
    turn: Mutex<()>,
    /// Sequence number of the newest save that has started waiting.
    latest: AtomicU64,
    status: watch::Sender<SaveStatus>,
}

impl SaveQueue {
    async fn run(&self, seq: u64, update: ProjectUpdate) -> Result<(), TesseraError> {
        self.latest.fetch_max(seq, Ordering::SeqCst);
        let _turn = self.turn.lock().await;
        if self.latest.load(Ordering::SeqCst) > seq {
            debug!(seq, "newer snapshot queued, save skipped");
            return Ok(());
        }

        self.status.send_replace(SaveStatus::Saving);
        let result = self.store.save(update).await;
        let newest = self.latest.load(Ordering::SeqCst) == seq;
        match result {
            Ok(()) => {
                debug!(seq, "save complete");
                if newest {
                    self.status.send_replace(SaveStatus::Saved);
                }
                Ok(())
            }
            Err(err) => {
                warn!(seq, error = %err, "save failed");
                if newest {
                    self.status.send_replace(SaveStatus::Failed(err.to_string()));
                }
                Err(err)
            }
        }
    }
}

pub struct SaveScheduler {
    queue: Arc<SaveQueue>,
    delay: Duration,
    seq: u64,
    pending: Option<JoinHandle<()>>,
}

impl SaveScheduler {
    pub fn new(store: Arc<dyn ProjectStore>, delay: Duration) -> Self {
        let (status, _) = watch::channel(SaveStatus::Idle);
        Self {
            queue: Arc::new(SaveQueue {
                store,
                turn: Mutex::new(()),
                latest: AtomicU64::new(0),
                status,
            }),
            delay,
            seq: 0,
            pending: None,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SaveStatus> {
        self.queue.status.subscribe()
    }

    pub fn status(&self) -> SaveStatus {
        self.queue.status.borrow().clone()
    }

    /// True while a timer is waiting to save.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Replace any pending save with `update`, sent after the delay.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule(&mut self, update: ProjectUpdate) {
        self.cancel();
        let seq = self.next_seq();
        let queue = self.queue.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detached so cancelling the timer never interrupts a save in flight.
            tokio::spawn(async move {
                let _ = queue.run(seq, update).await;
            });
        }));
    }

    /// Cancel the pending save and send `update` once any save in flight is done.
    pub async fn flush(&mut self, update: ProjectUpdate) -> Result<(), TesseraError> {
        self.cancel();
        let seq = self.next_seq();
        self.queue.run(seq, update).await
    }

    /// Drop the pending save without sending it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SaveScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
