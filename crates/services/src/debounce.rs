//! Timer half of the debounced persistence path.
//!
//! [`DebouncedWriter`] drives the pure [`WriteBack`] slot from `score-core`
//! with a real tokio timer: every `schedule` call records the latest value,
//! aborts the previous not-yet-fired timer, and arms a fresh one for a full
//! quiescence window. When the timer fires, the coalesced write is taken from
//! the slot and performed on a detached task, so a later `schedule` can never
//! cancel a write that is already on the wire.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use score_core::model::Identity;
use score_core::time::Clock;
use score_core::writeback::WriteBack;
use storage::repository::ScoreStore;

/// Quiescence window between the last local mutation and the remote write.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(10);

/// What became of a flushed write. Failures are surfaced to the UI as a
/// one-shot notice; the optimistic local value is never rolled back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { identity: Identity, points: i64 },
    Failed { identity: Identity, points: i64 },
}

/// Single-slot debounced writer over a [`ScoreStore`].
pub struct DebouncedWriter {
    store: Arc<dyn ScoreStore>,
    window: Duration,
    clock: Clock,
    slot: Arc<Mutex<WriteBack>>,
    timer: Mutex<Option<JoinHandle<()>>>,
    outcomes: mpsc::UnboundedSender<SaveOutcome>,
}

impl DebouncedWriter {
    /// Creates a writer plus the receiver on which save outcomes arrive.
    #[must_use]
    pub fn new(
        store: Arc<dyn ScoreStore>,
        window: Duration,
        clock: Clock,
    ) -> (Self, mpsc::UnboundedReceiver<SaveOutcome>) {
        let (outcomes, receiver) = mpsc::unbounded_channel();
        let writer = Self {
            store,
            window,
            clock,
            slot: Arc::new(Mutex::new(WriteBack::new())),
            timer: Mutex::new(None),
            outcomes,
        };
        (writer, receiver)
    }

    /// Records the latest value for `identity` and restarts the quiescence
    /// window. Any not-yet-fired previous write is discarded, not executed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&self, identity: Identity, points: i64) {
        // Abort the old timer before recording, so a timer firing on another
        // worker can only ever take the previously recorded value, never the
        // new one ahead of its own quiescence window.
        let mut timer = self.timer.lock().expect("timer lock");
        if let Some(previous) = timer.take() {
            previous.abort();
        }

        let window = chrono::Duration::from_std(self.window).unwrap_or(chrono::Duration::MAX);
        let deadline = self
            .slot
            .lock()
            .expect("writeback slot lock")
            .record(identity, points, self.clock.now(), window);
        debug!(%identity, points, %deadline, "scheduled debounced write");

        let slot = Arc::clone(&self.slot);
        let store = Arc::clone(&self.store);
        let outcomes = self.outcomes.clone();
        let window = self.window;
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            let Some(write) = slot.lock().expect("writeback slot lock").take() else {
                return;
            };
            // Detached: once the window closed, the write is no longer
            // cancellable by a later `schedule`.
            tokio::spawn(async move {
                match store
                    .update_score(write.identity.as_str(), write.points)
                    .await
                {
                    Ok(()) => {
                        debug!(identity = %write.identity, points = write.points, "score persisted");
                        let _ = outcomes.send(SaveOutcome::Saved {
                            identity: write.identity,
                            points: write.points,
                        });
                    }
                    Err(err) => {
                        error!(identity = %write.identity, points = write.points, error = %err,
                            "failed to persist score");
                        let _ = outcomes.send(SaveOutcome::Failed {
                            identity: write.identity,
                            points: write.points,
                        });
                    }
                }
            });
        }));
    }

    /// True when no write is pending in the slot.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.slot.lock().expect("writeback slot lock").is_idle()
    }

    /// The configured quiescence window.
    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
