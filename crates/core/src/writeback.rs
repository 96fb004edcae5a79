//! Single-slot write-back state machine.
//!
//! Local mutations land here before they reach the store: each new value
//! replaces the pending one and pushes the deadline out, so a burst of rapid
//! mutations collapses into a single remote write carrying only the last
//! value. Intermediate values in a burst are never persisted.

use chrono::{DateTime, Duration, Utc};

use crate::model::Identity;

/// A coalesced write waiting for its quiescence window to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingWrite {
    pub identity: Identity,
    pub points: i64,
    pub deadline: DateTime<Utc>,
}

/// The slot itself: either empty or holding exactly one [`PendingWrite`].
///
/// This is a pure state machine; the timer that turns a deadline into an
/// actual flush lives in the services layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteBack {
    #[default]
    Idle,
    Pending(PendingWrite),
}

impl WriteBack {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::Idle
    }

    /// Records a mutation: replaces any pending write (discarding its value,
    /// not flushing it) and restarts the quiescence window from `now`.
    /// Returns the new deadline.
    pub fn record(
        &mut self,
        identity: Identity,
        points: i64,
        now: DateTime<Utc>,
        window: Duration,
    ) -> DateTime<Utc> {
        let deadline = now + window;
        *self = WriteBack::Pending(PendingWrite {
            identity,
            points,
            deadline,
        });
        deadline
    }

    /// Flushes the slot: returns the pending write, if any, and resets to
    /// `Idle`. The caller is responsible for only flushing once the deadline
    /// has passed.
    pub fn take(&mut self) -> Option<PendingWrite> {
        match std::mem::take(self) {
            WriteBack::Idle => None,
            WriteBack::Pending(write) => Some(write),
        }
    }

    /// The deadline of the pending write, if one is scheduled.
    #[must_use]
    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        match self {
            WriteBack::Idle => None,
            WriteBack::Pending(write) => Some(write.deadline),
        }
    }

    /// True when no write is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, WriteBack::Idle)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
