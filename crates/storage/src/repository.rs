use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by score store adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("store returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed store response: {0}")]
    Decode(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// One row of the remote table. The name is the row key; unknown names are
/// tolerated here and filtered out when the board absorbs them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub name: String,
    pub points: i64,
}

/// Contract for the remote score table.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Fetch every row of the table.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store is unreachable or replies with a
    /// non-success status or an undecodable body.
    async fn fetch_scores(&self) -> Result<Vec<ScoreRow>, StorageError>;

    /// Overwrite the points of the row keyed by `name`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write does not reach the store.
    async fn update_score(&self, name: &str, points: i64) -> Result<(), StorageError>;
}

/// In-memory store used by tests and the UI harness.
///
/// Keeps the current rows plus an append-only log of every write it received,
/// so tests can assert on write counts and coalesced values.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScoreStore {
    rows: Arc<Mutex<HashMap<String, i64>>>,
    writes: Arc<Mutex<Vec<ScoreRow>>>,
}

impl InMemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with the given rows.
    #[must_use]
    pub fn with_rows<N: Into<String>>(rows: impl IntoIterator<Item = (N, i64)>) -> Self {
        let store = Self::new();
        {
            let mut guard = store.rows.lock().expect("rows lock");
            for (name, points) in rows {
                guard.insert(name.into(), points);
            }
        }
        store
    }

    /// Every write received so far, in arrival order.
    #[must_use]
    pub fn writes(&self) -> Vec<ScoreRow> {
        self.writes.lock().expect("writes lock").clone()
    }

    /// Current points for a row, if present.
    #[must_use]
    pub fn points_of(&self, name: &str) -> Option<i64> {
        self.rows.lock().expect("rows lock").get(name).copied()
    }
}

#[async_trait]
impl ScoreStore for InMemoryScoreStore {
    async fn fetch_scores(&self) -> Result<Vec<ScoreRow>, StorageError> {
        let rows = self.rows.lock().expect("rows lock");
        let mut out: Vec<ScoreRow> = rows
            .iter()
            .map(|(name, &points)| ScoreRow {
                name: name.clone(),
                points,
            })
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(out)
    }

    async fn update_score(&self, name: &str, points: i64) -> Result<(), StorageError> {
        self.rows
            .lock()
            .expect("rows lock")
            .insert(name.to_string(), points);
        self.writes.lock().expect("writes lock").push(ScoreRow {
            name: name.to_string(),
            points,
        });
        Ok(())
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
