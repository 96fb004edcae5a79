use std::sync::Arc;

use tracing::{error, warn};

use score_core::model::{ScoreBoard, Session};
use storage::repository::ScoreStore;

use crate::debounce::DebouncedWriter;
use crate::error::ScoreServiceError;

/// Load and mutation entry points for the score board.
///
/// The board itself is owned by the presentation layer; this service applies
/// the session guard, performs the optimistic mutation, and hands the new
/// value to the debounced writer.
pub struct ScoreService {
    store: Arc<dyn ScoreStore>,
    writer: DebouncedWriter,
}

impl ScoreService {
    #[must_use]
    pub fn new(store: Arc<dyn ScoreStore>, writer: DebouncedWriter) -> Self {
        Self { store, writer }
    }

    /// Fetches all rows and folds the recognized ones into a fresh board.
    ///
    /// Identities absent from the store keep their zero default; rows with
    /// unknown names are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns `ScoreServiceError::Storage` when the fetch fails.
    pub async fn fetch_board(&self) -> Result<ScoreBoard, ScoreServiceError> {
        let rows = self.store.fetch_scores().await?;
        let mut board = ScoreBoard::new();
        for row in &rows {
            if !board.absorb_row(&row.name, row.points) {
                warn!(name = %row.name, "ignoring row with unknown identity");
            }
        }
        Ok(board)
    }

    /// Startup load with the silent-failure policy: a failed fetch is logged
    /// and the all-zero default board is returned. No retry, no user-visible
    /// error.
    pub async fn initial_board(&self) -> ScoreBoard {
        match self.fetch_board().await {
            Ok(board) => board,
            Err(err) => {
                error!(error = %err, "initial score load failed; keeping default scores");
                ScoreBoard::new()
            }
        }
    }

    /// Applies a signed delta to the session's own score and schedules the
    /// debounced write of the new value. Returns the new value.
    ///
    /// The mutation is synchronous and optimistic: the board changes before
    /// the store confirms anything.
    ///
    /// # Errors
    ///
    /// Returns `ScoreServiceError::NoSession` when no identity is selected.
    pub fn apply_delta(
        &self,
        session: Session,
        board: &mut ScoreBoard,
        amount: i64,
    ) -> Result<i64, ScoreServiceError> {
        let identity = session.current().ok_or(ScoreServiceError::NoSession)?;
        let points = board.apply_delta(identity, amount);
        self.writer.schedule(identity, points);
        Ok(points)
    }
}
