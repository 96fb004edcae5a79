use std::sync::Arc;

use services::{SaveOutcome, ScoreService};
use tokio::sync::mpsc::UnboundedReceiver;

/// What the composition root (the `app` crate or the test harness) hands to
/// the UI.
pub trait UiApp: Send + Sync {
    fn scores(&self) -> Arc<ScoreService>;

    /// One-shot take of the save-outcome receiver. Returns `None` once taken;
    /// only one view may drain it.
    fn take_save_outcomes(&self) -> Option<UnboundedReceiver<SaveOutcome>>;
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    scores: Arc<ScoreService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let scores = app.scores();
        Self {
            app: Arc::clone(app),
            scores,
        }
    }

    #[must_use]
    pub fn scores(&self) -> Arc<ScoreService> {
        Arc::clone(&self.scores)
    }

    #[must_use]
    pub fn take_save_outcomes(&self) -> Option<UnboundedReceiver<SaveOutcome>> {
        self.app.take_save_outcomes()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
