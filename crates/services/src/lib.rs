#![forbid(unsafe_code)]

pub mod debounce;
pub mod error;
pub mod score_service;

pub use score_core::Clock;

pub use debounce::{DebouncedWriter, SaveOutcome, DEFAULT_DEBOUNCE};
pub use error::ScoreServiceError;
pub use score_service::ScoreService;
