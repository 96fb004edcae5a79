#![forbid(unsafe_code)]

pub mod repository;
pub mod rest;

pub use repository::{InMemoryScoreStore, ScoreRow, ScoreStore, StorageError};
pub use rest::{RestScoreStore, StoreConfig};
