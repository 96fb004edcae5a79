use std::sync::Arc;
use std::time::Duration;

use score_core::model::{Identity, ScoreBoard, Session};
use services::{Clock, DebouncedWriter, ScoreService, ScoreServiceError};
use storage::repository::{InMemoryScoreStore, ScoreRow, ScoreStore, StorageError};

fn service_over(store: Arc<dyn ScoreStore>) -> ScoreService {
    let (writer, _outcomes) =
        DebouncedWriter::new(Arc::clone(&store), Duration::from_secs(10), Clock::default_clock());
    ScoreService::new(store, writer)
}

#[tokio::test]
async fn load_seeds_matched_identities_and_defaults_the_rest() {
    let store = InMemoryScoreStore::with_rows([("Vikas", 1_200_000), ("Somebody", 7)]);
    let service = service_over(Arc::new(store));

    let board = service.initial_board().await;
    assert_eq!(board.score(Identity::Vikas), 1_200_000);
    // Absent from the store: zero default. Unknown row: ignored.
    assert_eq!(board.score(Identity::Alok), 0);
    assert_eq!(board.score(Identity::Deep), 0);
}

struct UnreachableStore;

#[async_trait::async_trait]
impl ScoreStore for UnreachableStore {
    async fn fetch_scores(&self) -> Result<Vec<ScoreRow>, StorageError> {
        Err(StorageError::Decode("connection refused".into()))
    }

    async fn update_score(&self, _name: &str, _points: i64) -> Result<(), StorageError> {
        Err(StorageError::Decode("connection refused".into()))
    }
}

#[tokio::test]
async fn failed_load_is_silent_and_leaves_defaults() {
    let service = service_over(Arc::new(UnreachableStore));

    let board = service.initial_board().await;
    assert_eq!(board, ScoreBoard::new());
}

#[tokio::test]
async fn fetch_board_surfaces_the_storage_error() {
    let service = service_over(Arc::new(UnreachableStore));

    let err = service.fetch_board().await.unwrap_err();
    assert!(matches!(err, ScoreServiceError::Storage(_)));
}

#[tokio::test]
async fn mutation_without_a_session_is_an_error() {
    let store = InMemoryScoreStore::new();
    let service = service_over(Arc::new(store.clone()));

    let mut board = ScoreBoard::new();
    let err = service
        .apply_delta(Session::Unselected, &mut board, 1_000)
        .unwrap_err();

    assert!(matches!(err, ScoreServiceError::NoSession));
    assert_eq!(board, ScoreBoard::new());
    assert!(store.writes().is_empty());
}
