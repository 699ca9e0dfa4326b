use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use futures::future::BoxFuture;
use game_picker::{
    config::AppConfig,
    dao::{
        game_store::{GameStore, memory::MemoryGameStore},
        models::{GameEntity, InsertOutcome},
        storage::{StorageError, StorageResult},
    },
    error::{AnnounceError, ServiceError},
    services::{
        announcer::{Announce, Announcement},
        picker_service::{PickerService, RunOutcome},
    },
};
use rand::{SeedableRng, rngs::StdRng};
use reqwest::StatusCode;

/// Announcer double recording every game it was asked to announce.
#[derive(Default)]
struct RecordingAnnouncer {
    announced: Mutex<Vec<String>>,
    reject_with: Option<StatusCode>,
}

impl RecordingAnnouncer {
    fn failing(status: StatusCode) -> Self {
        Self {
            reject_with: Some(status),
            ..Self::default()
        }
    }

    fn announced(&self) -> Vec<String> {
        self.announced.lock().unwrap().clone()
    }
}

impl Announce for RecordingAnnouncer {
    fn announce(&self, game: String) -> BoxFuture<'_, Result<Announcement, AnnounceError>> {
        Box::pin(async move {
            self.announced.lock().unwrap().push(game);
            match self.reject_with {
                Some(status) => Err(AnnounceError::Status { status }),
                None => Ok(Announcement::Delivered {
                    thumbnail_url: None,
                }),
            }
        })
    }
}

fn fixture_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/games.csv")
}

fn config_with_catalog(path: PathBuf) -> AppConfig {
    let path = path.to_string_lossy().into_owned();
    AppConfig::from_lookup(|key| (key == "GAMES_CSV").then(|| path.clone()))
}

fn missing_catalog_config() -> AppConfig {
    config_with_catalog(PathBuf::from("tests/fixtures/does-not-exist.csv"))
}

fn picker(
    store: &MemoryGameStore,
    announcer: &Arc<RecordingAnnouncer>,
    config: &AppConfig,
    seed: u64,
) -> PickerService {
    let announcer: Arc<dyn Announce> = announcer.clone();
    PickerService::new(Arc::new(store.clone()), announcer, config)
        .with_rng(StdRng::seed_from_u64(seed))
}

#[tokio::test]
async fn empty_store_reports_no_games() {
    let store = MemoryGameStore::new();
    let announcer = Arc::new(RecordingAnnouncer::default());
    let mut service = picker(&store, &announcer, &missing_catalog_config(), 1);

    let outcome = service.run().await.unwrap();

    assert!(matches!(outcome, RunOutcome::NoGamesFound));
    assert!(outcome.game().is_none());
    assert!(announcer.announced().is_empty());
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn run_loads_catalog_then_records_and_announces_pick() {
    let store = MemoryGameStore::new();
    let announcer = Arc::new(RecordingAnnouncer::default());
    let mut service = picker(&store, &announcer, &config_with_catalog(fixture_catalog()), 5);

    let outcome = service.run().await.unwrap();

    let (game, announcement) = match outcome {
        RunOutcome::Success { game, announcement } => (game, announcement),
        other => panic!("expected success, got {other:?}"),
    };
    assert!(["Celeste", "Hades", "Outer Wilds", "Balatro"].contains(&game.as_str()));
    assert_eq!(store.len().await, 4);
    assert_eq!(store.times_selected(&game).await, Some(1));
    assert_eq!(announcer.announced(), [game]);
    assert_eq!(
        announcement,
        Announcement::Delivered {
            thumbnail_url: None
        }
    );
}

#[tokio::test]
async fn missing_catalog_falls_back_to_stored_games() {
    let store = MemoryGameStore::with_games([GameEntity::with_count("Factorio", 3)]);
    let announcer = Arc::new(RecordingAnnouncer::default());
    let mut service = picker(&store, &announcer, &missing_catalog_config(), 9);

    let outcome = service.run().await.unwrap();

    assert_eq!(outcome.game(), Some("Factorio"));
    assert_eq!(store.times_selected("Factorio").await, Some(4));
}

#[tokio::test]
async fn failed_announcement_keeps_the_pick() {
    let store = MemoryGameStore::with_games([GameEntity::new("Celeste")]);
    let announcer = Arc::new(RecordingAnnouncer::failing(
        StatusCode::INTERNAL_SERVER_ERROR,
    ));
    let mut service = picker(&store, &announcer, &missing_catalog_config(), 2);

    let outcome = service.run().await.unwrap();

    match outcome {
        RunOutcome::PartialFailure { game, error } => {
            assert_eq!(game, "Celeste");
            assert!(matches!(
                error,
                AnnounceError::Status { status } if status == StatusCode::INTERNAL_SERVER_ERROR
            ));
        }
        other => panic!("expected partial failure, got {other:?}"),
    }
    assert_eq!(store.times_selected("Celeste").await, Some(1));
}

#[tokio::test]
async fn repeated_runs_increment_by_exactly_one_each() {
    let store = MemoryGameStore::with_games([GameEntity::with_count("Tetris", 10)]);
    let announcer = Arc::new(RecordingAnnouncer::default());
    let mut service = picker(&store, &announcer, &missing_catalog_config(), 11);

    for _ in 0..5 {
        service.run().await.unwrap();
    }

    assert_eq!(store.times_selected("Tetris").await, Some(15));
    assert_eq!(announcer.announced().len(), 5);
}

#[tokio::test]
async fn rerunning_with_same_catalog_never_duplicates_games() {
    let store = MemoryGameStore::new();
    let announcer = Arc::new(RecordingAnnouncer::default());
    let mut service = picker(&store, &announcer, &config_with_catalog(fixture_catalog()), 21);

    for _ in 0..3 {
        service.run().await.unwrap();
    }

    let games = store.list_games().await.unwrap();
    assert_eq!(games.len(), 4);
    let total: u64 = games.iter().map(|game| game.times_selected).sum();
    assert_eq!(total, 3);
}

#[tokio::test]
async fn same_seed_picks_same_game() {
    let catalog = [
        GameEntity::with_count("A", 0),
        GameEntity::with_count("B", 2),
        GameEntity::with_count("C", 5),
    ];
    let mut picks = Vec::new();
    for _ in 0..2 {
        let store = MemoryGameStore::with_games(catalog.clone());
        let announcer = Arc::new(RecordingAnnouncer::default());
        let mut service = picker(&store, &announcer, &missing_catalog_config(), 1234);
        picks.push(service.run().await.unwrap().game().map(str::to_owned));
    }
    assert_eq!(picks[0], picks[1]);
}

/// Store whose reads always fail.
struct UnavailableStore;

impl UnavailableStore {
    fn error() -> StorageError {
        StorageError::unavailable(
            "server selection timed out".into(),
            std::io::Error::other("timeout"),
        )
    }
}

impl GameStore for UnavailableStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        Box::pin(async { Err(Self::error()) })
    }

    fn increment_selection(&self, _name: String) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Err(Self::error()) })
    }

    fn insert_if_absent(&self, _name: String) -> BoxFuture<'static, StorageResult<InsertOutcome>> {
        Box::pin(async { Err(Self::error()) })
    }

    fn clear_all(&self) -> BoxFuture<'static, StorageResult<Vec<String>>> {
        Box::pin(async { Err(Self::error()) })
    }
}

#[tokio::test]
async fn storage_failure_on_read_is_fatal() {
    let announcer: Arc<dyn Announce> = Arc::new(RecordingAnnouncer::default());
    let mut service = PickerService::new(
        Arc::new(UnavailableStore),
        announcer,
        &config_with_catalog(fixture_catalog()),
    );

    let err = service.run().await.unwrap_err();
    assert!(matches!(err, ServiceError::Storage(_)));
}
