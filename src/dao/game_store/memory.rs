//! In-process [`GameStore`] keeping records in insertion order.

use std::sync::Arc;

use futures::future::BoxFuture;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::dao::{
    game_store::GameStore,
    models::{GameEntity, InsertOutcome},
    storage::{StorageError, StorageResult},
};

const COLLECTION_NAME: &str = "games";

/// Volatile store used by tests and local dry runs.
#[derive(Clone, Default)]
pub struct MemoryGameStore {
    games: Arc<RwLock<IndexMap<String, u64>>>,
}

impl MemoryGameStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given records.
    pub fn with_games(games: impl IntoIterator<Item = GameEntity>) -> Self {
        let games: IndexMap<String, u64> = games
            .into_iter()
            .map(|game| (game.name, game.times_selected))
            .collect();
        Self {
            games: Arc::new(RwLock::new(games)),
        }
    }

    /// Return the selection count of `name`, if present.
    pub async fn times_selected(&self, name: &str) -> Option<u64> {
        self.games.read().await.get(name).copied()
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.games.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.games.read().await.is_empty()
    }
}

impl GameStore for MemoryGameStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let games = Arc::clone(&self.games);
        Box::pin(async move {
            let guard = games.read().await;
            Ok(guard
                .iter()
                .map(|(name, count)| GameEntity::with_count(name.clone(), *count))
                .collect())
        })
    }

    fn increment_selection(&self, name: String) -> BoxFuture<'static, StorageResult<()>> {
        let games = Arc::clone(&self.games);
        Box::pin(async move {
            let mut guard = games.write().await;
            match guard.get_mut(&name) {
                Some(count) => {
                    *count += 1;
                    Ok(())
                }
                None => Err(StorageError::not_found(name)),
            }
        })
    }

    fn insert_if_absent(&self, name: String) -> BoxFuture<'static, StorageResult<InsertOutcome>> {
        let games = Arc::clone(&self.games);
        Box::pin(async move {
            let mut guard = games.write().await;
            if guard.contains_key(&name) {
                return Ok(InsertOutcome::AlreadyPresent);
            }
            guard.insert(name, 0);
            Ok(InsertOutcome::Created)
        })
    }

    fn clear_all(&self) -> BoxFuture<'static, StorageResult<Vec<String>>> {
        let games = Arc::clone(&self.games);
        Box::pin(async move {
            games.write().await.clear();
            Ok(vec![COLLECTION_NAME.to_owned()])
        })
    }
}
