pub mod memory;
#[cfg(feature = "mongo-store")]
pub mod mongodb;

use crate::dao::models::{GameEntity, InsertOutcome};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer holding the game catalog and selection counts.
///
/// Every mutating call is a single statement that commits on its own.
pub trait GameStore: Send + Sync {
    /// Every game with its selection count.
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    /// Add one to the selection count of `name`, failing with `NotFound` when it is absent.
    fn increment_selection(&self, name: String) -> BoxFuture<'static, StorageResult<()>>;
    /// Atomically create `name` with a zero count unless it already exists.
    fn insert_if_absent(&self, name: String) -> BoxFuture<'static, StorageResult<InsertOutcome>>;
    /// Empty every collection of the store while keeping its schema, returning what was cleared.
    fn clear_all(&self) -> BoxFuture<'static, StorageResult<Vec<String>>>;
}
