//! Administrative operations that sit outside the weekly run.

use tracing::{info, warn};

use crate::dao::{game_store::GameStore, storage::StorageResult};

/// Empty every collection of the store while keeping its schema.
///
/// Returns the names of the cleared collections; an empty list means the store
/// had nothing to clear.
pub async fn wipe_store(store: &dyn GameStore) -> StorageResult<Vec<String>> {
    let cleared = store.clear_all().await?;
    if cleared.is_empty() {
        warn!("no collections found; nothing to wipe");
    } else {
        info!(collections = ?cleared, "store wiped; schema retained");
    }
    Ok(cleared)
}
