//! MongoDB-backed [`GameStore`](crate::dao::game_store::GameStore).

mod config;
mod connection;
mod error;
mod models;
/// Collection access for the game catalog.
pub mod store;

pub use config::MongoConfig;
pub use error::MongoDaoError;
pub use store::MongoGameStore;

use crate::dao::storage::StorageError;

impl From<MongoDaoError> for StorageError {
    fn from(err: MongoDaoError) -> Self {
        match err {
            MongoDaoError::GameNotFound { name } => StorageError::NotFound { name },
            other => StorageError::unavailable(other.to_string(), other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_game_maps_to_not_found() {
        let err: StorageError = MongoDaoError::GameNotFound {
            name: "Celeste".into(),
        }
        .into();
        assert!(matches!(err, StorageError::NotFound { name } if name == "Celeste"));
    }
}
