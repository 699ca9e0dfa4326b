use mongodb::error::Error as MongoError;
use thiserror::Error;

/// Result alias for MongoDB operations.
pub type MongoResult<T> = std::result::Result<T, MongoDaoError>;

/// Failures of the MongoDB backend.
#[derive(Debug, Error)]
pub enum MongoDaoError {
    /// The connection string could not be parsed.
    #[error("failed to parse MongoDB connection URI `{uri}`")]
    InvalidUri {
        /// Rejected connection string.
        uri: String,
        /// Driver error.
        #[source]
        source: MongoError,
    },
    /// The client could not be built from the options.
    #[error("failed to build MongoDB client from options")]
    ClientConstruction {
        /// Driver error.
        #[source]
        source: MongoError,
    },
    /// The server did not answer the first ping.
    #[error("MongoDB ping failed during initial connection")]
    InitialPing {
        /// Driver error.
        #[source]
        source: MongoError,
    },
    /// An index could not be created.
    #[error("failed to ensure index `{index}` on collection `{collection}`")]
    EnsureIndex {
        /// Collection the index belongs to.
        collection: &'static str,
        /// Indexed field(s).
        index: &'static str,
        /// Driver error.
        #[source]
        source: MongoError,
    },
    /// Reading the game collection failed.
    #[error("failed to list games")]
    ListGames {
        /// Driver error.
        #[source]
        source: MongoError,
    },
    /// Inserting a catalog entry failed.
    #[error("failed to insert game `{name}`")]
    InsertGame {
        /// Game name.
        name: String,
        /// Driver error.
        #[source]
        source: MongoError,
    },
    /// Incrementing a selection count failed.
    #[error("failed to increment selection count of game `{name}`")]
    IncrementGame {
        /// Game name.
        name: String,
        /// Driver error.
        #[source]
        source: MongoError,
    },
    /// No document matched the game name.
    #[error("game `{name}` not found")]
    GameNotFound {
        /// Game name.
        name: String,
    },
    /// Listing collections failed.
    #[error("failed to list collections")]
    ListCollections {
        /// Driver error.
        #[source]
        source: MongoError,
    },
    /// Emptying a collection failed.
    #[error("failed to clear collection `{collection}`")]
    ClearCollection {
        /// Collection name.
        collection: String,
        /// Driver error.
        #[source]
        source: MongoError,
    },
}
