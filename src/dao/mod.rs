//! Persistence layer: domain records, storage errors and store backends.

/// Game catalog storage backends.
pub mod game_store;
/// Domain records shared across layers.
pub mod models;
/// Storage abstraction layer for database operations.
pub mod storage;
