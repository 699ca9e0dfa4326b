//! Error taxonomy of a picker run.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::dao::storage::StorageError;

/// Errors that abort a picker run.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Reading the catalog or recording the pick failed.
    #[error("storage failure")]
    Storage(#[from] StorageError),
}

/// Failures while reading the CSV catalog. Never fatal for a run.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file does not exist.
    #[error("catalog file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },
    /// The catalog file exists but could not be opened.
    #[error("failed to open catalog file {}", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: csv::Error,
    },
    /// The header row could not be read.
    #[error("failed to read catalog header row")]
    Headers {
        /// Underlying CSV failure.
        #[source]
        source: csv::Error,
    },
    /// The header row lacks the required column.
    #[error("catalog missing required `{column}` column header")]
    MissingNameColumn {
        /// Name of the required column.
        column: &'static str,
    },
}

/// Failures while announcing a pick. Never fatal for a run.
#[derive(Debug, Error)]
pub enum AnnounceError {
    /// No webhook target is configured.
    #[error("no webhook configured")]
    MissingWebhook,
    /// The webhook could not be reached or timed out.
    #[error("failed to deliver webhook message")]
    Request {
        /// Transport failure reported by the HTTP client.
        #[source]
        source: reqwest::Error,
    },
    /// The webhook answered with a non-success status.
    #[error("webhook rejected message with status {status}")]
    Status {
        /// Status returned by the webhook.
        status: StatusCode,
    },
}
