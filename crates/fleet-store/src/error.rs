//! Error types for fleet-store.

use thiserror::Error;

/// Errors that can occur when reading or writing persisted state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("decode error for key {key:?}: {source}")]
    Decode {
        key:    &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid key {0:?}: only ASCII letters, digits, '_', '-' and '.' are allowed")]
    InvalidKey(String),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
