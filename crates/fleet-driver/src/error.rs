use thiserror::Error;

/// Why a record fetch failed.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("record source unavailable: {0}")]
    Unavailable(String),

    #[error("record decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("record source error: {0}")]
    Other(String),
}

pub type SourceResult<T> = Result<T, SourceError>;
