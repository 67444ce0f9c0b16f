//! Base error type.
//!
//! Sub-crates define their own error enums; `FleetError` covers what lives
//! here (configuration loading and validation).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `fleet-core`.
pub type FleetResult<T> = Result<T, FleetError>;
