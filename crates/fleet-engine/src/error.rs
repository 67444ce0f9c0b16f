use fleet_core::FleetError;
use fleet_driver::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The record source could not be reached or returned an error.  Held in
    /// the engine's `error` field; the previous collection stays in place.
    #[error("failed to load drivers: {0}")]
    FetchFailed(#[from] SourceError),

    #[error("engine configuration error: {0}")]
    Config(#[from] FleetError),
}

pub type EngineResult<T> = Result<T, EngineError>;
