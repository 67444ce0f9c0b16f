//! Engine configuration.
//!
//! # Design
//!
//! Every knob has a default matching the shipped app behaviour, so
//! `EngineConfig::default()` is a complete configuration.  Applications that
//! want to override a few values load a partial JSON document; missing
//! fields fall back to their defaults.
//!
//! ```json
//! { "fetch_count": 25, "seed": 7, "default_location": { "latitude": 51.5, "longitude": -0.12 } }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{FleetError, FleetResult, GeoPoint};

/// Fallback user location (New Delhi) when the device provides none.
pub const DEFAULT_LOCATION: GeoPoint = GeoPoint::new(28.6139, 77.2090);

/// Records requested per load.
pub const DEFAULT_FETCH_COUNT: usize = 15;

/// Radius around the user in which drivers are initially placed.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 8.0;

/// How many drivers the nearest-only filter keeps.
pub const DEFAULT_NEAREST_LIMIT: usize = 5;

/// Cadence of the external simulation timer.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 3_000;

/// Top-level configuration for a driver engine session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// User location used until the location provider supplies one.
    pub default_location: GeoPoint,

    /// Raw records requested from the source on each load.
    pub fetch_count: usize,

    /// Initial placement radius around the user, kilometres.
    pub nearby_radius_km: f64,

    /// Length of the derived view when the nearest-only filter is on.
    pub nearest_limit: usize,

    /// Interval between simulation ticks.  Read by whoever owns the timer;
    /// the engine itself never schedules anything.
    pub tick_interval_ms: u64,

    /// RNG seed.  `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_location: DEFAULT_LOCATION,
            fetch_count:      DEFAULT_FETCH_COUNT,
            nearby_radius_km: DEFAULT_NEARBY_RADIUS_KM,
            nearest_limit:    DEFAULT_NEAREST_LIMIT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed:             None,
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json_str(json: &str) -> FleetResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`from_json_str`](Self::from_json_str) but reads from `path`.
    pub fn from_json_file(path: &Path) -> FleetResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values the engine cannot operate with.
    pub fn validate(&self) -> FleetResult<()> {
        if self.fetch_count == 0 {
            return Err(FleetError::Config("fetch_count must be at least 1".into()));
        }
        if self.nearest_limit == 0 {
            return Err(FleetError::Config("nearest_limit must be at least 1".into()));
        }
        if !(self.nearby_radius_km.is_finite() && self.nearby_radius_km > 0.0) {
            return Err(FleetError::Config(format!(
                "nearby_radius_km must be a positive number, got {}",
                self.nearby_radius_km
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(FleetError::Config("tick_interval_ms must be non-zero".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
