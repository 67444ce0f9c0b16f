//! `fleet-core`: foundational types for the fleet tracking core.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It has no
//! `fleet-*` dependencies.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `DriverId`                                            |
//! | [`geo`]         | `GeoPoint`, haversine distance, jitter, nearby points |
//! | [`rng`]         | `FleetRng` (engine-level RNG)                         |
//! | [`vehicle`]     | `VehicleType` enum                                    |
//! | [`config`]      | `EngineConfig` and its defaults                       |
//! | [`error`]       | `FleetError`, `FleetResult`                           |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod vehicle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DEFAULT_LOCATION, EngineConfig};
pub use error::{FleetError, FleetResult};
pub use geo::{GeoPoint, UserLocation, distance_km, random_nearby_point, random_offset};
pub use ids::DriverId;
pub use rng::FleetRng;
pub use vehicle::VehicleType;
