//! `fleet-driver`: the `Driver` entity and the contracts it is built from.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`driver`]      | `Driver`                                                  |
//! | [`record`]      | `RawDriverRecord`, `RecordResponse` (external shape)      |
//! | [`transform`]   | `to_driver`, simulated rating / vehicle draws             |
//! | [`source`]      | `DriverSource` trait, `StaticSource`                      |
//! | [`location`]    | `LocationProvider` trait, `FixedLocation`, `NoLocation`   |
//! | [`error`]       | `SourceError`, `SourceResult`                             |

pub mod driver;
pub mod error;
pub mod location;
pub mod record;
pub mod source;
pub mod transform;

#[cfg(test)]
mod tests;

pub use driver::Driver;
pub use error::{SourceError, SourceResult};
pub use location::{FixedLocation, LocationProvider, NoLocation};
pub use record::{RawDriverRecord, RecordResponse};
pub use source::{DriverSource, StaticSource};
pub use transform::{to_driver, to_drivers};
