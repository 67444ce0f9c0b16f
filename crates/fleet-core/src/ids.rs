//! Driver identifier.
//!
//! Driver ids come from the external record source (a UUID string) and are
//! only compared for equality and hashed into the favorite set, so the
//! wrapper is a transparent `String` newtype.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a driver, unique within a collection.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverId(pub String);

impl DriverId {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        DriverId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DriverId {
    fn from(s: &str) -> Self {
        DriverId(s.to_owned())
    }
}

impl From<String> for DriverId {
    fn from(s: String) -> Self {
        DriverId(s)
    }
}

impl std::borrow::Borrow<str> for DriverId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
