//! Device location contract.

use async_trait::async_trait;

use fleet_core::GeoPoint;

/// Reports the device's current position.
///
/// `None` is a normal outcome (permission denied, no fix); callers fall back
/// to their default location.
#[async_trait(?Send)]
pub trait LocationProvider {
    async fn current_location(&self) -> Option<GeoPoint>;
}

/// Always reports the same position.
#[derive(Copy, Clone, Debug)]
pub struct FixedLocation(pub GeoPoint);

#[async_trait(?Send)]
impl LocationProvider for FixedLocation {
    async fn current_location(&self) -> Option<GeoPoint> {
        Some(self.0)
    }
}

/// Never has a fix.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoLocation;

#[async_trait(?Send)]
impl LocationProvider for NoLocation {
    async fn current_location(&self) -> Option<GeoPoint> {
        None
    }
}
