//! The `Driver` entity.

use serde::{Deserialize, Serialize};

use fleet_core::{DriverId, GeoPoint, VehicleType};

/// One tracked, simulated driver.
///
/// `distance_km` is a cache of `position.distance_km(user_location)`.  Every
/// path that moves a driver goes through [`Driver::move_to`], which refreshes
/// it, so the two cannot drift apart.
///
/// Serialized with camelCase keys and a flattened position; this is the
/// on-disk cache snapshot format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id:           DriverId,
    /// `"{first_name} {last_name}"`.
    pub name:         String,
    pub first_name:   String,
    pub last_name:    String,
    pub email:        String,
    pub phone:        String,
    /// Large portrait URL.
    pub image:        String,
    pub thumbnail:    String,
    #[serde(flatten)]
    pub position:     GeoPoint,
    /// In `[3.0, 5.0]` at creation; never modified afterwards.
    pub rating:       f64,
    pub vehicle_type: VehicleType,
    #[serde(rename = "distance")]
    pub distance_km:  f64,
    pub is_favorite:  bool,
}

impl Driver {
    /// Move to `position` and recompute the distance from `user_location`.
    #[inline]
    pub fn move_to(&mut self, position: GeoPoint, user_location: GeoPoint) {
        self.position = position;
        self.refresh_distance(user_location);
    }

    /// Recompute `distance_km` from the current position.
    #[inline]
    pub fn refresh_distance(&mut self, user_location: GeoPoint) {
        self.distance_km = user_location.distance_km(self.position);
    }

    /// Case-insensitive substring match against the display name.
    /// `needle_lower` must already be lowercased.
    #[inline]
    pub fn name_matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
    }
}
