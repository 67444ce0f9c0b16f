//! Geographic coordinate type and the distance / jitter helpers used by the
//! driver simulation.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Distances are reported in
//! kilometres rounded to one decimal place, which is the precision shown to
//! users and stored on every `Driver`.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Mean Earth radius, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Fixed degrees-per-kilometre approximation used for nearby-point
/// generation (1° ≈ 111 km everywhere).
pub const KM_PER_DEGREE: f64 = 111.0;

/// Maximum per-axis jitter applied on one simulation tick, in degrees
/// (~500 m end to end).
pub const MAX_JITTER_DEG: f64 = 0.0025;

/// A WGS-84 geographic coordinate.
///
/// Serializes as `{"latitude": .., "longitude": ..}` so it can be flattened
/// into persisted driver records.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "latitude")]
    pub lat: f64,
    #[serde(rename = "longitude")]
    pub lon: f64,
}

/// The user's position.  Same shape as any other coordinate.
pub type UserLocation = GeoPoint;

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance to `other`, in kilometres, rounded to
    /// one decimal place.
    #[inline]
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        distance_km(self.lat, self.lon, other.lat, other.lon)
    }

    /// Return this point shifted by `d_lat` / `d_lon` degrees.
    #[inline]
    pub fn offset(self, d_lat: f64, d_lon: f64) -> GeoPoint {
        GeoPoint::new(self.lat + d_lat, self.lon + d_lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Round to one decimal place.
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Haversine great-circle distance in kilometres, rounded to one decimal.
///
/// Symmetric in its two points and exactly `0.0` for identical points.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat * 0.5).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon * 0.5).sin().powi(2);
    // Rounding can push `a` just past 1.0 for near-antipodal points.
    let a = a.clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    round1(EARTH_RADIUS_KM * c)
}

/// One tick's worth of positional jitter: uniform in
/// `[-MAX_JITTER_DEG, +MAX_JITTER_DEG)` degrees.
#[inline]
pub fn random_offset<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(-MAX_JITTER_DEG..MAX_JITTER_DEG)
}

/// A random point within `radius_km` of `base`.
///
/// Angle and radius are each drawn uniformly, so points cluster toward the
/// centre rather than being area-uniform.  Callers rely on that distribution;
/// leave it as is.  A negative `radius_km` is treated as zero.
pub fn random_nearby_point<R: Rng + ?Sized>(rng: &mut R, base: GeoPoint, radius_km: f64) -> GeoPoint {
    let radius_deg = (radius_km / KM_PER_DEGREE).max(0.0);
    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
    let dist = rng.gen_range(0.0..=radius_deg);
    base.offset(dist * angle.cos(), dist * angle.sin())
}
