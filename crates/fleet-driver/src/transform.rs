//! Raw record → `Driver`.

use fleet_core::geo::round1;
use fleet_core::{DriverId, FleetRng, GeoPoint, VehicleType, random_nearby_point};

use crate::{Driver, RawDriverRecord};

/// Lowest rating a new driver can be given.
pub const MIN_RATING: f64 = 3.0;

/// Highest rating a new driver can be given.
pub const MAX_RATING: f64 = 5.0;

/// Build a `Driver` from `record`, placed at random within `radius_km` of
/// `user_location`.
///
/// The vehicle type and rating are simulated.  `is_favorite` always starts
/// `false`; the caller re-applies its favorite set afterwards.
pub fn to_driver(
    record:        &RawDriverRecord,
    user_location: GeoPoint,
    radius_km:     f64,
    rng:           &mut FleetRng,
) -> Driver {
    let position = random_nearby_point(rng, user_location, radius_km);

    Driver {
        id:           DriverId::new(record.login.uuid.clone()),
        name:         format!("{} {}", record.name.first, record.name.last),
        first_name:   record.name.first.clone(),
        last_name:    record.name.last.clone(),
        email:        record.email.clone(),
        phone:        record.phone.clone(),
        image:        record.picture.large.clone(),
        thumbnail:    record.picture.thumbnail.clone(),
        position,
        rating:       random_rating(rng),
        vehicle_type: random_vehicle(rng),
        distance_km:  user_location.distance_km(position),
        is_favorite:  false,
    }
}

/// Transform a whole batch at the same anchor.
pub fn to_drivers(
    records:       &[RawDriverRecord],
    user_location: GeoPoint,
    radius_km:     f64,
    rng:           &mut FleetRng,
) -> Vec<Driver> {
    records
        .iter()
        .map(|r| to_driver(r, user_location, radius_km, rng))
        .collect()
}

/// Uniform in `[3.0, 5.0]`, rounded to one decimal.
pub fn random_rating(rng: &mut FleetRng) -> f64 {
    round1(rng.gen_range(MIN_RATING..=MAX_RATING))
}

/// Uniform over [`VehicleType::ALL`].
pub fn random_vehicle(rng: &mut FleetRng) -> VehicleType {
    VehicleType::ALL[rng.gen_range(0..VehicleType::ALL.len())]
}
