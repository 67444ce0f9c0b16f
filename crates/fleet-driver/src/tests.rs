//! Unit tests for fleet-driver.

use crate::record::{RecordLogin, RecordName, RecordPicture};
use crate::RawDriverRecord;

fn record(first: &str, last: &str, uuid: &str) -> RawDriverRecord {
    RawDriverRecord {
        name:     RecordName { first: first.into(), last: last.into() },
        email:    format!("{}@example.com", first.to_lowercase()),
        phone:    "011-555-0100".into(),
        picture:  RecordPicture {
            large:     format!("https://img.example/{uuid}/large.jpg"),
            medium:    format!("https://img.example/{uuid}/medium.jpg"),
            thumbnail: format!("https://img.example/{uuid}/thumb.jpg"),
        },
        login:    RecordLogin { uuid: uuid.into() },
        location: None,
    }
}

const RESPONSE_JSON: &str = r#"{
  "results": [
    {
      "name": { "first": "Asha", "last": "Rao" },
      "email": "asha.rao@example.com",
      "phone": "011-555-0100",
      "picture": { "large": "L1", "medium": "M1", "thumbnail": "T1" },
      "login": { "uuid": "u-1" },
      "location": { "coordinates": { "latitude": "-12.3", "longitude": "45.6" } }
    },
    {
      "name": { "first": "Vikram", "last": "Singh" },
      "email": "vikram.singh@example.com",
      "phone": "011-555-0101",
      "picture": { "large": "L2", "thumbnail": "T2" },
      "login": { "uuid": "u-2" }
    }
  ]
}"#;

#[cfg(test)]
mod transform {
    use super::record;
    use crate::transform::{MAX_RATING, MIN_RATING, random_rating};
    use crate::{to_driver, to_drivers};
    use fleet_core::geo::round1;
    use fleet_core::{FleetRng, GeoPoint, VehicleType, distance_km};

    #[test]
    fn copies_identity_fields() {
        let mut rng = FleetRng::new(1);
        let user = GeoPoint::new(28.6139, 77.2090);
        let d = to_driver(&record("Asha", "Rao", "u-1"), user, 8.0, &mut rng);

        assert_eq!(d.id.as_str(), "u-1");
        assert_eq!(d.name, "Asha Rao");
        assert_eq!(d.first_name, "Asha");
        assert_eq!(d.last_name, "Rao");
        assert_eq!(d.email, "asha@example.com");
        assert_eq!(d.image, "https://img.example/u-1/large.jpg");
        assert_eq!(d.thumbnail, "https://img.example/u-1/thumb.jpg");
        assert!(!d.is_favorite);
    }

    #[test]
    fn placed_near_user_with_consistent_distance() {
        let mut rng = FleetRng::new(2);
        let user = GeoPoint::new(28.6139, 77.2090);
        for i in 0..200 {
            let d = to_driver(&record("A", "B", &format!("u-{i}")), user, 8.0, &mut rng);
            assert_eq!(
                d.distance_km,
                distance_km(user.lat, user.lon, d.position.lat, d.position.lon)
            );
            // 8 km in degree space; allow for the longitude stretch at this latitude.
            assert!(d.distance_km <= 9.2, "driver placed {} km away", d.distance_km);
        }
    }

    #[test]
    fn rating_in_range_with_one_decimal() {
        let mut rng = FleetRng::new(3);
        for _ in 0..1_000 {
            let r = random_rating(&mut rng);
            assert!((MIN_RATING..=MAX_RATING).contains(&r), "rating {r}");
            assert_eq!(r, round1(r));
        }
    }

    #[test]
    fn every_vehicle_type_is_drawn() {
        let mut rng = FleetRng::new(4);
        let records: Vec<_> = (0..200).map(|i| record("A", "B", &format!("u-{i}"))).collect();
        let drivers = to_drivers(&records, GeoPoint::new(0.0, 0.0), 8.0, &mut rng);
        assert_eq!(drivers.len(), 200);
        for v in VehicleType::ALL {
            assert!(drivers.iter().any(|d| d.vehicle_type == v), "{v} never drawn");
        }
    }

    #[test]
    fn same_seed_same_drivers() {
        let records = vec![record("A", "B", "u-1"), record("C", "D", "u-2")];
        let user = GeoPoint::new(10.0, 10.0);
        let a = to_drivers(&records, user, 8.0, &mut FleetRng::new(9));
        let b = to_drivers(&records, user, 8.0, &mut FleetRng::new(9));
        assert_eq!(a, b);
    }
}

#[cfg(test)]
mod driver {
    use super::record;
    use crate::{Driver, to_driver};
    use fleet_core::{FleetRng, GeoPoint};

    #[test]
    fn move_to_refreshes_distance() {
        let mut rng = FleetRng::new(5);
        let user = GeoPoint::new(0.0, 0.0);
        let mut d = to_driver(&record("A", "B", "u-1"), user, 8.0, &mut rng);
        d.move_to(GeoPoint::new(1.0, 0.0), user);
        assert_eq!(d.distance_km, 111.2);
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let mut rng = FleetRng::new(5);
        let d = to_driver(&record("Asha", "Rao", "u-1"), GeoPoint::new(0.0, 0.0), 8.0, &mut rng);
        assert!(d.name_matches("asha"));
        assert!(d.name_matches("a r"));
        assert!(!d.name_matches("vikram"));
    }

    #[test]
    fn snapshot_json_shape() {
        let mut rng = FleetRng::new(6);
        let d = to_driver(&record("Asha", "Rao", "u-1"), GeoPoint::new(0.0, 0.0), 8.0, &mut rng);
        let value = serde_json::to_value(&d).unwrap();
        for key in [
            "id", "name", "firstName", "lastName", "email", "phone", "image", "thumbnail",
            "latitude", "longitude", "rating", "vehicleType", "distance", "isFavorite",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        let back: Driver = serde_json::from_value(value).unwrap();
        assert_eq!(back, d);
    }
}

#[cfg(test)]
mod source {
    use super::{RESPONSE_JSON, record};
    use crate::{DriverSource, SourceError, StaticSource};

    #[test]
    fn parses_response_document() {
        let src = StaticSource::from_json_str(RESPONSE_JSON).unwrap();
        assert_eq!(src.len(), 2);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let src = StaticSource::from_reader(RESPONSE_JSON.as_bytes()).unwrap();
        assert!(!src.is_empty());
    }

    #[test]
    fn malformed_document_is_decode_error() {
        assert!(matches!(
            StaticSource::from_json_str(r#"{"results": [{"name": 3}]}"#),
            Err(SourceError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn fetch_truncates_to_count() {
        let src = StaticSource::new((0..20).map(|i| record("A", "B", &format!("u-{i}"))).collect());
        assert_eq!(src.fetch(15).await.unwrap().len(), 15);
        assert_eq!(src.fetch(50).await.unwrap().len(), 20);
    }

    #[tokio::test]
    async fn empty_source_fails() {
        let src = StaticSource::default();
        assert!(matches!(src.fetch(15).await, Err(SourceError::Unavailable(_))));
    }
}

#[cfg(test)]
mod location {
    use crate::{FixedLocation, LocationProvider, NoLocation};
    use fleet_core::GeoPoint;

    #[tokio::test]
    async fn providers() {
        let p = GeoPoint::new(1.0, 2.0);
        assert_eq!(FixedLocation(p).current_location().await, Some(p));
        assert_eq!(NoLocation.current_location().await, None);
    }
}
