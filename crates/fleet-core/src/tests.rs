//! Unit tests for fleet-core primitives.

#[cfg(test)]
mod geo {
    use crate::geo::{MAX_JITTER_DEG, round1};
    use crate::{FleetRng, GeoPoint, distance_km, random_nearby_point, random_offset};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(28.6139, 77.2090);
        assert_eq!(p.distance_km(p), 0.0);
        assert_eq!(distance_km(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn symmetric() {
        let pairs = [
            (GeoPoint::new(28.6139, 77.2090), GeoPoint::new(28.7041, 77.1025)),
            (GeoPoint::new(-33.86, 151.21), GeoPoint::new(51.5, -0.12)),
            (GeoPoint::new(0.0, 179.9), GeoPoint::new(0.0, -179.9)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.distance_km(b), b.distance_km(a), "{a} vs {b}");
        }
    }

    #[test]
    fn near_antipodal_is_finite_and_symmetric() {
        for step in 0..900 {
            let lat = step as f64 * 0.1;
            let there = distance_km(lat, 0.0, -lat, 180.0);
            let back = distance_km(-lat, 180.0, lat, 0.0);
            assert!(there.is_finite(), "lat {lat}: {there}");
            assert_eq!(there, back, "lat {lat}");
            // Half the circumference, give or take rounding.
            assert!((there - 20015.1).abs() <= 0.2, "lat {lat}: {there}");
        }
    }

    #[test]
    fn delhi_regression_distance() {
        // Connaught Place → north-west Delhi.  Haversine with R = 6371 km.
        let d = distance_km(28.6139, 77.2090, 28.7041, 77.1025);
        assert!((d - 14.4).abs() <= 0.2, "got {d}");
    }

    #[test]
    fn one_degree_latitude() {
        let d = distance_km(30.0, -88.0, 31.0, -88.0);
        assert!((d - 111.2).abs() < 0.05, "got {d}");
    }

    #[test]
    fn rounded_to_one_decimal() {
        let d = distance_km(10.0, 10.0, 10.0123, 10.0456);
        assert_eq!(d, round1(d));
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(12.35000001), 12.4);
    }

    #[test]
    fn offset_within_jitter_bounds() {
        let mut rng = FleetRng::new(9);
        for _ in 0..10_000 {
            let v = random_offset(&mut rng);
            assert!(v.abs() <= MAX_JITTER_DEG, "got {v}");
        }
    }

    #[test]
    fn nearby_point_within_radius() {
        let mut rng = FleetRng::new(3);
        let base = GeoPoint::new(28.6139, 77.2090);
        for _ in 0..2_000 {
            let p = random_nearby_point(&mut rng, base, 8.0);
            // Degree-space radius bound (1° ≈ 111 km).
            let deg = ((p.lat - base.lat).powi(2) + (p.lon - base.lon).powi(2)).sqrt();
            assert!(deg <= 8.0 / 111.0 + 1e-12, "point {p} too far: {deg}°");
        }
    }

    #[test]
    fn zero_radius_returns_base() {
        let mut rng = FleetRng::new(3);
        let base = GeoPoint::new(1.0, 2.0);
        assert_eq!(random_nearby_point(&mut rng, base, 0.0), base);
    }

    #[test]
    fn negative_radius_behaves_like_zero() {
        let mut rng = FleetRng::new(5);
        let base = GeoPoint::new(1.0, 2.0);
        assert_eq!(random_nearby_point(&mut rng, base, -3.0), base);
    }

    #[test]
    fn serde_field_names() {
        let json = serde_json::to_string(&GeoPoint::new(1.5, -2.0)).unwrap();
        assert_eq!(json, r#"{"latitude":1.5,"longitude":-2.0}"#);
    }
}

#[cfg(test)]
mod rng {
    use crate::FleetRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = FleetRng::new(12345);
        let mut r2 = FleetRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.gen_range(0.0..1.0);
            let b: f64 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn seed_option_some_matches_new() {
        let mut a = FleetRng::from_seed_option(Some(77));
        let mut b = FleetRng::new(77);
        for _ in 0..20 {
            assert_eq!(a.gen_range(0..1_000_000u32), b.gen_range(0..1_000_000u32));
        }
    }
}

#[cfg(test)]
mod ids {
    use crate::DriverId;

    #[test]
    fn display_and_serde_are_plain_strings() {
        let id = DriverId::new("abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc-123""#);
        let back: DriverId = serde_json::from_str(r#""abc-123""#).unwrap();
        assert_eq!(back, id);
    }
}

#[cfg(test)]
mod vehicle {
    use crate::VehicleType;

    #[test]
    fn labels() {
        assert_eq!(VehicleType::Suv.to_string(), "SUV");
        assert_eq!(VehicleType::Hatchback.as_str(), "Hatchback");
        assert_eq!(serde_json::to_string(&VehicleType::Suv).unwrap(), r#""SUV""#);
        let v: VehicleType = serde_json::from_str(r#""Van""#).unwrap();
        assert_eq!(v, VehicleType::Van);
    }

    #[test]
    fn all_has_every_variant_once() {
        let mut labels: Vec<_> = VehicleType::ALL.iter().map(|v| v.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 5);
    }
}

#[cfg(test)]
mod config {
    use std::io::Write;

    use crate::config::{DEFAULT_FETCH_COUNT, DEFAULT_NEAREST_LIMIT};
    use crate::{DEFAULT_LOCATION, EngineConfig, FleetError, GeoPoint};

    #[test]
    fn defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.default_location, DEFAULT_LOCATION);
        assert_eq!(cfg.fetch_count, DEFAULT_FETCH_COUNT);
        assert_eq!(cfg.nearest_limit, DEFAULT_NEAREST_LIMIT);
        assert_eq!(cfg.tick_interval().as_millis(), 3_000);
        assert!(cfg.seed.is_none());
        cfg.validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = EngineConfig::from_json_str(
            r#"{ "fetch_count": 25, "seed": 7,
                 "default_location": { "latitude": 51.5, "longitude": -0.12 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.fetch_count, 25);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.default_location, GeoPoint::new(51.5, -0.12));
        assert_eq!(cfg.nearby_radius_km, 8.0);
        assert_eq!(cfg.nearest_limit, 5);
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "fetch_count": 0 }"#),
            Err(FleetError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "nearby_radius_km": -1.0 }"#),
            Err(FleetError::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "tick_interval_ms": 0 }"#),
            Err(FleetError::Config(_))
        ));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            EngineConfig::from_json_str("{ not json"),
            Err(FleetError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "nearest_limit": 3 }}"#).unwrap();
        let cfg = EngineConfig::from_json_file(file.path()).unwrap();
        assert_eq!(cfg.nearest_limit, 3);
    }
}
