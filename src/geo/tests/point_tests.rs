//! Tests for point distances and line distances

use crate::errors::GeoError;
use crate::geo::Point;
use crate::units::{Distance, DistanceUnit};
use super::test_utils::{assert_close, sample_points, HOUSTON, MEXICO_CITY};

#[test]
fn test_distance_between_two_points() {
    let d = HOUSTON.distance_to_point(&MEXICO_CITY);

    assert_eq!(d.unit(), DistanceUnit::Miles);
    assert!((d.magnitude() - 757.0).abs() < 0.5, "got {}", d);
}

#[test]
fn test_distance_to_self_is_zero() {
    for p in sample_points() {
        assert_eq!(p.distance_to_point(&p).magnitude(), 0.0, "point {}", p);
    }
}

#[test]
fn test_distance_is_symmetric() {
    let points = sample_points();
    for a in &points {
        for b in &points {
            let ab = a.distance_to_point(b).magnitude();
            let ba = b.distance_to_point(a).magnitude();
            assert!((ab - ba).abs() < 1e-6, "{} <-> {}: {} vs {}", a, b, ab, ba);
        }
    }
}

#[test]
fn test_antipodal_points_stay_finite() {
    let d = Point::new(0.0, 0.0).distance_to_point(&Point::new(0.0, 180.0));
    assert!((d.magnitude() - 12436.2).abs() < 0.5, "got {}", d);

    // The cosine lands a hair below -1 here and has to be clamped
    let d = Point::new(45.0, 0.0).distance_to_point(&Point::new(-45.0, 180.0));
    assert!(d.magnitude().is_finite());
    assert!((d.magnitude() - 12436.2).abs() < 0.5, "got {}", d);
}

#[test]
fn test_distance_in_other_unit() {
    let miles = HOUSTON.distance_to_point(&MEXICO_CITY);
    let feet = HOUSTON.distance_to_point_in(&MEXICO_CITY, DistanceUnit::Feet);

    assert_eq!(feet.unit(), DistanceUnit::Feet);
    assert!(miles.approx_eq(&feet, 1e-9));
}

#[test]
fn test_line_distances_at_equator() {
    let lines = Point::new(0.0, 12.0).line_distances();

    assert_eq!(lines.lat.unit(), DistanceUnit::Miles);
    assert_close(lines.lat.magnitude(), 24859.734 / 360.0, 1e-12);
    assert_close(lines.lng.magnitude(), 24859.734 / 360.0, 1e-12);
}

#[test]
fn test_line_distances_shrink_with_latitude() {
    let north = Point::new(60.0, 0.0).line_distances();
    let south = Point::new(-60.0, 0.0).line_distances();

    assert_close(north.lng.magnitude(), north.lat.magnitude() / 2.0, 1e-9);
    assert_close(north.lng.magnitude(), south.lng.magnitude(), 1e-12);
    assert!(Point::new(90.0, 0.0).line_distances().lng.magnitude() < 1e-9);
}

#[test]
fn test_planar_distance_along_meridian() {
    let a = Point::new(10.0, 5.0);
    let b = Point::new(12.0, 5.0);

    let d = a.planar_distance_to_point(&b);
    assert_close(d.magnitude(), 2.0 * 24859.734 / 360.0, 1e-12);
}

#[test]
fn test_planar_matches_spherical_for_short_hops() {
    let a = Point::new(40.7128, -74.0060);
    let b = Point::new(40.7306, -73.9352);

    let planar = a.planar_distance_to_point(&b).magnitude();
    let spherical = a.distance_to_point(&b).magnitude();
    assert_close(planar, spherical, 0.01);
}

#[test]
fn test_parse_point() {
    let p: Point = "29.7761, -95.1147".parse().unwrap();
    assert_eq!(p, HOUSTON);
}

#[test]
fn test_parse_point_errors() {
    assert!(matches!("29.7".parse::<Point>(), Err(GeoError::InvalidCoordinate(_))));
    assert!(matches!("1,2,3".parse::<Point>(), Err(GeoError::InvalidCoordinate(_))));
    assert!(matches!("north,2".parse::<Point>(), Err(GeoError::InvalidCoordinate(_))));
    assert!(matches!("NaN,2".parse::<Point>(), Err(GeoError::NonFiniteCoordinate { .. })));
}

#[test]
fn test_try_new() {
    assert!(Point::try_new(1000.0, -1000.0).is_ok());
    assert!(Point::try_new(f64::INFINITY, 0.0).is_err());
    assert!(Point::try_new(0.0, f64::NAN).is_err());
}

#[test]
fn test_new_accepts_anything() {
    let p = Point::new(f64::NAN, 400.0);
    assert!(p.lat.is_nan());
    assert_eq!(p.lng, 400.0);
    assert!(p.distance_to_point(&Point::new(0.0, 0.0)).magnitude().is_nan());
}

#[test]
fn test_display() {
    assert_eq!(Point::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    assert_eq!(Distance::miles(1.0).to_string(), "1.00 mi");
}
