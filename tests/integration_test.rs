//! Integration tests for the public API and CLI commands

use log::LevelFilter;

use geodist::commands::{build_cli, Command, CommandFactory, GeodistCommandFactory};
use geodist::config::Settings;
use geodist::utils::logger::Logger;
use geodist::{Distance, DistanceUnit, GeoError, Point, EARTH_CIRCUMFERENCE, EARTH_RADIUS};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn run(args: &[&str], settings: &Settings) -> Result<String, GeoError> {
    init_logging();
    let logger = Logger::disabled(LevelFilter::Debug);
    let matches = build_cli()
        .try_get_matches_from(args)
        .map_err(|e| GeoError::GenericError(e.to_string()))?;

    let command = GeodistCommandFactory::new().create_command(&matches, settings, &logger)?;
    command.render()
}

#[test]
fn test_constants() {
    assert_eq!(EARTH_CIRCUMFERENCE, Distance::new(24859.734, DistanceUnit::Miles));
    assert_eq!(EARTH_RADIUS.magnitude(), 3959.0);
    assert_eq!(EARTH_RADIUS.to_feet().magnitude(), 3959.0 * 5280.0);
}

#[test]
fn test_houston_to_mexico_city_workflow() {
    init_logging();
    let houston = Point::new(29.7761, -95.1147);
    let mexico_city = Point::new(19.4006, -99.0148);

    let d = houston.distance_to_point(&mexico_city);
    assert!((d.magnitude() - 757.0).abs() < 0.5);
    assert_eq!(d.smart_convert().unit(), DistanceUnit::Miles);
    assert_eq!(d.to_string(), "757.38 mi");
}

#[test]
fn test_box_then_measure() {
    init_logging();
    let center = Point::new(40.0, -105.0);
    let radius = Distance::feet(2640.0);
    let bbox = center.find_box_with_radius(radius);

    let north = Point::new(bbox.top_left.lat, center.lng);
    let reach = center.distance_to_point(&north).smart_convert();

    assert_eq!(reach.unit(), DistanceUnit::Miles);
    assert!((reach.magnitude() - 0.5).abs() < 0.005);
    assert!(bbox.contains(&center));
}

#[test]
fn test_convert_command_smart() {
    let out = run(&["geodist", "convert", "15840 in"], &Settings::default()).unwrap();
    assert_eq!(out, "15840.00 in = 0.25 mi");
}

#[test]
fn test_convert_command_explicit_unit() {
    let out = run(&["geodist", "convert", "2mi", "--to", "ft"], &Settings::default()).unwrap();
    assert_eq!(out, "2.00 mi = 10560.00 ft");
}

#[test]
fn test_convert_command_smart_disabled() {
    let settings = Settings { smart_units: false, ..Settings::default() };
    let out = run(&["geodist", "convert", "12 in"], &settings).unwrap();
    assert_eq!(out, "12.00 in = 12.00 in");
}

#[test]
fn test_convert_command_rejects_bad_unit() {
    let result = run(&["geodist", "convert", "3 ft", "--to", "km"], &Settings::default());
    assert!(matches!(result, Err(GeoError::UnknownUnit(_))));
}

#[test]
fn test_distance_command() {
    let args = ["geodist", "distance", "29.7761,-95.1147", "19.4006,-99.0148"];
    let out = run(&args, &Settings::default()).unwrap();
    assert_eq!(out, "757.38 mi");
}

#[test]
fn test_distance_command_negative_latitude_and_unit() {
    let args = ["geodist", "distance", "-33.8688,151.2093", "-33.8688,151.2093", "--unit", "ft"];
    let out = run(&args, &Settings::default()).unwrap();
    assert_eq!(out, "0.00 ft");
}

#[test]
fn test_distance_command_planar() {
    let args = ["geodist", "distance", "10,5", "11,5", "--planar"];
    let out = run(&args, &Settings::default()).unwrap();
    assert_eq!(out, "69.05 mi");
}

#[test]
fn test_box_command_default_unit() {
    let settings = Settings { default_unit: DistanceUnit::Feet, ..Settings::default() };

    let bare = run(&["geodist", "box", "0,0", "5280"], &settings).unwrap();
    let explicit = run(&["geodist", "box", "0,0", "1 mi"], &settings).unwrap();
    assert_eq!(bare, explicit);

    let lines: Vec<&str> = bare.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("top_left"));
    assert!(lines[3].starts_with("bottom_right"));
}

#[test]
fn test_box_command_bad_input() {
    let result = run(&["geodist", "box", "0;0", "1 mi"], &Settings::default());
    assert!(matches!(result, Err(GeoError::InvalidCoordinate(_))));

    let result = run(&["geodist", "box", "0,0", "lots"], &Settings::default());
    assert!(matches!(result, Err(GeoError::InvalidDistance(_))));
}

#[test]
fn test_missing_subcommand() {
    assert!(run(&["geodist"], &Settings::default()).is_err());
}
