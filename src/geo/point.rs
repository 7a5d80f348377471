//! Latitude/longitude points and the distance math built on them

use std::fmt;
use std::str::FromStr;
use log::debug;

use crate::constants::{EARTH_CIRCUMFERENCE, MILES_PER_ARC_DEGREE};
use crate::errors::{GeoError, GeoResult};
use crate::units::{Distance, DistanceUnit};
use super::bbox::BoundingBox;

/// Linear length of one degree of latitude and one degree of longitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineDistances {
    pub lat: Distance,
    pub lng: Distance,
}

/// A point on the Earth's surface
///
/// Coordinates are in degrees and are not range checked; values outside
/// [-90, 90] / [-180, 180] go straight into the math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Point {
    /// Create a new point
    pub fn new(lat: f64, lng: f64) -> Self {
        Point { lat, lng }
    }

    /// Create a new point, rejecting NaN and infinite coordinates
    pub fn try_new(lat: f64, lng: f64) -> GeoResult<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeoError::NonFiniteCoordinate { lat, lng });
        }
        Ok(Point::new(lat, lng))
    }

    /// Miles spanned by one degree of latitude and of longitude here
    ///
    /// A degree of latitude is the same everywhere. A degree of longitude
    /// shrinks with the cosine of the latitude, taken in radians.
    pub fn line_distances(&self) -> LineDistances {
        let miles_per_degree = EARTH_CIRCUMFERENCE.to_miles().magnitude() / 360.0;

        LineDistances {
            lat: Distance::miles(miles_per_degree.abs()),
            lng: Distance::miles((miles_per_degree * self.lat.to_radians().cos()).abs()),
        }
    }

    /// Great-circle distance to another point, in miles
    ///
    /// Spherical law of cosines. The cosine of the central angle is written
    /// as `cos(dlat) - cos(lat1) cos(lat2) (1 - cos(dlng))`, which equals the
    /// usual `sin sin + cos cos cos` form but comes out as exactly 1 for
    /// identical points. It is clamped to [-1, 1] before `acos`.
    pub fn distance_to_point(&self, other: &Point) -> Distance {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lat = (self.lat - other.lat).to_radians();
        let d_lng = (self.lng - other.lng).to_radians();

        let cos_angle = d_lat.cos() - lat1.cos() * lat2.cos() * (1.0 - d_lng.cos());
        let angle = cos_angle.clamp(-1.0, 1.0).acos().to_degrees();

        Distance::miles(angle * MILES_PER_ARC_DEGREE)
    }

    /// Flat-earth distance to another point, in miles
    ///
    /// Treats the degree differences as legs of a right triangle scaled by
    /// this point's line distances. Only reasonable over short hops.
    pub fn planar_distance_to_point(&self, other: &Point) -> Distance {
        let lines = self.line_distances();

        let lat_miles = (self.lat - other.lat).abs() * lines.lat.magnitude();
        let lng_miles = (self.lng - other.lng).abs() * lines.lng.magnitude();

        Distance::miles(lat_miles.hypot(lng_miles))
    }

    /// Box around this point reaching `radius` in each cardinal direction
    ///
    /// The degree offsets come from the local line distances, so the box is
    /// only accurate for small radii. Nothing is clamped: large radii can
    /// produce coordinates outside the valid ranges, and the longitude offset
    /// grows without bound towards the poles (a zero line distance divides
    /// through to infinity).
    pub fn find_box_with_radius(&self, radius: Distance) -> BoundingBox {
        let lines = self.line_distances();
        let lat_line = lines.lat.to_miles().magnitude();
        let lng_line = lines.lng.to_miles().magnitude();
        let radius_miles = radius.to_miles().magnitude();

        let d_lat = radius_miles / lat_line;
        let d_lng = radius_miles / lng_line;

        debug!("Box around {} with radius {}: dlat={}, dlng={}", self, radius, d_lat, d_lng);

        BoundingBox::new(
            Point::new(self.lat + d_lat, self.lng - d_lng),
            Point::new(self.lat + d_lat, self.lng + d_lng),
            Point::new(self.lat - d_lat, self.lng + d_lng),
            Point::new(self.lat - d_lat, self.lng - d_lng),
        )
    }

    /// Great-circle distance expressed in a chosen unit
    pub fn distance_to_point_in(&self, other: &Point, unit: DistanceUnit) -> Distance {
        self.distance_to_point(other).convert(unit)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

impl FromStr for Point {
    type Err = GeoError;

    /// Parse a point from "lat,lng"
    fn from_str(s: &str) -> GeoResult<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 2 {
            return Err(GeoError::InvalidCoordinate(format!(
                "'{}' must be in format 'lat,lng'", s)));
        }

        let lat = parts[0].trim().parse::<f64>()
            .map_err(|_| GeoError::InvalidCoordinate(format!("Invalid latitude '{}'", parts[0].trim())))?;
        let lng = parts[1].trim().parse::<f64>()
            .map_err(|_| GeoError::InvalidCoordinate(format!("Invalid longitude '{}'", parts[1].trim())))?;

        Point::try_new(lat, lng)
    }
}
