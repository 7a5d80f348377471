//! Fixed reference values
//!
//! Earth measurements use a spherical approximation and are expressed in
//! statute miles.

use crate::units::Distance;

/// Inches in one foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Feet in one statute mile
pub const FEET_PER_MILE: f64 = 5280.0;

/// Inches in one statute mile
pub const INCHES_PER_MILE: f64 = FEET_PER_MILE * INCHES_PER_FOOT;

/// Circumference of the Earth
pub const EARTH_CIRCUMFERENCE: Distance = Distance::miles(24859.734);

/// Mean radius of the Earth
pub const EARTH_RADIUS: Distance = Distance::miles(3959.0);

// Degrees of arc to statute miles, by way of nautical miles and kilometres.
pub const NAUTICAL_MILES_PER_DEGREE: f64 = 60.0;
pub const STATUTE_MILES_PER_NAUTICAL_MILE: f64 = 1.1515;
pub const KILOMETRES_PER_MILE: f64 = 1.609344;
pub const MILES_PER_KILOMETRE: f64 = 0.6213712;

/// Statute miles covered by one degree of great-circle arc
pub const MILES_PER_ARC_DEGREE: f64 = NAUTICAL_MILES_PER_DEGREE
    * STATUTE_MILES_PER_NAUTICAL_MILE
    * KILOMETRES_PER_MILE
    * MILES_PER_KILOMETRE;
