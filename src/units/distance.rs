//! Distance values

use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::errors::{GeoError, GeoResult};
use super::conversion::factor_between;
use super::unit::{DistanceUnit, UNIT_CHAIN_LEN};

lazy_static! {
    // "<number><optional space><unit>", e.g. "12.5 mi", "-3ft", "1e3 in", "6\""
    static ref DISTANCE_PATTERN: Regex =
        Regex::new(r#"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*([A-Za-z"']+)\s*$"#)
            .expect("distance pattern is valid");
}

/// A magnitude tagged with a unit
///
/// Values are never changed in place; every conversion returns a new
/// `Distance`. The magnitude is not required to be positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    magnitude: f64,
    unit: DistanceUnit,
}

impl Distance {
    /// Create a new distance
    pub const fn new(magnitude: f64, unit: DistanceUnit) -> Self {
        Distance { magnitude, unit }
    }

    pub const fn inches(magnitude: f64) -> Self {
        Distance::new(magnitude, DistanceUnit::Inches)
    }

    pub const fn feet(magnitude: f64) -> Self {
        Distance::new(magnitude, DistanceUnit::Feet)
    }

    pub const fn miles(magnitude: f64) -> Self {
        Distance::new(magnitude, DistanceUnit::Miles)
    }

    /// Numeric value in this distance's own unit
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Re-express this distance in another unit
    pub fn convert(&self, target: DistanceUnit) -> Distance {
        let factor = factor_between(self.unit, target);
        Distance::new(factor.apply(self.magnitude), target)
    }

    pub fn to_inches(&self) -> Distance {
        self.convert(DistanceUnit::Inches)
    }

    pub fn to_feet(&self) -> Distance {
        self.convert(DistanceUnit::Feet)
    }

    pub fn to_miles(&self) -> Distance {
        self.convert(DistanceUnit::Miles)
    }

    /// Pick the unit that reads best for this magnitude
    ///
    /// Walks the unit chain one rank at a time, checking the converted
    /// magnitude against each unit's display range, until it settles or
    /// hits an end of the chain. The walk takes at most two steps.
    pub fn smart_unit(&self) -> DistanceUnit {
        let mut current = *self;

        for _ in 1..UNIT_CHAIN_LEN {
            match current.unit.smart_step(current.magnitude) {
                Some(next) => current = current.convert(next),
                None => break,
            }
        }

        current.unit
    }

    /// Convert into the unit chosen by [`Distance::smart_unit`]
    pub fn smart_convert(&self) -> Distance {
        let unit = self.smart_unit();
        debug!("Smart conversion of {} settled on {}", self, unit.name());
        self.convert(unit)
    }

    /// Compare with another distance, in this distance's unit
    pub fn approx_eq(&self, other: &Distance, tolerance: f64) -> bool {
        (self.magnitude - other.convert(self.unit).magnitude).abs() <= tolerance
    }

    /// Write the formatted distance to stdout
    pub fn print(&self) {
        println!("{}", self);
    }
}

impl fmt::Display for Distance {
    /// Magnitude to two decimal places followed by the unit abbreviation
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.magnitude, self.unit.abbreviation())
    }
}

impl FromStr for Distance {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        let caps = DISTANCE_PATTERN
            .captures(s)
            .ok_or_else(|| GeoError::InvalidDistance(s.to_string()))?;

        let magnitude = caps[1]
            .parse::<f64>()
            .map_err(|_| GeoError::InvalidDistance(s.to_string()))?;
        let unit = caps[2].parse::<DistanceUnit>()?;

        Ok(Distance::new(magnitude, unit))
    }
}

impl Add for Distance {
    type Output = Distance;

    /// Sum in the left-hand unit
    fn add(self, rhs: Distance) -> Distance {
        Distance::new(self.magnitude + rhs.convert(self.unit).magnitude, self.unit)
    }
}

impl Sub for Distance {
    type Output = Distance;

    /// Difference in the left-hand unit
    fn sub(self, rhs: Distance) -> Distance {
        Distance::new(self.magnitude - rhs.convert(self.unit).magnitude, self.unit)
    }
}

impl Neg for Distance {
    type Output = Distance;

    fn neg(self) -> Distance {
        Distance::new(-self.magnitude, self.unit)
    }
}
