//! Unit conversion table

use crate::constants::{FEET_PER_MILE, INCHES_PER_FOOT, INCHES_PER_MILE};
use super::unit::DistanceUnit;

/// Multiplier between two units, kept as a ratio
///
/// Applying `magnitude * numerator / denominator` instead of multiplying by
/// a precomputed reciprocal keeps conversions like 18 in -> 1.5 ft exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionFactor {
    pub numerator: f64,
    pub denominator: f64,
}

impl ConversionFactor {
    pub const IDENTITY: ConversionFactor = ConversionFactor::ratio(1.0, 1.0);

    const fn ratio(numerator: f64, denominator: f64) -> Self {
        ConversionFactor { numerator, denominator }
    }

    const fn times(numerator: f64) -> Self {
        ConversionFactor::ratio(numerator, 1.0)
    }

    const fn per(denominator: f64) -> Self {
        ConversionFactor::ratio(1.0, denominator)
    }

    /// Convert a magnitude
    pub fn apply(self, magnitude: f64) -> f64 {
        magnitude * self.numerator / self.denominator
    }

    /// The factor as a single multiplier
    pub fn value(self) -> f64 {
        self.numerator / self.denominator
    }
}

/// Factor that takes a magnitude in `from` to a magnitude in `to`
pub fn factor_between(from: DistanceUnit, to: DistanceUnit) -> ConversionFactor {
    use DistanceUnit::*;

    match (from, to) {
        (Feet, Feet) => ConversionFactor::IDENTITY,
        (Feet, Inches) => ConversionFactor::times(INCHES_PER_FOOT),
        (Feet, Miles) => ConversionFactor::per(FEET_PER_MILE),

        (Inches, Feet) => ConversionFactor::per(INCHES_PER_FOOT),
        (Inches, Inches) => ConversionFactor::IDENTITY,
        (Inches, Miles) => ConversionFactor::per(INCHES_PER_MILE),

        (Miles, Feet) => ConversionFactor::times(FEET_PER_MILE),
        (Miles, Inches) => ConversionFactor::times(INCHES_PER_MILE),
        (Miles, Miles) => ConversionFactor::IDENTITY,
    }
}

/// Multiplier that takes a magnitude in `from` to a magnitude in `to`
pub fn conversion_factor(from: DistanceUnit, to: DistanceUnit) -> f64 {
    factor_between(from, to).value()
}
