//! Linear distance units and their ordering

use std::fmt;
use std::str::FromStr;

use crate::errors::{GeoError, GeoResult};
use super::definitions::UNIT_DEFINITIONS;

/// A unit of linear distance
///
/// Variants are declared smallest first, so the derived ordering is the
/// unit rank used by smart conversion: `Inches < Feet < Miles`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DistanceUnit {
    Inches,
    Feet,
    Miles,
}

/// Number of units in the rank chain
pub const UNIT_CHAIN_LEN: usize = DistanceUnit::ALL.len();

impl DistanceUnit {
    /// Every unit, in rank order
    pub const ALL: [DistanceUnit; 3] = [DistanceUnit::Inches, DistanceUnit::Feet, DistanceUnit::Miles];

    /// Position of this unit in the rank chain, starting at 0
    pub fn rank(self) -> usize {
        match self {
            DistanceUnit::Inches => 0,
            DistanceUnit::Feet => 1,
            DistanceUnit::Miles => 2,
        }
    }

    /// Short form used when rendering distances
    pub fn abbreviation(self) -> &'static str {
        match self {
            DistanceUnit::Inches => "in",
            DistanceUnit::Feet => "ft",
            DistanceUnit::Miles => "mi",
        }
    }

    /// Canonical lowercase plural name
    pub fn name(self) -> &'static str {
        match self {
            DistanceUnit::Inches => "inches",
            DistanceUnit::Feet => "feet",
            DistanceUnit::Miles => "miles",
        }
    }

    /// The next unit up the chain, if any
    pub fn larger(self) -> Option<DistanceUnit> {
        match self {
            DistanceUnit::Inches => Some(DistanceUnit::Feet),
            DistanceUnit::Feet => Some(DistanceUnit::Miles),
            DistanceUnit::Miles => None,
        }
    }

    /// The next unit down the chain, if any
    pub fn smaller(self) -> Option<DistanceUnit> {
        match self {
            DistanceUnit::Inches => None,
            DistanceUnit::Feet => Some(DistanceUnit::Inches),
            DistanceUnit::Miles => Some(DistanceUnit::Feet),
        }
    }

    /// Magnitudes this unit is comfortable displaying, as `[lower, upper)`
    ///
    /// A missing bound means the unit sits at that end of the chain and
    /// never steps further. Each `upper` converted into the larger unit
    /// lands at or above that unit's `lower`, and each `lower` converted
    /// into the smaller unit lands below that unit's `upper`; smart
    /// conversion relies on this to never bounce between neighbours.
    pub fn display_range(self) -> (Option<f64>, Option<f64>) {
        match self {
            DistanceUnit::Inches => (None, Some(12.0)),
            DistanceUnit::Feet => (Some(1.0), Some(1320.0)),
            DistanceUnit::Miles => (Some(0.1), None),
        }
    }

    /// Which neighbour a magnitude expressed in this unit should move to
    ///
    /// Returns `None` when the magnitude is inside the display range, or when
    /// the chain ends in the required direction. NaN never steps.
    pub fn smart_step(self, magnitude: f64) -> Option<DistanceUnit> {
        let (lower, upper) = self.display_range();

        if lower.map_or(false, |low| magnitude < low) {
            self.smaller()
        } else if upper.map_or(false, |high| magnitude >= high) {
            self.larger()
        } else {
            None
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoError;

    /// Resolve a unit from any abbreviation or alias in the unit table
    fn from_str(s: &str) -> GeoResult<Self> {
        UNIT_DEFINITIONS
            .lookup(s)
            .ok_or_else(|| GeoError::UnknownUnit(s.trim().to_string()))
    }
}
