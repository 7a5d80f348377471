//! Linear distance units
//!
//! This module provides the unit enum, the conversion table between units,
//! and the `Distance` value type with its smart unit normalisation.

mod unit;
mod conversion;
mod distance;
pub(crate) mod definitions;

pub use self::unit::{DistanceUnit, UNIT_CHAIN_LEN};
pub use self::conversion::{conversion_factor, factor_between, ConversionFactor};
pub use self::distance::Distance;
pub use self::definitions::UnitDefinitions;
