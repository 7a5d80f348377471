pub mod errors;
pub mod constants;
pub mod units;
pub mod geo;
pub mod config;
pub mod utils;
pub mod commands;

pub use errors::{GeoError, GeoResult};
pub use constants::{EARTH_CIRCUMFERENCE, EARTH_RADIUS};
pub use units::{Distance, DistanceUnit};
pub use geo::{BoundingBox, LineDistances, Point};
