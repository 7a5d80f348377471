//! Geographic points and the boxes derived from them
//!
//! All math uses a spherical Earth. Coordinates are plain degrees with no
//! datum or projection attached.

mod bbox;
mod point;
mod tests;

pub use self::bbox::BoundingBox;
pub use self::point::{LineDistances, Point};
