//! Bounding box produced from a point and a radius

use super::point::Point;

/// Four corners of a rectangle in lat/lng space
///
/// The corner order follows `Point::find_box_with_radius`: the bottom edge
/// is stored right-to-left, so `bottom_left` carries the larger longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(top_left: Point, top_right: Point, bottom_left: Point, bottom_right: Point) -> Self {
        BoundingBox {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Corners in field order
    pub fn corners(&self) -> [Point; 4] {
        [self.top_left, self.top_right, self.bottom_left, self.bottom_right]
    }

    fn lat_bounds(&self) -> (f64, f64) {
        let lats = self.corners().map(|p| p.lat);
        (lats.iter().copied().fold(f64::INFINITY, f64::min),
         lats.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    }

    fn lng_bounds(&self) -> (f64, f64) {
        let lngs = self.corners().map(|p| p.lng);
        (lngs.iter().copied().fold(f64::INFINITY, f64::min),
         lngs.iter().copied().fold(f64::NEG_INFINITY, f64::max))
    }

    /// Height of the box in degrees of latitude
    pub fn lat_span(&self) -> f64 {
        let (min, max) = self.lat_bounds();
        max - min
    }

    /// Width of the box in degrees of longitude
    pub fn lng_span(&self) -> f64 {
        let (min, max) = self.lng_bounds();
        max - min
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Point {
        let (min_lat, max_lat) = self.lat_bounds();
        let (min_lng, max_lng) = self.lng_bounds();
        Point::new(min_lat + (max_lat - min_lat) / 2.0, min_lng + (max_lng - min_lng) / 2.0)
    }

    /// Check if this bounding box contains a point (edges included)
    pub fn contains(&self, point: &Point) -> bool {
        let (min_lat, max_lat) = self.lat_bounds();
        let (min_lng, max_lng) = self.lng_bounds();

        point.lat >= min_lat && point.lat <= max_lat &&
            point.lng >= min_lng && point.lng <= max_lng
    }
}
