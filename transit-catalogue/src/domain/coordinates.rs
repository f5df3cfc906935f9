//! Geographic coordinates and great-circle distance.

use geo::{HaversineDistance, Point};

/// A position on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    fn to_point(self) -> Point {
        Point::new(self.lng, self.lat)
    }
}

/// Great-circle distance between two positions, in meters.
///
/// Identical positions are exactly zero apart.
pub fn compute_distance(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }
    from.to_point().haversine_distance(&to.to_point())
}
