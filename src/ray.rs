//! Ray representation.
//!
//! A ray is defined as r(t) = origin + t * direction, a semi-infinite line
//! in 3D space used for intersection testing.

use glam::DVec3;

use crate::vector::Point;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: Point,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized; primary rays carry the full vector
    /// from the camera center to the sampled viewport point.
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Point, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Compute the point at parameter t along the ray.
    pub fn at(&self, t: f64) -> Point {
        self.origin + t * self.direction
    }
}
