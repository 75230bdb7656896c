//! Viewport geometry.

use glam::DVec3;

use crate::vector::Point;

/// Pinhole camera described by focal length, viewport extent and center.
///
/// Every derived vector is recomputed on access; the camera carries no
/// cached state and can be copied and shared freely.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Distance from the camera center to the viewport plane.
    pub focal_length: f64,
    /// Viewport extent along the world y axis.
    pub viewport_height: f64,
    /// Viewport extent along the world x axis.
    pub viewport_width: f64,
    /// Camera position in world space.
    pub center: Point,
}

impl Camera {
    /// Vector across the horizontal viewport edge.
    pub fn viewport_u(&self) -> DVec3 {
        DVec3::new(self.viewport_width, 0.0, 0.0)
    }

    /// Vector down the left viewport edge.
    ///
    /// Negated on y because image rows grow downward while world y grows
    /// upward.
    pub fn viewport_v(&self) -> DVec3 {
        DVec3::new(0.0, -self.viewport_height, 0.0)
    }

    /// Position of the viewport's upper left corner.
    pub fn viewport_upper_left(&self) -> Point {
        self.center
            - DVec3::new(0.0, 0.0, self.focal_length)
            - self.viewport_u() / 2.0
            - self.viewport_v() / 2.0
    }
}
