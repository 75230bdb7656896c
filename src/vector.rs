//! Vector aliases and normalization helpers.
//!
//! Vector math is `glam`'s [`DVec3`]; this module adds the semantic aliases
//! used throughout the crate and a checked normalization that fails instead
//! of producing non-finite components.

use glam::DVec3;

use crate::error::{RenderError, Result};

/// Position in world space.
pub type Point = DVec3;

/// RGB color with linear channels.
pub type Color = DVec3;

/// Pure black, the color of an absorbed or exhausted path.
pub const BLACK: Color = DVec3::ZERO;

/// Returns the unit vector with the same direction as `v`.
///
/// Fails when `v` has zero length, where the direction is undefined.
pub fn unit_vector(v: DVec3) -> Result<DVec3> {
    let length = v.length();
    if length == 0.0 {
        return Err(RenderError::DegenerateGeometry(format!(
            "cannot normalize zero-length vector {v}"
        )));
    }
    Ok(v / length)
}
