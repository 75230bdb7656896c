//! Sphere primitive.
//!
//! Ray-sphere intersection through the reduced quadratic formula.

use crate::error::{RenderError, Result};
use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vector::Point;

/// Sphere defined by center, radius and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point in world coordinates.
    pub center: Point,
    /// Radius, strictly positive.
    pub radius: f64,
    /// Material owned by this sphere.
    pub material: Material,
}

impl Sphere {
    /// Create a sphere, rejecting non-positive radii.
    pub fn new(center: Point, radius: f64, material: Material) -> Result<Self> {
        if radius <= 0.0 {
            return Err(RenderError::Config(format!(
                "sphere radius must be positive, got {radius}"
            )));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = self.center - ray.origin;

        // Reduced quadratic with h = -b/2.
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Nearest root inside the acceptance window, falling back to the far
        // root when the near one lies outside it.
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let point = ray.at(root);
        let outward_normal = (point - self.center) / self.radius;
        Some(HitRecord::new(
            ray,
            point,
            outward_normal,
            root,
            &self.material,
        ))
    }
}
