//! Ray-object intersection.
//!
//! Defines the [`Hittable`] trait for geometric primitives and the transient
//! [`HitRecord`] produced by a successful intersection test.

use glam::DVec3;

use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vector::Point;

/// Intersection between a ray and a surface.
///
/// Constructed per intersection test and discarded after shading. Borrows
/// the material from the surface that produced it, so the record cannot
/// outlive the scene.
#[derive(Debug)]
pub struct HitRecord<'a> {
    /// Intersection point.
    pub point: Point,
    /// Unit surface normal at the intersection, always pointing against the
    /// incoming ray.
    pub normal: DVec3,
    /// Parametric distance from the ray origin to the intersection.
    pub t: f64,
    /// True when the ray struck the surface from its outward side.
    pub front_face: bool,
    /// Material of the intersected surface.
    pub material: &'a Material,
}

impl<'a> HitRecord<'a> {
    /// Build a record from the outward normal, flipping it when the ray
    /// arrives from inside so shading never re-tests sidedness.
    pub fn new(
        ray: &Ray,
        point: Point,
        outward_normal: DVec3,
        t: f64,
        material: &'a Material,
    ) -> Self {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        Self {
            point,
            normal,
            t,
            front_face,
            material,
        }
    }
}

/// Geometric primitive supporting ray intersection.
///
/// Send + Sync so a scene can be shared read-only with a parallel driver.
pub trait Hittable: Send + Sync {
    /// Intersection with the accepted distance inside `ray_t`, or None when
    /// the ray misses.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_face_keeps_the_outward_normal() {
        let material = Material::default();
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));
        let rec = HitRecord::new(&ray, DVec3::new(0.0, 0.0, -0.5), DVec3::Z, 0.5, &material);

        assert!(rec.front_face);
        assert_eq!(rec.normal, DVec3::Z);
    }

    #[test]
    fn back_face_flips_the_outward_normal() {
        let material = Material::default();
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 1.0));
        let rec = HitRecord::new(&ray, DVec3::new(0.0, 0.0, 0.5), DVec3::Z, 0.5, &material);

        assert!(!rec.front_face);
        assert_eq!(rec.normal, -DVec3::Z);
    }
}
