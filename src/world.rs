//! Scene aggregate.
//!
//! Owns an ordered collection of hittables and resolves the nearest
//! intersection with a linear scan.

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;

/// Ordered collection of hittables forming a scene.
#[derive(Default)]
pub struct World {
    hittables: Vec<Box<dyn Hittable>>,
}

impl World {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hittable, returning self for fluent construction.
    pub fn add(&mut self, hittable: Box<dyn Hittable>) -> &mut Self {
        self.hittables.push(hittable);
        self
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.hittables.len()
    }

    /// True when the scene holds no objects.
    pub fn is_empty(&self) -> bool {
        self.hittables.is_empty()
    }
}

impl Hittable for World {
    /// Globally nearest intersection across all members.
    ///
    /// The upper bound shrinks to the closest accepted distance so far, so
    /// every object is tested against at most the current best.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest = ray_t.max;
        let mut nearest = None;

        for hittable in &self.hittables {
            if let Some(record) = hittable.hit(ray, Interval::new(ray_t.min, closest)) {
                closest = record.t;
                nearest = Some(record);
            }
        }

        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::sphere::Sphere;
    use crate::vector::Color;
    use glam::DVec3;

    const EPS: f64 = 1e-12;

    fn near_sphere() -> Sphere {
        let material = Material::Lambertian {
            albedo: Color::new(1.0, 0.0, 0.0),
        };
        Sphere::new(DVec3::new(0.0, 0.0, -1.0), 0.5, material).unwrap()
    }

    fn far_sphere() -> Sphere {
        let material = Material::Lambertian {
            albedo: Color::new(0.0, 0.0, 1.0),
        };
        Sphere::new(DVec3::new(0.0, 0.0, -2.0), 0.5, material).unwrap()
    }

    #[test]
    fn nearest_hit_wins_regardless_of_insertion_order() {
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));
        let near_albedo = Color::new(1.0, 0.0, 0.0);

        let mut near_first = World::new();
        near_first
            .add(Box::new(near_sphere()))
            .add(Box::new(far_sphere()));

        let mut far_first = World::new();
        far_first
            .add(Box::new(far_sphere()))
            .add(Box::new(near_sphere()));

        for world in [&near_first, &far_first] {
            let rec = world.hit(&ray, Interval::new(0.0, f64::INFINITY)).unwrap();
            assert!((rec.t - 0.5).abs() < EPS);
            assert_eq!(rec.material.attenuation(), near_albedo);
        }
    }

    #[test]
    fn empty_world_never_hits() {
        let world = World::new();
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));

        assert!(world.is_empty());
        assert!(world.hit(&ray, Interval::new(0.0, f64::INFINITY)).is_none());
    }

    #[test]
    fn add_is_fluent_and_counts_objects() {
        let mut world = World::new();
        world
            .add(Box::new(near_sphere()))
            .add(Box::new(far_sphere()));

        assert_eq!(world.len(), 2);
    }
}
