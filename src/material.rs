//! Surface materials and the scatter protocol.
//!
//! A material decides whether an incoming ray continues after striking a
//! surface and how much light the bounce retains. Dispatch is a flat enum
//! exposing exactly [`Material::scatter`] and [`Material::attenuation`].

use glam::DVec3;

use crate::error::{RenderError, Result};
use crate::hittable::HitRecord;
use crate::random;
use crate::ray::Ray;
use crate::vector::{unit_vector, Color, BLACK};

/// Surface material variants.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Material {
    /// Absorbs every ray. Placeholder for unshaded surfaces.
    #[default]
    Default,

    /// Diffuse surface scattering around the normal.
    Lambertian {
        /// Base reflectance color.
        albedo: Color,
    },

    /// Reflective surface with optional roughness.
    Metal {
        /// Base reflectance color.
        albedo: Color,
        /// Reflection roughness in [0, 1]. 0 is a perfect mirror.
        fuzz: f64,
    },

    /// Transparent surface refracting rays through its boundary.
    Dielectric {
        /// Per-bounce light retention.
        attenuation: Color,
        /// Index of refraction of the medium.
        refraction_index: f64,
    },
}

impl Material {
    /// Create a metal material, rejecting roughness outside [0, 1].
    pub fn metal(albedo: Color, fuzz: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&fuzz) {
            return Err(RenderError::Config(format!(
                "metal fuzz must lie in [0, 1], got {fuzz}"
            )));
        }
        Ok(Material::Metal { albedo, fuzz })
    }

    /// Scatter `ray` against the surface described by `rec`.
    ///
    /// `Ok(Some(_))` carries the outgoing ray; `Ok(None)` means the ray was
    /// absorbed and the path ends there.
    pub fn scatter(&self, ray: &Ray, rec: &HitRecord<'_>) -> Result<Option<Ray>> {
        match self {
            Material::Default => Ok(None),
            Material::Lambertian { .. } => {
                let direction = rec.normal + random::random_unit_vector();
                Ok(Some(Ray::new(rec.point, direction)))
            }
            Material::Metal { fuzz, .. } => {
                let reflected = reflect(ray.direction, rec.normal);
                let direction = unit_vector(reflected)? + *fuzz * random::random_unit_vector();
                if direction.dot(rec.normal) > 0.0 {
                    Ok(Some(Ray::new(rec.point, direction)))
                } else {
                    Ok(None)
                }
            }
            Material::Dielectric {
                refraction_index, ..
            } => {
                // Entering the medium sees 1/n, leaving it sees n.
                let relative_index = if rec.front_face {
                    1.0 / *refraction_index
                } else {
                    *refraction_index
                };
                let refracted = refract(unit_vector(ray.direction)?, rec.normal, relative_index);
                Ok(Some(Ray::new(rec.point, refracted)))
            }
        }
    }

    /// Per-bounce light retention color.
    pub fn attenuation(&self) -> Color {
        match self {
            Material::Default => BLACK,
            Material::Lambertian { albedo } => *albedo,
            Material::Metal { albedo, .. } => *albedo,
            Material::Dielectric { attenuation, .. } => *attenuation,
        }
    }
}

/// Reflect v off a surface with normal n.
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract v at a surface with normal n and the given relative refraction
/// index (eta_in / eta_out), via the perpendicular/parallel decomposition of
/// Snell's law.
///
/// Both v and n must be unit length; the contract is asserted rather than
/// silently corrected.
pub fn refract(v: DVec3, n: DVec3, relative_index: f64) -> DVec3 {
    debug_assert!(
        (v.length() - 1.0).abs() < 1e-9,
        "refract requires a unit direction, got {v}"
    );
    debug_assert!(
        (n.length() - 1.0).abs() < 1e-9,
        "refract requires a unit normal, got {n}"
    );

    // Guard against floating-point overshoot above 1.
    let cos_theta = (-v).dot(n).min(1.0);
    let r_perp = relative_index * (v + cos_theta * n);
    let r_parallel = -(1.0 - r_perp.length_squared()).abs().sqrt() * n;
    r_perp + r_parallel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::HitRecord;

    const EPS: f64 = 1e-12;

    fn record(material: &Material, normal: DVec3, front_face: bool) -> HitRecord<'_> {
        HitRecord {
            point: DVec3::new(0.0, 0.0, -1.0),
            normal,
            t: 1.0,
            front_face,
            material,
        }
    }

    #[test]
    fn default_material_absorbs() {
        let material = Material::default();
        let rec = record(&material, DVec3::Y, true);
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, -1.0, 0.0));

        assert!(material.scatter(&ray, &rec).unwrap().is_none());
        assert_eq!(material.attenuation(), BLACK);
    }

    #[test]
    fn lambertian_always_scatters_from_the_hit_point() {
        let material = Material::Lambertian {
            albedo: Color::new(0.5, 0.5, 0.5),
        };
        let rec = record(&material, DVec3::Y, true);
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, -1.0, 0.0));

        for _ in 0..100 {
            let scattered = material.scatter(&ray, &rec).unwrap().unwrap();
            assert_eq!(scattered.origin, rec.point);
        }
        assert_eq!(material.attenuation(), Color::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn metal_reflects_about_the_normal() {
        let material = Material::metal(Color::new(0.8, 0.8, 0.8), 0.0).unwrap();
        let rec = record(&material, DVec3::Y, true);
        let ray = Ray::new(DVec3::ZERO, DVec3::new(1.0, -1.0, 0.0));

        let scattered = material.scatter(&ray, &rec).unwrap().unwrap();
        let expected = DVec3::new(1.0, 1.0, 0.0).normalize();
        assert!((scattered.direction - expected).length() < EPS);
    }

    #[test]
    fn metal_absorbs_rays_reflected_into_the_surface() {
        let material = Material::metal(Color::new(0.8, 0.8, 0.8), 0.0).unwrap();
        // A record whose normal agrees with the incoming direction, so the
        // reflection lands inside the surface.
        let rec = record(&material, DVec3::Y, true);
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 1.0, 0.0));

        assert!(material.scatter(&ray, &rec).unwrap().is_none());
    }

    #[test]
    fn metal_rejects_fuzz_outside_unit_range() {
        assert!(matches!(
            Material::metal(Color::ONE, 1.5),
            Err(RenderError::Config(_))
        ));
        assert!(matches!(
            Material::metal(Color::ONE, -0.1),
            Err(RenderError::Config(_))
        ));
        assert!(Material::metal(Color::ONE, 1.0).is_ok());
    }

    #[test]
    fn dielectric_refracts_perpendicular_rays_straight_through() {
        let material = Material::Dielectric {
            attenuation: Color::ONE,
            refraction_index: 1.5,
        };
        let rec = record(&material, DVec3::Z, true);
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));

        let scattered = material.scatter(&ray, &rec).unwrap().unwrap();
        assert!((scattered.direction - DVec3::new(0.0, 0.0, -1.0)).length() < EPS);
        assert_eq!(material.attenuation(), Color::ONE);
    }

    #[test]
    fn dielectric_uses_the_full_index_when_leaving() {
        let material = Material::Dielectric {
            attenuation: Color::ONE,
            refraction_index: 1.5,
        };
        // Exiting the medium: the stored normal points against the ray.
        let rec = record(&material, DVec3::new(0.0, 0.0, -1.0), false);
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 1.0));

        let scattered = material.scatter(&ray, &rec).unwrap().unwrap();
        assert!((scattered.direction - DVec3::new(0.0, 0.0, 1.0)).length() < EPS);
    }

    #[test]
    fn reflect_mirrors_across_the_normal() {
        let reflected = reflect(DVec3::new(1.0, -1.0, 0.0), DVec3::Y);
        assert!((reflected - DVec3::new(1.0, 1.0, 0.0)).length() < EPS);
    }

    #[test]
    fn refract_is_identity_for_matched_media() {
        let v = DVec3::new(1.0, -1.0, 0.0).normalize();
        let refracted = refract(v, DVec3::Y, 1.0);
        assert!((refracted - v).length() < EPS);
    }
}
