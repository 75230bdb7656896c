//! Render driver.
//!
//! Orchestrates per-pixel sampling, recursive shading, sample averaging and
//! PPM emission. The per-pixel estimator itself is side-effect free; the
//! render loop around it owns the progress bar and timing log.

use std::io::Write;

use glam::DVec3;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::camera::Camera;
use crate::error::{RenderError, Result};
use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::output::output_ppm;
use crate::random;
use crate::ray::Ray;
use crate::vector::{unit_vector, Color, Point, BLACK};
use crate::world::World;

/// Default image width in pixels when the caller does not choose one.
pub const DEFAULT_IMAGE_WIDTH: u32 = 200;

/// Sky gradient color straight up.
const SKY_BLUE: Color = DVec3::new(0.5, 0.7, 1.0);
/// Sky gradient color at the horizon.
const WHITE: Color = DVec3::new(1.0, 1.0, 1.0);

/// Lower edge of the hit acceptance window. Scattered rays start exactly on
/// a surface, and accepting distances near zero would let them re-hit it
/// (shadow acne).
const HIT_EPSILON: f64 = 1e-4;

/// Monte-Carlo render driver.
///
/// Construction validates the image configuration, [`initialize`] derives
/// the camera and pixel grid, and [`render`] streams the image to a sink.
///
/// [`initialize`]: RayTracer::initialize
/// [`render`]: RayTracer::render
#[derive(Debug, Clone)]
pub struct RayTracer {
    /// Width over height of the rendered image.
    pub aspect_ratio: f64,
    /// Image width in pixels.
    pub image_width: u32,
    /// Image height in pixels, derived from width and aspect ratio.
    pub image_height: u32,
    /// Independent jittered samples per pixel.
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces.
    pub max_depth: u32,

    /// Viewport geometry, derived by initialize().
    camera: Camera,
    /// World position of the center of pixel (0, 0).
    pixel00_loc: Point,
    /// Offset from pixel to pixel along a row.
    pixel_delta_u: DVec3,
    /// Offset from pixel to pixel down a column.
    pixel_delta_v: DVec3,
    /// Whether the derived fields above have been computed.
    initialized: bool,
}

impl RayTracer {
    /// Create a tracer, validating the image configuration.
    ///
    /// Fails when the aspect ratio is not a positive finite number, when
    /// width or sample count is zero, or when the derived image height
    /// falls below one pixel.
    pub fn new(
        aspect_ratio: f64,
        image_width: u32,
        samples_per_pixel: u32,
        max_depth: u32,
    ) -> Result<Self> {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(RenderError::Config(format!(
                "aspect ratio must be a positive finite number, got {aspect_ratio}"
            )));
        }
        if image_width == 0 {
            return Err(RenderError::Config("image width must be positive".into()));
        }
        if samples_per_pixel == 0 {
            return Err(RenderError::Config(
                "samples per pixel must be positive".into(),
            ));
        }

        let image_height = (image_width as f64 / aspect_ratio) as u32;
        if image_height < 1 {
            return Err(RenderError::Config(format!(
                "derived image height is below 1 pixel for width {image_width} \
                 and aspect ratio {aspect_ratio}"
            )));
        }

        Ok(Self {
            aspect_ratio,
            image_width,
            image_height,
            samples_per_pixel,
            max_depth,
            camera: Camera {
                focal_length: 0.0,
                viewport_height: 0.0,
                viewport_width: 0.0,
                center: Point::ZERO,
            },
            pixel00_loc: Point::ZERO,
            pixel_delta_u: DVec3::ZERO,
            pixel_delta_v: DVec3::ZERO,
            initialized: false,
        })
    }

    /// Derive the camera and pixel grid from the image configuration.
    ///
    /// Idempotent; runs automatically at the start of [`RayTracer::render`]
    /// and must have run before [`RayTracer::pixel_color`] is called
    /// directly.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        let viewport_height = 2.0;
        let camera = Camera {
            focal_length: 1.0,
            viewport_height,
            // Scale by the real aspect ratio of the pixel grid, which the
            // integer height rounding may have nudged away from the request.
            viewport_width: viewport_height * self.image_width as f64 / self.image_height as f64,
            center: Point::ZERO,
        };
        debug!("camera: {camera:?}");

        self.pixel_delta_u = camera.viewport_u() / self.image_width as f64;
        self.pixel_delta_v = camera.viewport_v() / self.image_height as f64;
        debug!(
            "pixel deltas: {} {}",
            self.pixel_delta_u, self.pixel_delta_v
        );

        self.pixel00_loc =
            camera.viewport_upper_left() + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
        debug!("pixel (0,0) center: {}", self.pixel00_loc);

        self.camera = camera;
        self.initialized = true;
    }

    /// Ray from the camera center through a jittered point inside pixel
    /// (i, j). The uniform offset in [-0.5, 0.5]^2 box-filters the pixel.
    fn sample_ray(&self, i: u32, j: u32) -> Ray {
        let offset_x = random::random_f64() - 0.5;
        let offset_y = random::random_f64() - 0.5;
        let pixel_sample = self.pixel00_loc
            + (i as f64 + offset_x) * self.pixel_delta_u
            + (j as f64 + offset_y) * self.pixel_delta_v;

        Ray::new(self.camera.center, pixel_sample - self.camera.center)
    }

    /// Recursive Monte-Carlo estimate of the light arriving along `ray`.
    ///
    /// One path per invocation: a scattered ray recurses with one less
    /// bounce and scales the result by the material's attenuation, an
    /// absorbed ray contributes black, and a miss samples the sky gradient.
    fn ray_color(&self, ray: &Ray, world: &World, depth: u32) -> Result<Color> {
        // Bounce limit reached: the path gathers no more light.
        if depth == 0 {
            return Ok(BLACK);
        }

        if let Some(record) = world.hit(ray, Interval::new(HIT_EPSILON, f64::INFINITY)) {
            return match record.material.scatter(ray, &record)? {
                Some(scattered) => Ok(record.material.attenuation()
                    * self.ray_color(&scattered, world, depth - 1)?),
                None => Ok(BLACK),
            };
        }

        // Miss: vertical white-to-blue gradient, the scene's only light.
        let unit_direction = unit_vector(ray.direction)?;
        let a = 0.5 * (unit_direction.y + 1.0);
        Ok((1.0 - a) * WHITE + a * SKY_BLUE)
    }

    /// Averaged Monte-Carlo estimate for pixel (i, j).
    ///
    /// Free of I/O and shared mutable state, so any driver, including a
    /// row-parallel one, can call it directly. Requires
    /// [`RayTracer::initialize`] to have run.
    pub fn pixel_color(&self, world: &World, i: u32, j: u32) -> Result<Color> {
        let mut color = BLACK;
        for _ in 0..self.samples_per_pixel {
            let ray = self.sample_ray(i, j);
            color += self.ray_color(&ray, world, self.max_depth)?;
        }
        Ok(color / self.samples_per_pixel as f64)
    }

    /// Render the scene into `output` as a plain-text PPM image.
    ///
    /// Rows are written top to bottom, pixels left to right within a row.
    pub fn render<W: Write>(&mut self, world: &World, output: &mut W) -> Result<()> {
        self.initialize();

        info!(
            "Rendering {}x{} pixels, {} samples per pixel, depth {}",
            self.image_width, self.image_height, self.samples_per_pixel, self.max_depth
        );
        let generation_start = std::time::Instant::now();
        let progress = ProgressBar::new(u64::from(self.image_width) * u64::from(self.image_height));
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        let result = output_ppm(output, self.image_width, self.image_height, |i, j| {
            let color = self.pixel_color(world, i, j)?;
            progress.inc(1);
            Ok(color)
        });

        progress.finish();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        result
    }
}
