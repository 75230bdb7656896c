use std::fs::File;
use std::io::{self, BufWriter, Write};

use clap::Parser;
use glam::DVec3;
use log::{error, info};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use lumenpath::error::Result;
use lumenpath::material::Material;
use lumenpath::random;
use lumenpath::sphere::Sphere;
use lumenpath::tracer::RayTracer;
use lumenpath::vector::Color;
use lumenpath::world::World;

/// Demo scene: a large diffuse ground sphere, a matte sphere in the
/// center, a glass sphere on the left and a fuzzy metal sphere on the
/// right.
fn create_scene() -> Result<World> {
    let mut world = World::new();

    let ground = Material::Lambertian {
        albedo: Color::new(0.8, 0.8, 0.0),
    };
    world.add(Box::new(Sphere::new(
        DVec3::new(0.0, -100.5, -1.0),
        100.0,
        ground,
    )?));

    let center = Material::Lambertian {
        albedo: Color::new(0.1, 0.2, 0.5),
    };
    world.add(Box::new(Sphere::new(
        DVec3::new(0.0, 0.0, -1.2),
        0.5,
        center,
    )?));

    let left = Material::Dielectric {
        attenuation: Color::new(1.0, 1.0, 1.0),
        refraction_index: 1.5,
    };
    world.add(Box::new(Sphere::new(DVec3::new(-1.0, 0.0, -1.0), 0.5, left)?));

    let right = Material::metal(Color::new(0.8, 0.6, 0.2), 0.3)?;
    world.add(Box::new(Sphere::new(DVec3::new(1.0, 0.0, -1.0), 0.5, right)?));

    Ok(world)
}

fn run(args: &Args) -> Result<()> {
    if let Some(seed) = args.seed {
        info!("Sampling with fixed seed {seed}");
        random::reseed(seed);
    }

    let world = create_scene()?;
    info!("Scene contains {} objects", world.len());

    let mut tracer = RayTracer::new(
        args.aspect_ratio,
        args.width,
        args.samples_per_pixel,
        args.max_depth,
    )?;
    info!(
        "Image resolution: {}x{}, samples per pixel: {}",
        tracer.image_width, tracer.image_height, tracer.samples_per_pixel
    );

    if args.output == "-" {
        let stdout = io::stdout();
        let mut output = BufWriter::new(stdout.lock());
        tracer.render(&world, &mut output)?;
        output.flush()?;
    } else {
        let mut output = BufWriter::new(File::create(&args.output)?);
        tracer.render(&world, &mut output)?;
        output.flush()?;
        info!("Image saved as {}", args.output);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.into());

    // Log application startup with version information
    info!(
        "Lumenpath - Git Version {} ({})",
        env!("GIT_HASH"),
        env!("GIT_DATE")
    );

    if let Err(e) = run(&args) {
        error!("Rendering failed: {e}");
        std::process::exit(1);
    }
}
