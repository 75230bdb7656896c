use clap::{Parser, ValueEnum};
use log::LevelFilter;

use lumenpath::tracer::DEFAULT_IMAGE_WIDTH;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "lumenpath")]
#[command(about = "A recursive Monte-Carlo sphere ray tracer")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_IMAGE_WIDTH, help = "Image width in pixels")]
    pub width: u32,

    /// Width over height of the rendered image
    #[arg(long, default_value_t = 16.0 / 9.0, help = "Width over height of the rendered image")]
    pub aspect_ratio: f64,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "100", help = "Number of samples per pixel")]
    pub samples_per_pixel: u32,

    /// Maximum number of ray bounces
    #[arg(long, default_value = "50", help = "Maximum number of ray bounces")]
    pub max_depth: u32,

    /// Seed for the sampling stream (fixed seeds reproduce images exactly)
    #[arg(long, help = "Seed for the sampling stream (fixed seeds reproduce images exactly)")]
    pub seed: Option<u64>,

    /// Output file path (plain-text PPM), or - for stdout
    #[arg(
        short,
        long,
        default_value = "render.ppm",
        help = "Output file path (plain-text PPM), or - for stdout"
    )]
    pub output: String,
}
