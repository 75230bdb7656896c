//! Error types for scene configuration and rendering.
//!
//! Every variant is fatal to the current render: configuration problems are
//! rejected when a scene or tracer is constructed, and degenerate geometry
//! fails as soon as the offending value is computed, before a non-finite
//! result can spread through the image.

use std::fmt;
use std::io;

/// Errors surfaced while configuring or running a render.
#[derive(Debug)]
pub enum RenderError {
    /// Invalid render or scene configuration.
    Config(String),
    /// A unit vector was requested from a zero-length vector.
    DegenerateGeometry(String),
    /// The output sink failed while the image was being written.
    Io(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Config(reason) => write!(f, "invalid configuration: {reason}"),
            RenderError::DegenerateGeometry(reason) => {
                write!(f, "degenerate geometry: {reason}")
            }
            RenderError::Io(err) => write!(f, "output error: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err)
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = RenderError> = std::result::Result<T, E>;
