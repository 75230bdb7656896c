//! PPM color encoding and image emission.
//!
//! Converts linear per-pixel colors to display values and streams a
//! plain-text PPM (P3) image to any writer.

use std::io::Write;

use crate::error::Result;
use crate::interval::Interval;
use crate::vector::Color;

/// Channel range kept after gamma correction. The top end stays just below
/// 1 so scaling by 256 lands inside [0, 255] after truncation.
const INTENSITY: Interval = Interval::new(0.0, 0.9999);

/// Approximate gamma-2 display encoding.
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Encode one linear color as an "r g b" triplet line.
pub fn write_color<W: Write>(output: &mut W, color: Color) -> Result<()> {
    debug_assert!(
        color.is_finite(),
        "non-finite color reached the encoder: {color}"
    );

    let r = linear_to_gamma(color.x);
    let g = linear_to_gamma(color.y);
    let b = linear_to_gamma(color.z);

    let r = (256.0 * INTENSITY.clamp(r)) as u32;
    let g = (256.0 * INTENSITY.clamp(g)) as u32;
    let b = (256.0 * INTENSITY.clamp(b)) as u32;

    writeln!(output, "{r} {g} {b}")?;
    Ok(())
}

/// Write a complete P3 image, computing every pixel with `pixel`.
///
/// Rows are emitted top to bottom, pixels left to right within a row, one
/// triplet line per pixel.
pub fn output_ppm<W, F>(output: &mut W, width: u32, height: u32, mut pixel: F) -> Result<()>
where
    W: Write,
    F: FnMut(u32, u32) -> Result<Color>,
{
    writeln!(output, "P3")?;
    writeln!(output, "{width} {height}")?;
    writeln!(output, "255")?;

    for j in 0..height {
        for i in 0..width {
            write_color(output, pixel(i, j)?)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn encoded(color: Color) -> String {
        let mut out = Vec::new();
        write_color(&mut out, color).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn black_encodes_to_zero() {
        assert_eq!(encoded(DVec3::ZERO), "0 0 0\n");
    }

    #[test]
    fn white_encodes_to_full_scale() {
        assert_eq!(encoded(DVec3::ONE), "255 255 255\n");
    }

    #[test]
    fn channels_pass_through_gamma_before_scaling() {
        // sqrt(0.25) = 0.5, scaled and truncated to 128.
        assert_eq!(encoded(DVec3::new(0.25, 0.0, 1.0)), "128 0 255\n");
    }

    #[test]
    fn negative_channels_clamp_to_zero() {
        assert_eq!(encoded(DVec3::new(-1.0, 0.0, 2.0)), "0 0 255\n");
    }

    #[test]
    fn linear_to_gamma_is_sqrt_above_zero() {
        assert_eq!(linear_to_gamma(0.25), 0.5);
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-3.0), 0.0);
    }

    #[test]
    fn ppm_header_and_pixel_count() {
        let mut out = Vec::new();
        output_ppm(&mut out, 2, 1, |_, _| Ok(DVec3::ZERO)).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "P3\n2 1\n255\n0 0 0\n0 0 0\n"
        );
    }

    #[test]
    fn ppm_emits_rows_top_first() {
        let mut out = Vec::new();
        output_ppm(&mut out, 3, 2, |i, j| {
            Ok(DVec3::new(0.25 * i as f64, 0.25 * j as f64, 0.0))
        })
        .unwrap();

        let expected = "P3\n3 2\n255\n\
                        0 0 0\n128 0 0\n181 0 0\n\
                        0 128 0\n128 128 0\n181 128 0\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
