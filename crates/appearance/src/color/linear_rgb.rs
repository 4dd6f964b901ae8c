//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! Oklab is defined on top of it, so every perceptual conversion passes here.

use super::srgb::{srgb_to_linear, Srgb};

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0, but may exceed this range
/// for out-of-gamut intermediate results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Decode sRGB gamma to linear light.
    fn from(srgb: Srgb) -> Self {
        let decode = |c: f64| c.signum() * srgb_to_linear(c.abs());
        Self {
            r: decode(srgb.r),
            g: decode(srgb.g),
            b: decode(srgb.b),
        }
    }
}
