//! sRGB color type
//!
//! sRGB is the gamma-encoded space that CSS colors are written in.

use super::linear_rgb::LinearRgb;

/// IEC 61966-2-1 transfer function: sRGB to linear.
#[inline]
pub(crate) fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 transfer function: linear to sRGB.
#[inline]
pub(crate) fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// A color in sRGB color space.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-corrected, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-corrected, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-corrected, 0.0..=1.0)
    pub b: f64,
}

impl Srgb {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit unsigned integer values.
    ///
    /// # Example
    /// ```
    /// use appearance::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Whether every channel lies in 0.0..=1.0 (within `eps`).
    #[inline]
    pub fn in_gamut(self, eps: f64) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|&c| c >= -eps && c <= 1.0 + eps)
    }

    /// Clamp every channel into 0.0..=1.0.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }
}

impl From<LinearRgb> for Srgb {
    /// Gamma-encode linear light.
    ///
    /// Negative linear values (out of gamut) are mirrored through the
    /// transfer curve so the sign survives for gamut checks.
    fn from(linear: LinearRgb) -> Self {
        let encode = |c: f64| c.signum() * linear_to_srgb(c.abs());
        Self {
            r: encode(linear.r),
            g: encode(linear.g),
            b: encode(linear.b),
        }
    }
}
