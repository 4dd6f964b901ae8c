//! Oklch: polar form of Oklab.
//!
//! Lightness and chroma are the two axes the translation scales, so the
//! translation works in this representation and returns through Oklab.

use super::oklab::Oklab;

/// Oklch: Polar form of Oklab (Lightness, Chroma, Hue).
///
/// For achromatic colors hue is undefined; the conversion sets it to
/// `atan2(0, 0) = 0.0`, which is harmless since chroma is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness: same as Oklab L
    pub l: f64,
    /// Chroma: distance from neutral axis (0.0 = gray)
    pub c: f64,
    /// Hue: angle in radians
    pub h: f64,
}

impl Oklch {
    /// Same lightness and hue with a different chroma (never negative).
    #[inline]
    pub fn with_chroma(self, c: f64) -> Self {
        Self {
            c: c.max(0.0),
            ..self
        }
    }
}

impl From<Oklab> for Oklch {
    fn from(lab: Oklab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let h = lab.b.atan2(lab.a);
        Self { l: lab.l, c, h }
    }
}

impl From<Oklch> for Oklab {
    fn from(lch: Oklch) -> Self {
        Self::new(lch.l, lch.c * lch.h.cos(), lch.c * lch.h.sin())
    }
}
