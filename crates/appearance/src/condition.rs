//! Viewing conditions a color can be translated between.

use crate::color::{LinearRgb, Oklab, Srgb};

/// The surround a color is viewed against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewingCondition {
    /// Background color the swatch sits on
    pub background: Srgb,
}

/// White page background.
pub const LIGHT_BG: ViewingCondition = ViewingCondition {
    background: Srgb::WHITE,
};

/// Black page background.
pub const DARK_BG: ViewingCondition = ViewingCondition {
    background: Srgb::BLACK,
};

impl ViewingCondition {
    pub const fn new(background: Srgb) -> Self {
        Self { background }
    }

    /// Perceptual lightness (Oklab L) of the background.
    pub fn lightness(&self) -> f64 {
        Oklab::from(LinearRgb::from(self.background)).l
    }
}
