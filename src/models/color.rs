/// A color with each channel normalized to 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create from 8-bit channel values.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    pub fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb> for appearance::Srgb {
    fn from(rgb: Rgb) -> Self {
        appearance::Srgb::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<appearance::Srgb> for Rgb {
    fn from(srgb: appearance::Srgb) -> Self {
        Rgb::new(srgb.r, srgb.g, srgb.b)
    }
}

/// Textual convention a color was written in.
///
/// Decided once when the text is parsed and carried with the entry, so
/// the output is always written the way the input was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    /// `#rrggbb` or `#rgb`
    Hex,
    /// `rgb(r, g, b)` or bare `r, g, b`
    Decimal,
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    /// The line as the user typed it
    pub raw_text: String,
    pub notation: Notation,
    pub rgb: Rgb,
}
