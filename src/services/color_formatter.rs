//! Formatting normalized colors back to integer channels and CSS text.

use crate::models::{Notation, Rgb};

/// Round each channel to 0..=255.
///
/// Values outside 0.0..=1.0 are clamped after rounding, so a translator
/// that overshoots the gamut still yields valid CSS.
pub fn to_int_channels(rgb: Rgb) -> (u8, u8, u8) {
    let channel = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(rgb.r), channel(rgb.g), channel(rgb.b))
}

/// `#rrggbb`, lowercase.
pub fn to_hex(rgb: Rgb) -> String {
    let (r, g, b) = to_int_channels(rgb);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// `rgb(r, g, b)`.
pub fn to_decimal(rgb: Rgb) -> String {
    let (r, g, b) = to_int_channels(rgb);
    format!("rgb({r}, {g}, {b})")
}

/// Write `rgb` in the given notation.
pub fn format_color(rgb: Rgb, notation: Notation) -> String {
    match notation {
        Notation::Hex => to_hex(rgb),
        Notation::Decimal => to_decimal(rgb),
    }
}
