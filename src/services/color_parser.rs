//! Parsing of single color tokens in hex or CSS decimal notation.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::TranslateError;
use crate::models::{ColorEntry, Notation, Rgb};

/// First run of digits and decimal points in a decimal channel.
static NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn number_re() -> &'static Regex {
    NUMBER_RE.get_or_init(|| Regex::new(r"[0-9.]+").expect("valid number pattern"))
}

/// Parse a color token into normalized RGB and the notation it was written in.
///
/// A token without commas is hex (`#rgb`, `#rrggbb`, `#` optional). A token
/// with exactly three comma-separated parts is decimal; each part contributes
/// its first number, so `rgb(1, 2, 3)` and `1,2,3` are equivalent.
pub fn parse_color(text: &str) -> Result<(Rgb, Notation), TranslateError> {
    let parts: Vec<&str> = text.split(',').collect();
    match parts.as_slice() {
        &[hex] => parse_hex(hex.trim())
            .map(|rgb| (rgb, Notation::Hex))
            .ok_or_else(|| parse_error(text)),
        &[r, g, b] => {
            let channel =
                |part: &str| parse_decimal_channel(part).ok_or_else(|| parse_error(text));
            let rgb = Rgb::new(channel(r)?, channel(g)?, channel(b)?);
            Ok((rgb, Notation::Decimal))
        }
        _ => Err(parse_error(text)),
    }
}

impl ColorEntry {
    /// Parse one input line, keeping the text and its notation together.
    pub fn parse(raw_text: &str) -> Result<Self, TranslateError> {
        let (rgb, notation) = parse_color(raw_text)?;
        Ok(Self {
            raw_text: raw_text.to_string(),
            notation,
            rgb,
        })
    }
}

fn parse_error(text: &str) -> TranslateError {
    TranslateError::Parse(text.trim().to_string())
}

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expanded;
    let digits = match s.len() {
        3 => {
            expanded = s.chars().flat_map(|c| [c, c]).collect::<String>();
            expanded.as_str()
        }
        6 => s,
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::from_u8(channel(0)?, channel(2)?, channel(4)?))
}

/// Channels above 255 are rejected so every parsed component stays in 0..=1.
fn parse_decimal_channel(part: &str) -> Option<f64> {
    let value: f64 = number_re().find(part)?.as_str().parse().ok()?;
    (value <= 255.0).then_some(value / 255.0)
}
