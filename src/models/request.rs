use std::fmt;
use std::str::FromStr;

use crate::error::TranslateError;
use crate::models::{ColorEntry, Rgb};

/// Background polarity a color is viewed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundCondition {
    Light,
    Dark,
}

/// Which way a batch is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Colors designed for a light background, wanted on a dark one
    ToDark,
    /// Colors designed for a dark background, wanted on a light one
    ToLight,
}

impl Direction {
    /// (source, destination) background conditions.
    pub fn conditions(self) -> (BackgroundCondition, BackgroundCondition) {
        match self {
            Direction::ToDark => (BackgroundCondition::Light, BackgroundCondition::Dark),
            Direction::ToLight => (BackgroundCondition::Dark, BackgroundCondition::Light),
        }
    }

    /// (left, right) border colors for showing source and destination swatches.
    pub fn backgrounds(self) -> (&'static str, &'static str) {
        match self {
            Direction::ToDark => ("#fff", "#000"),
            Direction::ToLight => ("#000", "#fff"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::ToDark => "to_dark",
            Direction::ToLight => "to_light",
        }
    }
}

impl FromStr for Direction {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to_dark" => Ok(Direction::ToDark),
            "to_light" => Ok(Direction::ToLight),
            other => Err(TranslateError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A batch of colors to translate plus the tuning for this request.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub direction: Direction,
    /// Lightness contrast factor
    pub j_factor: f64,
    /// Colorfulness factor
    pub m_factor: f64,
    /// Raw multi-line input, one color per line
    pub colors: String,
}

impl TranslationRequest {
    /// Build a request from its wire form, resolving the direction name.
    pub fn new(
        direction: &str,
        j_factor: f64,
        m_factor: f64,
        colors: impl Into<String>,
    ) -> Result<Self, TranslateError> {
        Ok(Self {
            direction: direction.parse()?,
            j_factor,
            m_factor,
            colors: colors.into(),
        })
    }
}

/// A source entry paired with its translated color.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedColor {
    pub source: ColorEntry,
    pub destination: Rgb,
}

/// Ordered translation output, one row per non-blank input line.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    pub direction: Direction,
    pub colors: Vec<TranslatedColor>,
}
