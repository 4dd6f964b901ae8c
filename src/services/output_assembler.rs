//! Builds the three row-aligned views of a translation result.

use std::fmt::Write;

use crate::models::TranslationResult;
use crate::services::color_formatter::{format_color, to_int_channels};

/// Header row of the CSV table.
pub const CSV_HEADER: &str = "r_src,g_src,b_src,r_dst,g_dst,b_dst";

/// Source and destination written in the source's notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPair {
    pub source: String,
    pub destination: String,
}

/// Everything the presentation layer needs for one translated batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutput {
    /// Border color behind the source swatches
    pub left_bg: &'static str,
    /// Border color behind the destination swatches
    pub right_bg: &'static str,
    pub pairs: Vec<DisplayPair>,
    /// Destination colors only, one per line
    pub dump: String,
    /// Integer channels of source and destination, one row per color
    pub csv: String,
}

impl TranslationOutput {
    pub fn assemble(result: &TranslationResult) -> Self {
        let (left_bg, right_bg) = result.direction.backgrounds();

        let mut pairs = Vec::with_capacity(result.colors.len());
        let mut dump = String::new();
        let mut csv = format!("{CSV_HEADER}\n");

        for color in &result.colors {
            let notation = color.source.notation;
            let pair = DisplayPair {
                source: format_color(color.source.rgb, notation),
                destination: format_color(color.destination, notation),
            };

            dump.push_str(&pair.destination);
            dump.push('\n');

            let (rs, gs, bs) = to_int_channels(color.source.rgb);
            let (rd, gd, bd) = to_int_channels(color.destination);
            // Writing to a String cannot fail
            let _ = writeln!(csv, "{rs},{gs},{bs},{rd},{gd},{bd}");

            pairs.push(pair);
        }

        Self {
            left_bg,
            right_bg,
            pairs,
            dump,
            csv,
        }
    }
}
