//! appearance: perceptual color translation between light and dark backgrounds
//!
//! Colors are translated in Oklch (the polar form of Oklab). A color's
//! lightness contrast against the source background is carried over to the
//! destination background, so a dark gray that reads as "strong" on white
//! becomes a light gray that reads equally strong on black.
//!
//! # Quick Start
//!
//! ```
//! use appearance::{translate, Srgb, DARK_BG, LIGHT_BG};
//!
//! let palette = [Srgb::from_u8(30, 30, 30), Srgb::from_u8(200, 40, 40)];
//! let dark = translate(&palette, LIGHT_BG, DARK_BG, 1.0, 1.0);
//! assert_eq!(dark.len(), palette.len());
//! ```
//!
//! # Tuning
//!
//! - `j_factor` scales lightness contrast (1.0 = mirror it exactly)
//! - `m_factor` scales colorfulness (1.0 = keep chroma)
//!
//! The function is pure and batch oriented: N colors in, N colors out,
//! same order, no state.

mod color;
mod condition;
mod translate;

pub use color::{LinearRgb, Oklab, Oklch, Srgb};
pub use condition::{ViewingCondition, DARK_BG, LIGHT_BG};
pub use translate::translate;
