//! Color types and conversions
//!
//! - **Srgb**: gamma-encoded values, as written in CSS. Use for I/O.
//! - **LinearRgb**: linear light intensity, the basis of Oklab.
//! - **Oklab** / **Oklch**: perceptual space the translation operates in.
//!
//! # Example
//!
//! ```
//! use appearance::{LinearRgb, Oklab, Srgb};
//!
//! let srgb = Srgb::from_u8(128, 64, 32);
//! let lab = Oklab::from(LinearRgb::from(srgb));
//! let back = Srgb::from(LinearRgb::from(lab));
//! assert!((back.r - srgb.r).abs() < 1e-6);
//! ```

mod linear_rgb;
mod oklab;
mod oklch;
mod srgb;

pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use oklch::Oklch;
pub use srgb::Srgb;
