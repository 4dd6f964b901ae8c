//! The color-appearance transform seam.
//!
//! The pipeline hands the whole batch to a [`Translator`] in one call. Any
//! implementation must return exactly one color per input, in input order,
//! and keep no state between calls.

use appearance::{Srgb, ViewingCondition, DARK_BG, LIGHT_BG};

use crate::models::{BackgroundCondition, Rgb};

/// Batch color translation between background conditions.
pub trait Translator: Send + Sync {
    fn translate(
        &self,
        colors: &[Rgb],
        source: BackgroundCondition,
        destination: BackgroundCondition,
        j_factor: f64,
        m_factor: f64,
    ) -> Vec<Rgb>;
}

/// Perceptual translation backed by the `appearance` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamTranslator;

impl CamTranslator {
    fn condition(background: BackgroundCondition) -> ViewingCondition {
        match background {
            BackgroundCondition::Light => LIGHT_BG,
            BackgroundCondition::Dark => DARK_BG,
        }
    }
}

impl Translator for CamTranslator {
    fn translate(
        &self,
        colors: &[Rgb],
        source: BackgroundCondition,
        destination: BackgroundCondition,
        j_factor: f64,
        m_factor: f64,
    ) -> Vec<Rgb> {
        let input: Vec<Srgb> = colors.iter().copied().map(Srgb::from).collect();
        appearance::translate(
            &input,
            Self::condition(source),
            Self::condition(destination),
            j_factor,
            m_factor,
        )
        .into_iter()
        .map(Rgb::from)
        .collect()
    }
}

/// Returns every color unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(
        &self,
        colors: &[Rgb],
        _source: BackgroundCondition,
        _destination: BackgroundCondition,
        _j_factor: f64,
        _m_factor: f64,
    ) -> Vec<Rgb> {
        colors.to_vec()
    }
}
