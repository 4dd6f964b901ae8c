//! Batch translation of colors between viewing conditions.

use crate::color::{LinearRgb, Oklab, Oklch, Srgb};
use crate::condition::ViewingCondition;

/// Slack allowed when testing whether a channel is inside 0.0..=1.0.
const GAMUT_EPSILON: f64 = 1e-7;

/// Bisection steps when reducing chroma into gamut.
const GAMUT_SEARCH_STEPS: usize = 32;

/// Translate a batch of colors from `src` to `dst` viewing conditions.
///
/// Lightness contrast against the source background is mirrored onto the
/// destination background and scaled by `j_factor`; chroma is scaled by
/// `m_factor`; hue is kept. Results that leave the sRGB gamut lose chroma
/// until they fit.
///
/// Returns exactly one output per input, in input order.
///
/// # Example
///
/// ```
/// use appearance::{translate, Srgb, DARK_BG, LIGHT_BG};
///
/// let out = translate(&[Srgb::BLACK], LIGHT_BG, DARK_BG, 1.0, 1.0);
/// assert_eq!(out.len(), 1);
/// assert!(out[0].r > 0.99);
/// ```
pub fn translate(
    colors: &[Srgb],
    src: ViewingCondition,
    dst: ViewingCondition,
    j_factor: f64,
    m_factor: f64,
) -> Vec<Srgb> {
    let src_l = src.lightness();
    let dst_l = dst.lightness();

    colors
        .iter()
        .map(|&color| {
            let lch = Oklch::from(Oklab::from(LinearRgb::from(color)));
            let l = (dst_l - (lch.l - src_l) * j_factor).clamp(0.0, 1.0);
            let target = Oklch {
                l,
                c: (lch.c * m_factor).max(0.0),
                h: lch.h,
            };
            map_into_gamut(target)
        })
        .collect()
}

fn to_srgb(lch: Oklch) -> Srgb {
    Srgb::from(LinearRgb::from(Oklab::from(lch)))
}

/// Reduce chroma at constant lightness and hue until the color fits sRGB.
fn map_into_gamut(lch: Oklch) -> Srgb {
    let direct = to_srgb(lch);
    if direct.in_gamut(GAMUT_EPSILON) {
        return direct.clamped();
    }

    // lo is always in gamut (chroma 0 is a gray at l in 0..=1)
    let (mut lo, mut hi) = (0.0, lch.c);
    for _ in 0..GAMUT_SEARCH_STEPS {
        let mid = (lo + hi) / 2.0;
        if to_srgb(lch.with_chroma(mid)).in_gamut(GAMUT_EPSILON) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    to_srgb(lch.with_chroma(lo)).clamped()
}
