//! WCAG contrast model for the 0–1000 scale.
//!
//! A step maps to a target contrast against the scale's reference anchor by
//! `exp(3.04 · step / 1000)`. The growth constant makes any 500-step gap land
//! at `exp(1.52) ≈ 4.57`, just above the WCAG AA threshold for normal text.
//! [`inverse_contrast`] turns that ratio back into the luminance a step must
//! have.

use thiserror::Error;

use crate::color::DeviceColor;

/// Exponent of the step → contrast curve, per 1000 steps.
pub const CONTRAST_GROWTH: f64 = 3.04;

/// Largest possible WCAG contrast ratio (black on white).
pub const MAX_CONTRAST: f64 = 21.0;

/// Minimum WCAG AA contrast for normal text.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// Relative luminance separating light from dark references.
pub const LUMINANCE_MIDPOINT: f64 = 0.18;

/// Luminance offset WCAG adds to both sides of the ratio (viewing flare).
const FLARE: f64 = 0.05;

/// Contrast inversion was asked for a ratio or reference outside its domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("cannot solve luminance for contrast {contrast} against reference luminance {reference}")]
pub struct NotSolvable {
    /// Requested contrast ratio
    pub contrast: f64,
    /// Reference luminance the ratio was measured against
    pub reference: f64,
}

/// Contrast ratio a step should have against the reference anchor.
///
/// # Example
/// ```
/// use okscale_core::contrast::step_to_contrast;
/// assert_eq!(step_to_contrast(0.0), 1.0);
/// assert!(step_to_contrast(500.0) > 4.5);
/// ```
#[inline]
pub fn step_to_contrast(step: f64) -> f64 {
    (CONTRAST_GROWTH * step / 1000.0).exp()
}

/// Luminance that has `contrast` against `reference`.
///
/// A light reference (`Y > 0.18`) is solved towards a darker color, a dark
/// one towards a lighter color. The result is clamped to `0.0..=1.0`.
///
/// # Errors
///
/// [`NotSolvable`] when `contrast` is outside `1.0..=21.0` or `reference`
/// outside `0.0..=1.0` (NaN included).
pub fn inverse_contrast(contrast: f64, reference: f64) -> Result<f64, NotSolvable> {
    if !(1.0..=MAX_CONTRAST).contains(&contrast) || !(0.0..=1.0).contains(&reference) {
        return Err(NotSolvable {
            contrast,
            reference,
        });
    }

    let y = if reference > LUMINANCE_MIDPOINT {
        (reference + FLARE) / contrast - FLARE
    } else {
        contrast * (reference + FLARE) - FLARE
    };

    Ok(y.clamp(0.0, 1.0))
}

/// [`inverse_contrast`] against pure white, the anchor every scale uses.
#[inline]
pub fn inverse_contrast_from_white(contrast: f64) -> Result<f64, NotSolvable> {
    inverse_contrast(contrast, 1.0)
}

/// WCAG 2.x relative luminance of a device color.
#[inline]
pub fn relative_luminance(color: DeviceColor) -> f64 {
    color.luminance()
}

/// WCAG 2.x contrast ratio between two device colors, in `1.0..=21.0`.
///
/// Symmetric in its arguments.
pub fn contrast_ratio(a: DeviceColor, b: DeviceColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + FLARE) / (darker + FLARE)
}
