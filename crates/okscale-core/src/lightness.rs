//! Luminance → Okhsl lightness.
//!
//! The target luminance of a step is a D65 gray luminance. It is expanded to
//! XYZ, taken through Oklab for its lightness component only, and then
//! passed through the Okhsl toe so the result is the `l` an
//! [`Okhsl`](crate::Okhsl) color needs for that luminance.

use crate::color::{toe, Oklab, Xyz};

/// Okhsl lightness of a D65 gray with relative luminance `y`.
///
/// `y` must be in `0.0..=1.0`; callers validate before reaching here.
///
/// # Example
/// ```
/// use okscale_core::lightness::luminance_to_perceptual_lightness;
/// let white = luminance_to_perceptual_lightness(1.0);
/// assert!((white - 1.0).abs() < 1e-3);
/// ```
pub fn luminance_to_perceptual_lightness(y: f64) -> f64 {
    debug_assert!(
        (0.0..=1.0).contains(&y),
        "luminance_to_perceptual_lightness: input {y} out of range 0.0..=1.0"
    );

    let lab = Oklab::from(Xyz::from_luminance(y));
    toe(lab.l)
}
