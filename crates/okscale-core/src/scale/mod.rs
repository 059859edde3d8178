//! Color scale generation.
//!
//! Each step is resolved on its own:
//!
//! ```text
//! step ──> contrast = exp(3.04·step/1000)
//!            │
//!            v
//!          Y = inverse_contrast(contrast, 1.0)      (against white)
//!            │
//!            v
//!          l = toe(Oklab L of D65 gray Y)
//!
//! step ──> h = hue_for_step(..)    s = chroma_for_step(..)
//!
//! Okhsl(h, s, l) ──> ColorConverter ──> DeviceColor
//! ```
//!
//! No step reads another step's result, so the order of evaluation does not
//! matter and [`generate_step`] gives the same color as the full run.

mod color_scale;
mod error;
mod options;
mod step;

pub use color_scale::ColorScale;
pub use error::ScaleError;
pub use options::ScaleOptions;
pub use step::{ScaleStep, DEFAULT_STEPS};

use crate::color::{ColorConverter, DeviceColor, Okhsl, OkhslConverter};
use crate::contrast::{inverse_contrast_from_white, step_to_contrast};
use crate::curves::{chroma_for_step, hue_for_step, CurveError};
use crate::lightness::luminance_to_perceptual_lightness;

/// Generate a scale with the built-in Okhsl converter.
///
/// # Errors
///
/// [`ScaleError::InvalidOptions`] before any work if the options are out of
/// range; [`ScaleError::LuminanceUnsolvable`] if a step's contrast cannot be
/// inverted. Either way no partial scale is returned.
///
/// # Example
///
/// ```
/// use okscale_core::{generate, ScaleOptions};
///
/// let scale = generate(&ScaleOptions::new(0.0).steps([0, 500, 1000])).unwrap();
/// assert_eq!(scale.get(0).unwrap().to_hex(), "#ffffff");
/// assert!(scale.get(1000).unwrap().is_gray());
/// ```
pub fn generate(options: &ScaleOptions) -> Result<ColorScale, ScaleError> {
    generate_with(options, &OkhslConverter)
}

/// Generate a scale, converting through `converter`.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_with<C>(options: &ScaleOptions, converter: &C) -> Result<ColorScale, ScaleError>
where
    C: ColorConverter + ?Sized,
{
    let steps = options.validate()?;

    tracing::debug!(
        base_hue = options.base_hue,
        min_chroma = options.min_chroma,
        max_chroma = options.max_chroma,
        hue_shift = options.hue_shift,
        steps = steps.len(),
        "Generating color scale"
    );

    let mut scale = ColorScale::default();
    for step in steps {
        let hsl = perceptual_color(options, step)?;
        scale.insert(step, converter.hsl_to_device(hsl));
    }
    Ok(scale)
}

/// Resolve a single step through `converter`.
///
/// Hue and chroma bounds are checked here as well, since this entry point
/// skips [`ScaleOptions::validate`]; `options.steps` is ignored.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_step<C>(
    options: &ScaleOptions,
    step: ScaleStep,
    converter: &C,
) -> Result<DeviceColor, ScaleError>
where
    C: ColorConverter + ?Sized,
{
    options.validate_ranges()?;
    Ok(converter.hsl_to_device(perceptual_color(options, step)?))
}

/// The Okhsl color of `step`, before device conversion.
///
/// Assumes hue and chroma bounds were already validated; a curve failure
/// here is reported as [`ScaleError::Internal`].
fn perceptual_color(options: &ScaleOptions, step: ScaleStep) -> Result<Okhsl, ScaleError> {
    let contrast = step_to_contrast(step.as_f64());
    let luminance = inverse_contrast_from_white(contrast).map_err(|source| {
        ScaleError::LuminanceUnsolvable {
            step,
            contrast,
            source,
        }
    })?;
    let lightness = luminance_to_perceptual_lightness(luminance);

    let internal = |e: CurveError| ScaleError::Internal(format!("curve failed at step {step}: {e}"));
    let hue = hue_for_step(step.as_f64(), options.base_hue, options.hue_shift).map_err(internal)?;
    let chroma = chroma_for_step(step.as_f64(), options.min_chroma, options.max_chroma)
        .map_err(internal)?;

    tracing::trace!(
        step = step.value(),
        contrast,
        luminance,
        lightness,
        hue,
        chroma,
        "Resolved step"
    );

    Ok(Okhsl::new(hue, chroma, lightness))
}
