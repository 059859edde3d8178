//! Per-step hue and chroma curves.
//!
//! - Hue: a Bezold–Brücke correction adds up to 5° at step 0, falling
//!   linearly to nothing at step 1000. Grays (base hue 0) are never shifted.
//! - Chroma: a downward parabola in `t = step / 1000` that equals the minimum
//!   at both ends and the maximum at step 500.

use thiserror::Error;

/// Largest hue offset, applied at step 0.
pub const MAX_HUE_SHIFT: f64 = 5.0;

/// Curve input outside its domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CurveError {
    /// Step does not normalize into `0.0..=1.0`
    #[error("step {0} is outside 0..=1000")]
    StepOutOfRange(f64),

    /// Hue outside `0.0..=360.0`
    #[error("hue {0} is outside 0..=360")]
    HueOutOfRange(f64),

    /// A chroma bound outside `0.0..=1.0`
    #[error("chroma {0} is outside 0..=1")]
    ChromaOutOfRange(f64),

    /// Minimum chroma above maximum chroma
    #[error("minimum chroma {min} exceeds maximum chroma {max}")]
    ChromaInverted {
        /// Minimum chroma
        min: f64,
        /// Maximum chroma
        max: f64,
    },
}

fn normalize_step(step: f64) -> Result<f64, CurveError> {
    let t = step / 1000.0;
    if (0.0..=1.0).contains(&t) {
        Ok(t)
    } else {
        Err(CurveError::StepOutOfRange(step))
    }
}

/// Hue of `step` for a scale built on `base_hue`.
///
/// Returns `base_hue` untouched when the shift is disabled or the base is 0.
/// Otherwise `base_hue + 5·(1 − step/1000)`, wrapped into `0.0..360.0`.
///
/// # Errors
///
/// [`CurveError::StepOutOfRange`] or [`CurveError::HueOutOfRange`].
///
/// # Example
/// ```
/// use okscale_core::curves::hue_for_step;
/// assert_eq!(hue_for_step(0.0, 250.0, true).unwrap(), 255.0);
/// assert_eq!(hue_for_step(1000.0, 250.0, true).unwrap(), 250.0);
/// assert_eq!(hue_for_step(0.0, 250.0, false).unwrap(), 250.0);
/// ```
pub fn hue_for_step(step: f64, base_hue: f64, enable_shift: bool) -> Result<f64, CurveError> {
    let t = normalize_step(step)?;
    if !(0.0..=360.0).contains(&base_hue) {
        return Err(CurveError::HueOutOfRange(base_hue));
    }

    if !enable_shift || base_hue == 0.0 {
        return Ok(base_hue);
    }

    let shifted = base_hue + MAX_HUE_SHIFT * (1.0 - t);
    Ok(if shifted >= 360.0 {
        shifted - 360.0
    } else {
        shifted
    })
}

/// Chroma of `step` between `min_chroma` and `max_chroma`.
///
/// `−4Δt² + 4Δt + min` with `Δ = max − min` and `t = step/1000`.
///
/// # Errors
///
/// [`CurveError::ChromaOutOfRange`], [`CurveError::ChromaInverted`] or
/// [`CurveError::StepOutOfRange`].
pub fn chroma_for_step(step: f64, min_chroma: f64, max_chroma: f64) -> Result<f64, CurveError> {
    for chroma in [min_chroma, max_chroma] {
        if !(0.0..=1.0).contains(&chroma) {
            return Err(CurveError::ChromaOutOfRange(chroma));
        }
    }
    if min_chroma > max_chroma {
        return Err(CurveError::ChromaInverted {
            min: min_chroma,
            max: max_chroma,
        });
    }
    let t = normalize_step(step)?;

    let delta = max_chroma - min_chroma;
    Ok(4.0 * delta * t * (1.0 - t) + min_chroma)
}
