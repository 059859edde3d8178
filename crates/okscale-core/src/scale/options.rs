//! Scale options and their validation.

use std::collections::BTreeSet;

use super::error::ScaleError;
use super::step::{ScaleStep, DEFAULT_STEPS};
use crate::curves::CurveError;

/// What to generate: a base hue, a chroma range and the steps to resolve.
///
/// # Defaults
///
/// - Base hue: `0.0`
/// - Chroma: `0.0..=0.0`
/// - Steps: [`DEFAULT_STEPS`]
/// - Hue shift: enabled
///
/// Steps are kept as raw `f64` so that a request such as `500.5` reaches
/// validation and is rejected there rather than silently truncated.
///
/// # Example
///
/// ```
/// use okscale_core::ScaleOptions;
///
/// let options = ScaleOptions::new(250.0)
///     .chroma(0.1, 0.8)
///     .steps([0, 500, 1000])
///     .hue_shift(false);
/// assert_eq!(options.steps, vec![0.0, 500.0, 1000.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleOptions {
    /// Base hue in degrees, `0.0..=360.0`. A base of `0.0` is never shifted.
    pub base_hue: f64,

    /// Chroma (Okhsl saturation) at both ends of the scale.
    pub min_chroma: f64,

    /// Chroma at step 500.
    pub max_chroma: f64,

    /// Requested steps, distinct integers in `0..=1000`.
    pub steps: Vec<f64>,

    /// Apply the Bezold–Brücke hue correction.
    ///
    /// Default: `true`
    pub hue_shift: bool,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            base_hue: 0.0,
            min_chroma: 0.0,
            max_chroma: 0.0,
            steps: DEFAULT_STEPS.iter().map(|&s| f64::from(s)).collect(),
            hue_shift: true,
        }
    }
}

impl ScaleOptions {
    /// Options for `base_hue` with every other field at its default.
    #[inline]
    pub fn new(base_hue: f64) -> Self {
        Self {
            base_hue,
            ..Self::default()
        }
    }

    /// Set the chroma range.
    #[inline]
    pub fn chroma(mut self, min: f64, max: f64) -> Self {
        self.min_chroma = min;
        self.max_chroma = max;
        self
    }

    /// Set the requested steps from integers.
    pub fn steps(mut self, steps: impl IntoIterator<Item = u16>) -> Self {
        self.steps = steps.into_iter().map(f64::from).collect();
        self
    }

    /// Set the requested steps from raw values, as read from a config file.
    pub fn raw_steps(mut self, steps: impl IntoIterator<Item = f64>) -> Self {
        self.steps = steps.into_iter().collect();
        self
    }

    /// Enable or disable the hue shift.
    #[inline]
    pub fn hue_shift(mut self, enabled: bool) -> Self {
        self.hue_shift = enabled;
        self
    }

    /// Check hue and chroma bounds.
    pub(crate) fn validate_ranges(&self) -> Result<(), ScaleError> {
        if !(0.0..=360.0).contains(&self.base_hue) {
            return Err(ScaleError::invalid(
                CurveError::HueOutOfRange(self.base_hue).to_string(),
            ));
        }
        for chroma in [self.min_chroma, self.max_chroma] {
            if !(0.0..=1.0).contains(&chroma) {
                return Err(ScaleError::invalid(
                    CurveError::ChromaOutOfRange(chroma).to_string(),
                ));
            }
        }
        if self.min_chroma > self.max_chroma {
            return Err(ScaleError::invalid(
                CurveError::ChromaInverted {
                    min: self.min_chroma,
                    max: self.max_chroma,
                }
                .to_string(),
            ));
        }
        Ok(())
    }

    /// Validate every field and return the steps in request order.
    ///
    /// # Errors
    ///
    /// [`ScaleError::InvalidOptions`] naming the first problem found.
    pub fn validate(&self) -> Result<Vec<ScaleStep>, ScaleError> {
        self.validate_ranges()?;

        if self.steps.is_empty() {
            return Err(ScaleError::invalid("no steps requested"));
        }

        let mut seen = BTreeSet::new();
        let mut steps = Vec::with_capacity(self.steps.len());
        for &raw in &self.steps {
            let step = ScaleStep::from_f64(raw).ok_or_else(|| {
                if raw.is_finite() && raw.fract() != 0.0 {
                    ScaleError::invalid(format!("step {raw} is not an integer"))
                } else {
                    ScaleError::invalid(format!("step {raw} is outside 0..=1000"))
                }
            })?;
            if !seen.insert(step) {
                return Err(ScaleError::invalid(format!(
                    "step {step} is requested more than once"
                )));
            }
            steps.push(step);
        }
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reason(err: ScaleError) -> String {
        match err {
            ScaleError::InvalidOptions { reason } => reason,
            other => panic!("expected InvalidOptions, got {other:?}"),
        }
    }

    #[test]
    fn test_default_values() {
        let opts = ScaleOptions::default();
        assert_eq!(opts.base_hue, 0.0);
        assert_eq!(opts.min_chroma, 0.0);
        assert_eq!(opts.max_chroma, 0.0);
        assert_eq!(opts.steps.len(), DEFAULT_STEPS.len());
        assert!(opts.hue_shift, "hue_shift should default to true");
    }

    #[test]
    fn test_valid_options_keep_request_order() {
        let steps = ScaleOptions::new(120.0)
            .chroma(0.2, 0.4)
            .steps([700, 0, 300])
            .validate()
            .unwrap();
        let values: Vec<u16> = steps.into_iter().map(ScaleStep::value).collect();
        assert_eq!(values, vec![700, 0, 300]);
    }

    #[test]
    fn test_rejects_hue() {
        let err = ScaleOptions::new(361.0).validate().unwrap_err();
        assert_eq!(reason(err), "hue 361 is outside 0..=360");

        assert!(ScaleOptions::new(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_chroma() {
        let err = ScaleOptions::new(10.0).chroma(0.6, 0.3).validate().unwrap_err();
        assert_eq!(reason(err), "minimum chroma 0.6 exceeds maximum chroma 0.3");
    }

    #[test]
    fn test_rejects_chroma_out_of_range() {
        let err = ScaleOptions::new(10.0).chroma(0.0, 1.5).validate().unwrap_err();
        assert_eq!(reason(err), "chroma 1.5 is outside 0..=1");
    }

    #[test]
    fn test_rejects_fractional_step() {
        let err = ScaleOptions::new(0.0)
            .raw_steps([0.0, 500.5])
            .validate()
            .unwrap_err();
        assert_eq!(reason(err), "step 500.5 is not an integer");
    }

    #[test]
    fn test_rejects_out_of_range_step() {
        let err = ScaleOptions::new(0.0)
            .raw_steps([1200.0])
            .validate()
            .unwrap_err();
        assert_eq!(reason(err), "step 1200 is outside 0..=1000");
    }

    #[test]
    fn test_rejects_duplicate_step() {
        let err = ScaleOptions::new(0.0)
            .steps([20, 40, 20])
            .validate()
            .unwrap_err();
        assert_eq!(reason(err), "step 20 is requested more than once");
    }

    #[test]
    fn test_rejects_empty_steps() {
        let err = ScaleOptions::new(0.0)
            .steps(std::iter::empty::<u16>())
            .validate()
            .unwrap_err();
        assert_eq!(reason(err), "no steps requested");
    }
}
