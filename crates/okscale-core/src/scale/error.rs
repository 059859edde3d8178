//! Error type for scale generation.

use thiserror::Error;

use super::step::ScaleStep;
use crate::contrast::NotSolvable;

/// Failure of [`generate`](super::generate). No partial scale is ever
/// returned alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScaleError {
    /// Options rejected before any step was computed
    #[error("invalid scale options: {reason}")]
    InvalidOptions {
        /// What was wrong
        reason: String,
    },

    /// The contrast inversion for a step left its domain
    #[error("luminance unsolvable at step {step} (contrast {contrast})")]
    LuminanceUnsolvable {
        /// Step being computed
        step: ScaleStep,
        /// Contrast ratio the step asked for
        contrast: f64,
        /// Underlying inversion failure
        #[source]
        source: NotSolvable,
    },

    /// An internal invariant broke after validation passed
    #[error("internal error: {0}")]
    Internal(String),
}

impl ScaleError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        ScaleError::InvalidOptions {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_options_display() {
        let err = ScaleError::invalid("hue 361 is outside 0..=360");
        assert_eq!(
            err.to_string(),
            "invalid scale options: hue 361 is outside 0..=360"
        );
    }

    #[test]
    fn test_luminance_unsolvable_carries_source() {
        let source = NotSolvable {
            contrast: 22.5,
            reference: 1.0,
        };
        let err = ScaleError::LuminanceUnsolvable {
            step: ScaleStep::new(1000).unwrap(),
            contrast: 22.5,
            source,
        };
        assert_eq!(
            err.to_string(),
            "luminance unsolvable at step 1000 (contrast 22.5)"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_internal_display() {
        let err = ScaleError::Internal("curve failed".to_string());
        assert_eq!(err.to_string(), "internal error: curve failed");
    }
}
