//! Scale steps and the default step set.

use std::fmt;

/// The positions most design systems ask for: dense at both ends, where
/// near-white and near-black tints need fine control, sparse in the middle.
pub const DEFAULT_STEPS: [u16; 15] = [
    0, 20, 40, 100, 180, 280, 398, 520, 590, 700, 820, 930, 960, 990, 1000,
];

/// A validated position on the 0–1000 accessibility scale.
///
/// Step 0 is the reference anchor (white). Luminance falls as the step
/// grows, and the contrast between two steps depends only on their distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ScaleStep(u16);

impl ScaleStep {
    /// The reference anchor.
    pub const MIN: ScaleStep = ScaleStep(0);
    /// The far end of the scale.
    pub const MAX: ScaleStep = ScaleStep(1000);

    /// Create a step, or `None` above 1000.
    ///
    /// # Example
    /// ```
    /// use okscale_core::ScaleStep;
    /// assert!(ScaleStep::new(500).is_some());
    /// assert!(ScaleStep::new(1001).is_none());
    /// ```
    #[inline]
    pub fn new(value: u16) -> Option<Self> {
        (value <= Self::MAX.0).then_some(Self(value))
    }

    /// Accept a raw requested step if it is a finite integer in `0..=1000`.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_finite() && value.fract() == 0.0 && (0.0..=1000.0).contains(&value) {
            // Integral and within 0..=1000, so the cast is exact.
            Some(Self(value as u16))
        } else {
            None
        }
    }

    /// Numeric value of the step.
    #[inline]
    pub fn value(self) -> u16 {
        self.0
    }

    /// The step as `f64`, the form the curves take.
    #[inline]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Distance between two steps.
    #[inline]
    pub fn distance(self, other: ScaleStep) -> u16 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for ScaleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ScaleStep> for u16 {
    fn from(step: ScaleStep) -> Self {
        step.0
    }
}
