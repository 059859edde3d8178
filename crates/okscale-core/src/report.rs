//! Pairwise contrast audit of a generated scale.
//!
//! For every pair of steps `a < b` the audit measures the WCAG contrast of
//! the two device colors and compares it with what the scale promises,
//! `exp(3.04·(b − a)/1000)`. Pairs at least 500 apart must also clear AA.

use crate::color::DeviceColor;
use crate::contrast::{contrast_ratio, step_to_contrast, AA_NORMAL_TEXT};
use crate::scale::{ColorScale, ScaleStep};

/// Allowed absolute gap between measured and expected contrast.
pub const DEFAULT_TOLERANCE: f64 = 0.5;

/// Step distance from which the AA guarantee applies.
pub const AA_STEP_DISTANCE: u16 = 500;

/// Contrast measurement for one pair of steps.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct PairContrast {
    /// Lower step
    pub from: ScaleStep,
    /// Higher step
    pub to: ScaleStep,
    /// WCAG contrast of the two device colors
    pub measured: f64,
    /// Contrast the step distance promises
    pub expected: f64,
    /// `|measured − expected|` exceeds the tolerance
    pub law_violation: bool,
    /// At least 500 apart but below 4.5:1
    pub aa_violation: bool,
}

/// Result of auditing one scale.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct ContrastReport {
    /// Tolerance the audit used
    pub tolerance: f64,
    /// Every pair, ordered by `(from, to)`
    pub pairs: Vec<PairContrast>,
}

impl ContrastReport {
    /// Audit every pair of steps in `scale`.
    ///
    /// # Example
    ///
    /// ```
    /// use okscale_core::{generate, ContrastReport, ScaleOptions};
    /// use okscale_core::report::DEFAULT_TOLERANCE;
    ///
    /// let scale = generate(&ScaleOptions::new(0.0)).unwrap();
    /// let report = ContrastReport::audit(&scale, DEFAULT_TOLERANCE);
    /// assert!(report.is_clean());
    /// ```
    pub fn audit(scale: &ColorScale, tolerance: f64) -> Self {
        let entries: Vec<(ScaleStep, DeviceColor)> = scale.iter().collect();

        let mut pairs = Vec::with_capacity(entries.len() * entries.len().saturating_sub(1) / 2);
        for (i, &(from, a)) in entries.iter().enumerate() {
            for &(to, b) in &entries[i + 1..] {
                let distance = from.distance(to);
                let measured = contrast_ratio(a, b);
                let expected = step_to_contrast(f64::from(distance));
                pairs.push(PairContrast {
                    from,
                    to,
                    measured,
                    expected,
                    law_violation: (measured - expected).abs() > tolerance,
                    aa_violation: distance >= AA_STEP_DISTANCE && measured < AA_NORMAL_TEXT,
                });
            }
        }

        Self { tolerance, pairs }
    }

    /// No pair violates either property.
    pub fn is_clean(&self) -> bool {
        self.pairs.iter().all(|p| !p.law_violation && !p.aa_violation)
    }

    /// Pairs whose contrast strays from the law by more than the tolerance.
    pub fn law_violations(&self) -> impl Iterator<Item = &PairContrast> {
        self.pairs.iter().filter(|p| p.law_violation)
    }

    /// Pairs at least 500 apart that fall below AA.
    pub fn aa_violations(&self) -> impl Iterator<Item = &PairContrast> {
        self.pairs.iter().filter(|p| p.aa_violation)
    }

    /// Largest `|measured − expected|` over all pairs.
    pub fn max_deviation(&self) -> f64 {
        self.pairs
            .iter()
            .map(|p| (p.measured - p.expected).abs())
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{generate, ScaleOptions};

    fn step(v: u16) -> ScaleStep {
        ScaleStep::new(v).unwrap()
    }

    #[test]
    fn test_pair_count() {
        let scale = generate(&ScaleOptions::new(0.0).steps([0, 100, 500, 1000])).unwrap();
        let report = ContrastReport::audit(&scale, DEFAULT_TOLERANCE);
        assert_eq!(report.pairs.len(), 6);
        assert_eq!(report.pairs[0].from, step(0));
        assert_eq!(report.pairs[0].to, step(100));
    }

    #[test]
    fn test_gray_scale_is_clean() {
        let scale = generate(&ScaleOptions::new(0.0)).unwrap();
        let report = ContrastReport::audit(&scale, DEFAULT_TOLERANCE);
        assert!(report.is_clean(), "max deviation {}", report.max_deviation());
    }

    #[test]
    fn test_flags_violations() {
        // Two identical colors 600 apart: contrast 1 against a promised ~6.2.
        let gray = DeviceColor::new(128.0, 128.0, 128.0);
        let scale: ColorScale = [(step(0), gray), (step(600), gray)].into_iter().collect();

        let report = ContrastReport::audit(&scale, DEFAULT_TOLERANCE);
        assert!(!report.is_clean());
        assert_eq!(report.law_violations().count(), 1);
        assert_eq!(report.aa_violations().count(), 1);
        assert!((report.pairs[0].measured - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_aa_only_applies_from_five_hundred() {
        let gray = DeviceColor::new(128.0, 128.0, 128.0);
        let scale: ColorScale = [(step(0), gray), (step(499), gray)].into_iter().collect();

        let report = ContrastReport::audit(&scale, DEFAULT_TOLERANCE);
        assert_eq!(report.aa_violations().count(), 0);
        assert_eq!(report.law_violations().count(), 1);
    }
}
