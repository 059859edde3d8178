use std::collections::BTreeMap;

use indexmap::IndexMap;
use okscale_core::report::{PairContrast, DEFAULT_TOLERANCE};
use okscale_core::{generate, ColorScale, ContrastReport, DeviceColor};
use serde::Serialize;

use crate::config::PaletteSpec;
use crate::error::PaletteError;

/// Generated scales by family name, in config order.
pub type Palette = IndexMap<String, ColorScale>;

/// How each color is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Lowercase `#rrggbb`
    #[default]
    Hex,
    /// Unrounded `{ "r", "g", "b" }` device channels in `0..=255`
    Srgb,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Rendered {
    Hex(String),
    Channels(DeviceColor),
}

impl Format {
    fn render(self, color: DeviceColor) -> Rendered {
        match self {
            Format::Hex => Rendered::Hex(color.to_hex()),
            Format::Srgb => Rendered::Channels(color),
        }
    }
}

/// Generate every family. The first failing family aborts the run.
pub fn generate_palette(spec: &PaletteSpec) -> Result<Palette, PaletteError> {
    spec.families
        .iter()
        .map(|(name, family)| {
            let scale = generate(&spec.options_for(family)).map_err(|source| {
                PaletteError::Family {
                    family: name.clone(),
                    source,
                }
            })?;
            tracing::debug!(family = %name, steps = scale.len(), "Generated family");
            Ok((name.clone(), scale))
        })
        .collect()
}

/// Pretty JSON `{ family: { step: color } }`.
pub fn render_palette(palette: &Palette, format: Format) -> Result<String, PaletteError> {
    let doc: IndexMap<&str, BTreeMap<u16, Rendered>> = palette
        .iter()
        .map(|(name, scale)| {
            let colors = scale
                .iter()
                .map(|(step, color)| (step.value(), format.render(color)))
                .collect();
            (name.as_str(), colors)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Audit summary of one family.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilySummary {
    pub pairs: usize,
    pub law_violations: usize,
    pub aa_violations: usize,
    pub max_deviation: f64,
    /// Pairs breaking either property
    pub violations: Vec<PairContrast>,
}

impl From<&ContrastReport> for FamilySummary {
    fn from(report: &ContrastReport) -> Self {
        Self {
            pairs: report.pairs.len(),
            law_violations: report.law_violations().count(),
            aa_violations: report.aa_violations().count(),
            max_deviation: report.max_deviation(),
            violations: report
                .pairs
                .iter()
                .filter(|p| p.law_violation || p.aa_violation)
                .copied()
                .collect(),
        }
    }
}

/// Audit every family with the default tolerance.
pub fn audit_palette(palette: &Palette) -> IndexMap<String, FamilySummary> {
    palette
        .iter()
        .map(|(name, scale)| {
            let report = ContrastReport::audit(scale, DEFAULT_TOLERANCE);
            let summary = FamilySummary::from(&report);
            if summary.aa_violations > 0 {
                tracing::warn!(
                    family = %name,
                    aa_violations = summary.aa_violations,
                    "Family misses AA contrast"
                );
            }
            (name.clone(), summary)
        })
        .collect()
}

pub fn render_report(summaries: &IndexMap<String, FamilySummary>) -> Result<String, PaletteError> {
    Ok(serde_json::to_string_pretty(summaries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FamilySpec;
    use pretty_assertions::assert_eq;

    fn gray_spec(steps: &[f64]) -> PaletteSpec {
        PaletteSpec {
            steps: steps.to_vec(),
            families: [(
                "gray".to_string(),
                FamilySpec {
                    hue: 0.0,
                    min_chroma: 0.0,
                    max_chroma: 0.0,
                    hue_shift: true,
                },
            )]
            .into_iter()
            .collect(),
        }
    }

    #[test]
    fn test_render_hex() {
        let palette = generate_palette(&gray_spec(&[1000.0, 0.0])).unwrap();
        let json = render_palette(&palette, Format::Hex).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["gray"]["0"], "#ffffff");
        let steps: Vec<&String> = value["gray"].as_object().unwrap().keys().collect();
        assert_eq!(steps, vec!["0", "1000"]);
    }

    #[test]
    fn test_render_srgb_channels() {
        let palette = generate_palette(&gray_spec(&[0.0])).unwrap();
        let json = render_palette(&palette, Format::Srgb).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        // Channels stay fractional; white lands a hair under 255.
        let white = &value["gray"]["0"];
        for channel in ["r", "g", "b"] {
            let v = white[channel].as_f64().unwrap();
            assert!(v <= 255.0 && 255.0 - v < 1e-3, "{channel} = {v}");
        }
        let white = palette["gray"].get(0).unwrap();
        assert_eq!(white.to_bytes(), [255; 3]);
    }

    #[test]
    fn test_family_error_is_named() {
        let mut spec = gray_spec(&[0.0]);
        spec.families.insert(
            "broken".to_string(),
            FamilySpec {
                hue: 400.0,
                min_chroma: 0.0,
                max_chroma: 0.0,
                hue_shift: true,
            },
        );
        let err = generate_palette(&spec).unwrap_err();
        assert!(err.to_string().starts_with("Color family 'broken'"), "{err}");
    }

    #[test]
    fn test_gray_audit_is_clean() {
        let palette = generate_palette(&gray_spec(&[0.0, 250.0, 500.0, 750.0, 1000.0])).unwrap();
        let summaries = audit_palette(&palette);
        let gray = &summaries["gray"];
        assert_eq!(gray.pairs, 10);
        assert_eq!(gray.aa_violations, 0);
        assert_eq!(gray.law_violations, 0);
        assert!(gray.violations.is_empty());
    }

    #[test]
    fn test_report_violations_are_camel_case() {
        use okscale_core::ScaleStep;

        let gray = DeviceColor::new(128.0, 128.0, 128.0);
        let scale: ColorScale = [0, 600]
            .into_iter()
            .map(|v| (ScaleStep::new(v).unwrap(), gray))
            .collect();
        let summary = FamilySummary::from(&ContrastReport::audit(&scale, DEFAULT_TOLERANCE));

        let value = serde_json::to_value(&summary).unwrap();
        let pair = value["violations"][0].as_object().unwrap();
        let keys: Vec<&str> = pair.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["aaViolation", "expected", "from", "lawViolation", "measured", "to"]
        );
        assert_eq!(value["aaViolations"], 1);
    }

    #[test]
    fn test_default_palette_passes_audit() {
        let palette = generate_palette(&PaletteSpec::default()).unwrap();
        let summaries = audit_palette(&palette);
        assert_eq!(summaries.len(), 8);
        for (name, summary) in &summaries {
            assert_eq!(summary.aa_violations, 0, "{name}: {:?}", summary.violations);
            assert_eq!(summary.law_violations, 0, "{name}: {:?}", summary.violations);
        }
    }
}
