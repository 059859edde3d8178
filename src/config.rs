use std::path::Path;

use indexmap::IndexMap;
use okscale_core::{ScaleOptions, DEFAULT_STEPS};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Palette configuration loaded from `--config`, or the built-in default.
///
/// ```json
/// {
///   "steps": [0, 500, 1000],
///   "colors": {
///     "blue": { "hue": 250, "minChroma": 0.1, "maxChroma": 0.8 }
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteSpec {
    /// Steps every family is resolved at
    #[serde(default = "default_steps")]
    pub steps: Vec<f64>,

    /// Color families, in output order
    #[serde(default = "default_families", rename = "colors")]
    pub families: IndexMap<String, FamilySpec>,
}

/// One named scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilySpec {
    pub hue: f64,
    pub min_chroma: f64,
    pub max_chroma: f64,

    /// Bezold–Brücke hue correction
    #[serde(default = "default_hue_shift")]
    pub hue_shift: bool,
}

fn default_steps() -> Vec<f64> {
    DEFAULT_STEPS.iter().map(|&s| f64::from(s)).collect()
}

fn default_hue_shift() -> bool {
    true
}

/// Built-in families. Every one passes the contrast audit on [`DEFAULT_STEPS`].
///
/// Saturated greens and cyans are brighter than the gray they take their
/// lightness from, enough to pull 20 vs 520 under 4.5:1, so those two stay
/// muted. Red and purple are capped where their law deviation stays well
/// inside the default tolerance.
fn default_families() -> IndexMap<String, FamilySpec> {
    [
        ("gray", 0.0, 0.0, 0.0),
        ("blue", 250.0, 0.1, 0.8),
        ("green", 145.0, 0.1, 0.15),
        ("red", 25.0, 0.1, 0.7),
        ("yellow", 90.0, 0.1, 0.8),
        ("purple", 305.0, 0.1, 0.6),
        ("teal", 190.0, 0.1, 0.15),
        ("orange", 55.0, 0.1, 0.8),
    ]
    .into_iter()
    .map(|(name, hue, min_chroma, max_chroma)| {
        (
            name.to_string(),
            FamilySpec {
                hue,
                min_chroma,
                max_chroma,
                hue_shift: true,
            },
        )
    })
    .collect()
}

impl Default for PaletteSpec {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            families: default_families(),
        }
    }
}

impl PaletteSpec {
    /// Load a config file. `.yaml` and `.yml` are read as YAML, anything
    /// else as JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        let spec = if is_yaml {
            Self::from_yaml(&content)?
        } else {
            Self::from_json(&content)?
        };

        tracing::info!(
            path = %path.display(),
            families = spec.families.len(),
            steps = spec.steps.len(),
            "Loaded palette configuration"
        );
        Ok(spec)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let spec: Self = serde_json::from_str(content)?;
        spec.check()
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let spec: Self = serde_yaml::from_str(content)?;
        spec.check()
    }

    fn check(self) -> Result<Self, ConfigError> {
        if self.families.is_empty() {
            return Err(ConfigError::NoFamilies);
        }
        Ok(self)
    }

    /// Scale options for one family at this palette's steps.
    pub fn options_for(&self, family: &FamilySpec) -> ScaleOptions {
        ScaleOptions::new(family.hue)
            .chroma(family.min_chroma, family.max_chroma)
            .raw_steps(self.steps.iter().copied())
            .hue_shift(family.hue_shift)
    }
}
