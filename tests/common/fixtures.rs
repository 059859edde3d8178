//! Config fixtures written to temporary files.

use std::io::Write;

use tempfile::NamedTempFile;

/// Three grays at 0, 500 and 1000.
pub const GRAY_JSON: &str = r#"{
  "steps": [0, 500, 1000],
  "colors": {
    "gray": { "hue": 0, "minChroma": 0, "maxChroma": 0 }
  }
}"#;

/// Two families listed out of alphabetical order.
pub const ORDERED_JSON: &str = r#"{
  "steps": [1000, 0, 520],
  "colors": {
    "zinc": { "hue": 0, "minChroma": 0, "maxChroma": 0 },
    "azure": { "hue": 240, "minChroma": 0.1, "maxChroma": 0.6, "hueShift": false }
  }
}"#;

pub const GRAY_YAML: &str = "\
steps: [0, 250, 500, 750, 1000]
colors:
  gray:
    hue: 0
    minChroma: 0
    maxChroma: 0
";

pub const FRACTIONAL_STEP_JSON: &str = r#"{
  "steps": [500.5],
  "colors": { "gray": { "hue": 0, "minChroma": 0, "maxChroma": 0 } }
}"#;

pub const BAD_HUE_JSON: &str = r#"{
  "colors": { "red": { "hue": 361, "minChroma": 0.1, "maxChroma": 0.5 } }
}"#;

pub const INVERTED_CHROMA_JSON: &str = r#"{
  "colors": { "red": { "hue": 20, "minChroma": 0.6, "maxChroma": 0.3 } }
}"#;

/// Write `content` to a temp file ending in `suffix`.
pub fn config_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}
