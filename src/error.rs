use std::path::PathBuf;

use okscale_core::ScaleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config defines no color families")]
    NoFamilies,
}

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Color family '{family}' is invalid")]
    Family {
        family: String,
        #[source]
        source: ScaleError,
    },

    #[error("Output encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
