//! Configuration management for geojson-compare
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (geojson-compare.toml)
//! - Environment variables (GEOJSON_COMPARE__*)
//!
//! ## Example config file (geojson-compare.toml):
//! ```toml
//! [validation]
//! strict_member_types = false
//!
//! [output]
//! format = "text"
//! ```

use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::validate::GeoJsonValidator;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Validation settings
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Validation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Require `features`/`coordinates` to be arrays and `geometry`/`properties`
    /// to be objects when present
    #[serde(default)]
    pub strict_member_types: bool,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How reports are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Indented JSON
    Pretty,
    /// Single-line JSON
    Compact,
}

impl CompareConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, layering a specific file over the default locations
    pub fn load_from(config_path: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_locations = [
            "geojson-compare.toml",
            ".geojson-compare.toml",
            "config/geojson-compare.toml",
        ];

        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        if let Some(config_dir) = directories::ProjectDirs::from("dev", "geojson", "geojson-compare") {
            let xdg_config = config_dir.config_dir().join("geojson-compare.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("GEOJSON_COMPARE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Build a pipeline honoring the validation settings
    pub fn pipeline(&self) -> Result<Pipeline> {
        let validator =
            GeoJsonValidator::with_strict_member_types(self.validation.strict_member_types)?;
        Ok(Pipeline::with_validator(validator))
    }
}
