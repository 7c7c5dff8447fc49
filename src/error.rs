//! Error types for document loading and configuration
//!
//! The analysis pipeline itself never fails; these errors belong to the layer
//! that acquires documents and settings before the pipeline runs.

use thiserror::Error;

/// Result type for loading and configuration operations
pub type Result<T> = std::result::Result<T, GeoJsonError>;

/// Errors raised outside the validate/analyze/compare core
#[derive(Error, Debug)]
pub enum GeoJsonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {source_name} as JSON: {error}")]
    Parse {
        source_name: String,
        error: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("Invalid structural schema: {0}")]
    InvalidSchema(String),

    #[error("Unknown sample document: {0} (expected 1 or 2)")]
    UnknownSample(String),
}
