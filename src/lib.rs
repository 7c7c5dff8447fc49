//! GeoJSON Comparison
//!
//! Validates GeoJSON documents against the structural rules of the format,
//! summarizes their geometry composition and attribute schema, and reports
//! structural differences between a pair of documents.
//!
//! ## Pipeline
//!
//! ```text
//! document 1 ──► validate ──► analyze ──┐
//!                                       ├──► compare ──► PairReport
//! document 2 ──► validate ──► analyze ──┘
//! ```
//!
//! - **Validation**: object shape, recognized `type`, required members
//! - **Analysis**: feature counts, geometry tallies, property-key unions
//! - **Comparison**: type mismatch, feature-count delta, property-key sets
//!
//! All three stages are total functions over `serde_json::Value`. Fields that
//! do not apply are absent from a report rather than empty.

pub mod analyze;
pub mod compare;
pub mod config;
pub mod error;
pub mod geojson;
pub mod pipeline;
pub mod render;
pub mod samples;
pub mod source;
pub mod validate;

pub use analyze::{analyze, AnalysisReport};
pub use compare::{compare, CollectionDiff, ComparisonReport};
pub use config::{CompareConfig, OutputFormat};
pub use error::{GeoJsonError, Result};
pub use geojson::GeoJsonType;
pub use pipeline::{DocumentReport, PairReport, Pipeline};
pub use samples::Sample;
pub use source::DocumentSource;
pub use validate::{validate, GeoJsonValidator, ValidationResult};
