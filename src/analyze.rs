//! Structural summary of a single GeoJSON document
//!
//! Analysis is total: malformed or invalid documents produce a report with
//! whatever could be read, and fields that do not apply are left absent.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::geojson::{self, GeoJsonType, UNKNOWN};

/// Summary of a document's geometry composition and attribute schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The document's `type`, or `"Unknown"`
    #[serde(rename = "type")]
    pub doc_type: String,

    /// Number of features (FeatureCollection only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_count: Option<usize>,

    /// Occurrences per geometry type (FeatureCollection only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry_types: Option<BTreeMap<String, usize>>,

    /// Geometry type of a Feature or bare geometry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry_type: Option<String>,

    /// Union of property keys
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_keys: Option<BTreeSet<String>>,
}

impl AnalysisReport {
    fn with_type(doc_type: impl Into<String>) -> Self {
        Self {
            doc_type: doc_type.into(),
            feature_count: None,
            geometry_types: None,
            geometry_type: None,
            property_keys: None,
        }
    }
}

/// Analyze a parsed document
pub fn analyze(doc: &Value) -> AnalysisReport {
    let doc_type = geojson::type_name(doc).unwrap_or(UNKNOWN);
    let mut report = AnalysisReport::with_type(doc_type);

    match doc_type.parse::<GeoJsonType>() {
        Ok(GeoJsonType::FeatureCollection) => {
            let features = geojson::features(doc);

            let mut tally: BTreeMap<String, usize> = BTreeMap::new();
            for feature in features {
                *tally.entry(geojson::geometry_type(feature).to_string()).or_default() += 1;
            }

            report.feature_count = Some(features.len());
            report.geometry_types = Some(tally);
            report.property_keys = Some(geojson::collect_property_keys(features));
        }
        Ok(GeoJsonType::Feature) => {
            report.geometry_type = Some(geojson::geometry_type(doc).to_string());

            let keys: BTreeSet<String> =
                geojson::property_keys(doc).map(str::to_string).collect();
            if !keys.is_empty() {
                report.property_keys = Some(keys);
            }
        }
        Ok(geometry) => {
            report.geometry_type = Some(geometry.as_str().to_string());
        }
        Err(_) => {}
    }

    debug!(doc_type = %report.doc_type, feature_count = ?report.feature_count, "analyzed document");
    report
}
