//! Structural comparison of two GeoJSON documents

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::debug;

use crate::geojson::{self, GeoJsonType};

/// Differences between two documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Whether the raw `type` members differ
    pub different_types: bool,

    /// String `type` of the first document, if it has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_1: Option<String>,

    /// String `type` of the second document, if it has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_2: Option<String>,

    /// Count and key differences; present only when both are FeatureCollections
    #[serde(flatten)]
    pub collections: Option<CollectionDiff>,
}

/// Feature-count and property-key differences between two FeatureCollections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDiff {
    pub feature_count_1: usize,
    pub feature_count_2: usize,
    /// `feature_count_1 - feature_count_2`
    pub feature_count_diff: i64,
    /// Keys only the first collection uses
    pub unique_keys_1: BTreeSet<String>,
    /// Keys only the second collection uses
    pub unique_keys_2: BTreeSet<String>,
    pub common_keys: BTreeSet<String>,
}

impl CollectionDiff {
    fn between(features_1: &[Value], features_2: &[Value]) -> Self {
        let keys_1 = geojson::collect_property_keys(features_1);
        let keys_2 = geojson::collect_property_keys(features_2);

        Self {
            feature_count_1: features_1.len(),
            feature_count_2: features_2.len(),
            feature_count_diff: features_1.len() as i64 - features_2.len() as i64,
            unique_keys_1: keys_1.difference(&keys_2).cloned().collect(),
            unique_keys_2: keys_2.difference(&keys_1).cloned().collect(),
            common_keys: keys_1.intersection(&keys_2).cloned().collect(),
        }
    }
}

fn is_feature_collection(doc: &Value) -> bool {
    geojson::geojson_type(doc) == Some(GeoJsonType::FeatureCollection)
}

/// Compare two parsed documents
pub fn compare(first: &Value, second: &Value) -> ComparisonReport {
    let different_types = first.get("type") != second.get("type");

    let collections = (is_feature_collection(first) && is_feature_collection(second))
        .then(|| CollectionDiff::between(geojson::features(first), geojson::features(second)));

    debug!(
        different_types,
        both_collections = collections.is_some(),
        "compared documents"
    );

    ComparisonReport {
        different_types,
        type_1: geojson::type_name(first).map(str::to_string),
        type_2: geojson::type_name(second).map(str::to_string),
        collections,
    }
}
