//! Plain-text presentation of pipeline reports
//!
//! Sections are emitted only for the fields a report actually carries.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::compare::ComparisonReport;
use crate::pipeline::{DocumentReport, PairReport};
use crate::validate::ValidationResult;

/// Validity banner for one document
pub fn validation(result: &ValidationResult) -> String {
    if result.valid {
        "✅ Valid GeoJSON structure".to_string()
    } else {
        format!("❌ {}", result.message)
    }
}

/// Validity banner plus structural summary
pub fn document(title: &str, report: &DocumentReport) -> String {
    let analysis = &report.analysis;
    let mut out = String::new();

    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", validation(&report.validation));
    let _ = writeln!(out, "Type: {}", analysis.doc_type);

    if let Some(count) = analysis.feature_count {
        let _ = writeln!(out, "Feature Count: {}", count);
    }

    if let Some(tally) = &analysis.geometry_types {
        let _ = writeln!(out, "Geometry Types:");
        for (geometry, count) in tally {
            let _ = writeln!(out, "  - {}: {} features", geometry, count);
        }
    }

    if let Some(geometry) = &analysis.geometry_type {
        let _ = writeln!(out, "Geometry Type: {}", geometry);
    }

    if let Some(keys) = &analysis.property_keys {
        let joined: Vec<&str> = keys.iter().map(String::as_str).collect();
        let _ = writeln!(out, "Property Keys: {}", joined.join(", "));
    }

    out
}

fn key_column(out: &mut String, heading: &str, keys: &BTreeSet<String>) {
    let _ = writeln!(out, "{}:", heading);
    if keys.is_empty() {
        let _ = writeln!(out, "  None");
    }
    for key in keys {
        let _ = writeln!(out, "  - {}", key);
    }
}

/// Type, feature-count and key differences between two documents
pub fn comparison(report: &ComparisonReport) -> String {
    let mut out = String::new();
    let type_1 = report.type_1.as_deref().unwrap_or("None");
    let type_2 = report.type_2.as_deref().unwrap_or("None");

    if report.different_types {
        let _ = writeln!(out, "⚠️  Different GeoJSON types: {} vs {}", type_1, type_2);
    } else {
        let _ = writeln!(out, "✅ Same GeoJSON type: {}", type_1);
    }

    if let Some(diff) = &report.collections {
        if diff.feature_count_diff == 0 {
            let _ = writeln!(out, "✅ Same feature count: {} features", diff.feature_count_1);
        } else {
            let _ = writeln!(
                out,
                "⚠️  Different feature counts: {} vs {} (difference: {})",
                diff.feature_count_1,
                diff.feature_count_2,
                diff.feature_count_diff.unsigned_abs()
            );
        }

        key_column(&mut out, "Unique Keys in GeoJSON 1", &diff.unique_keys_1);
        key_column(&mut out, "Common Keys", &diff.common_keys);
        key_column(&mut out, "Unique Keys in GeoJSON 2", &diff.unique_keys_2);
    }

    out
}

/// Everything in a pair report, separated by dividers
pub fn pair(report: &PairReport) -> String {
    let mut sections = Vec::new();

    if let Some(first) = &report.first {
        sections.push(document("GeoJSON 1 Analysis", first));
    }
    if let Some(second) = &report.second {
        sections.push(document("GeoJSON 2 Analysis", second));
    }
    if let Some(diff) = &report.comparison {
        sections.push(format!("GeoJSON Comparison\n{}", comparison(diff)));
    }

    sections.join("\n---\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;
    use crate::pipeline::Pipeline;
    use serde_json::json;

    #[test]
    fn test_document_sections_follow_fields() {
        let pipeline = Pipeline::new().unwrap();
        let report = pipeline.inspect(&json!({"type": "LineString", "coordinates": []}));
        let text = document("Doc", &report);

        assert!(text.contains("✅ Valid GeoJSON structure"));
        assert!(text.contains("Type: LineString"));
        assert!(text.contains("Geometry Type: LineString"));
        assert!(!text.contains("Feature Count"));
        assert!(!text.contains("Property Keys"));
    }

    #[test]
    fn test_invalid_banner_carries_reason() {
        let pipeline = Pipeline::new().unwrap();
        let report = pipeline.inspect(&json!({"type": "Feature"}));
        assert!(document("Doc", &report).contains("❌ Feature must have 'geometry' property"));
    }

    #[test]
    fn test_comparison_counts_and_columns() {
        let report = compare(
            &json!({"type": "FeatureCollection", "features": [{"properties": {"a": 1}}]}),
            &json!({"type": "FeatureCollection", "features": [
                {"properties": {"a": 1}}, {}, {}
            ]}),
        );
        let text = comparison(&report);

        assert!(text.contains("✅ Same GeoJSON type: FeatureCollection"));
        assert!(text.contains("Different feature counts: 1 vs 3 (difference: 2)"));
        assert!(text.contains("Unique Keys in GeoJSON 1:\n  None"));
        assert!(text.contains("Common Keys:\n  - a"));
    }

    #[test]
    fn test_comparison_without_collections() {
        let report = compare(&json!({"type": "Point"}), &json!({}));
        let text = comparison(&report);
        assert!(text.contains("Different GeoJSON types: Point vs None"));
        assert!(!text.contains("Common Keys"));
    }
}
