//! Validate → analyze → compare pipeline
//!
//! Each supplied document is validated and analyzed independently; the pair is
//! compared once when both documents are present. The stages never call each
//! other, so an invalid document is still analyzed and compared.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::analyze::{analyze, AnalysisReport};
use crate::compare::{compare, ComparisonReport};
use crate::error::Result;
use crate::validate::{GeoJsonValidator, ValidationResult};

/// Validation and analysis of one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub validation: ValidationResult,
    pub analysis: AnalysisReport,
}

/// Results for up to two documents and, if both are present, their comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<DocumentReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<DocumentReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonReport>,
}

impl PairReport {
    /// Whether every supplied document validated
    pub fn all_valid(&self) -> bool {
        [&self.first, &self.second]
            .into_iter()
            .flatten()
            .all(|doc| doc.validation.valid)
    }
}

/// Runs the three stages with a shared validator
#[derive(Debug)]
pub struct Pipeline {
    validator: GeoJsonValidator,
}

impl Pipeline {
    /// Create a pipeline with loose member typing
    pub fn new() -> Result<Self> {
        Ok(Self::with_validator(GeoJsonValidator::new()?))
    }

    pub fn with_validator(validator: GeoJsonValidator) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &GeoJsonValidator {
        &self.validator
    }

    /// Validate and analyze a single document
    pub fn inspect(&self, doc: &Value) -> DocumentReport {
        DocumentReport {
            validation: self.validator.validate(doc),
            analysis: analyze(doc),
        }
    }

    /// Run the full pipeline over whichever documents were supplied
    pub fn run(&self, first: Option<&Value>, second: Option<&Value>) -> PairReport {
        let (first_report, second_report) = std::thread::scope(|s| {
            let handle = s.spawn(|| second.map(|doc| self.inspect(doc)));
            let first_report = first.map(|doc| self.inspect(doc));
            let second_report = match handle.join() {
                Ok(report) => report,
                Err(panic) => std::panic::resume_unwind(panic),
            };
            (first_report, second_report)
        });

        let comparison = match (first, second) {
            (Some(a), Some(b)) => Some(compare(a, b)),
            _ => None,
        };

        debug!(
            documents = first.is_some() as usize + second.is_some() as usize,
            compared = comparison.is_some(),
            "pipeline finished"
        );

        PairReport {
            first: first_report,
            second: second_report,
            comparison,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_document_has_no_comparison() {
        let pipeline = Pipeline::new().unwrap();
        let doc = json!({"type": "Point", "coordinates": [0, 0]});

        let report = pipeline.run(Some(&doc), None);
        assert!(report.first.is_some());
        assert!(report.second.is_none());
        assert!(report.comparison.is_none());
        assert!(report.all_valid());
    }

    #[test]
    fn test_invalid_document_is_still_analyzed() {
        let pipeline = Pipeline::new().unwrap();
        let bad = json!({"type": "FeatureCollection"});
        let good = json!({"type": "FeatureCollection", "features": []});

        let report = pipeline.run(Some(&bad), Some(&good));
        let first = report.first.as_ref().unwrap();
        assert!(!first.validation.valid);
        assert_eq!(first.analysis.feature_count, Some(0));
        assert!(!report.all_valid());

        let comparison = report.comparison.unwrap();
        assert!(!comparison.different_types);
        assert!(comparison.collections.is_some());
    }

    #[test]
    fn test_empty_run() {
        let report = Pipeline::new().unwrap().run(None, None);
        assert!(report.all_valid());
        assert_eq!(serde_json::to_value(&report).unwrap(), json!({}));
    }
}
