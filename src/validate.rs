//! Structural GeoJSON validation
//!
//! Validation runs in two stages:
//! 1. **Structural schema**: the document must be an object whose `type` is one
//!    of the nine recognized GeoJSON types (checked with a compiled JSON Schema)
//! 2. **Required members**: a `FeatureCollection` needs `features`, a `Feature`
//!    needs `geometry`. Only presence is checked.
//!
//! Coordinate ranges, ring closure and winding order are not inspected.
//! Failures are returned as a [`ValidationResult`], never raised.

use jsonschema::{Draft, JSONSchema};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{GeoJsonError, Result};
use crate::geojson::{self, GeoJsonType};

/// Message returned for documents that pass every check
pub const VALID_MESSAGE: &str = "Valid GeoJSON";

/// Outcome of validating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the document passed every check
    pub valid: bool,
    /// Human-readable confirmation or failure reason
    pub message: String,
}

impl ValidationResult {
    /// A passing result with the fixed confirmation message
    pub fn valid() -> Self {
        Self {
            valid: true,
            message: VALID_MESSAGE.to_string(),
        }
    }

    /// A failing result with the given reason
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Build the structural schema.
///
/// Members other than `type` are declared without type constraints unless
/// `strict_member_types` is set, in which case `features`/`coordinates` must be
/// arrays and `geometry`/`properties` objects whenever they are present.
pub fn structural_schema(strict_member_types: bool) -> Value {
    let type_names: Vec<&str> = GeoJsonType::ALL.iter().map(|t| t.as_str()).collect();

    let (array_member, object_member) = if strict_member_types {
        (json!({"type": "array"}), json!({"type": "object"}))
    } else {
        (json!({}), json!({}))
    };

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["type"],
        "properties": {
            "type": {"type": "string", "enum": type_names},
            "features": array_member,
            "geometry": object_member,
            "properties": object_member,
            "coordinates": array_member
        }
    })
}

/// Reusable validator holding the compiled structural schema
pub struct GeoJsonValidator {
    schema: JSONSchema,
    strict_member_types: bool,
}

impl std::fmt::Debug for GeoJsonValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoJsonValidator")
            .field("strict_member_types", &self.strict_member_types)
            .finish_non_exhaustive()
    }
}

impl GeoJsonValidator {
    /// Create a validator with loose member typing
    pub fn new() -> Result<Self> {
        Self::with_strict_member_types(false)
    }

    /// Create a validator, optionally enforcing member JSON kinds
    pub fn with_strict_member_types(strict_member_types: bool) -> Result<Self> {
        let schema_value = structural_schema(strict_member_types);
        let schema = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&schema_value)
            .map_err(|e| GeoJsonError::InvalidSchema(e.to_string()))?;

        Ok(Self {
            schema,
            strict_member_types,
        })
    }

    /// Whether member JSON kinds are enforced
    pub fn strict_member_types(&self) -> bool {
        self.strict_member_types
    }

    /// Validate a parsed document
    pub fn validate(&self, doc: &Value) -> ValidationResult {
        if let Err(mut errors) = self.schema.validate(doc) {
            let message = match errors.next() {
                Some(error) => {
                    let path = error.instance_path.to_string();
                    let path = if path.is_empty() { "<root>".to_string() } else { path };
                    format!("Invalid GeoJSON: {} (at {})", error, path)
                }
                None => "Invalid GeoJSON".to_string(),
            };
            debug!(%message, "structural schema rejected document");
            return ValidationResult::invalid(message);
        }

        let result = match geojson::geojson_type(doc) {
            Some(GeoJsonType::FeatureCollection) if doc.get("features").is_none() => {
                ValidationResult::invalid("FeatureCollection must have 'features' array")
            }
            Some(GeoJsonType::Feature) if doc.get("geometry").is_none() => {
                ValidationResult::invalid("Feature must have 'geometry' property")
            }
            _ => ValidationResult::valid(),
        };

        debug!(valid = result.valid, message = %result.message, "validated document");
        result
    }
}

/// Validate a document with a loose-typing validator.
///
/// An internal fault while preparing the validator is reported as a failed
/// validation rather than propagated.
pub fn validate(doc: &Value) -> ValidationResult {
    match GeoJsonValidator::new() {
        Ok(validator) => validator.validate(doc),
        Err(e) => ValidationResult::invalid(format!("Error during validation: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_type_is_invalid() {
        let result = validate(&json!({"features": []}));
        assert!(!result.valid);
        assert!(result.message.contains("type"), "{}", result.message);
    }

    #[test]
    fn test_unknown_type_names_field_path() {
        let result = validate(&json!({"type": "Circle"}));
        assert!(!result.valid);
        assert!(result.message.contains("/type"), "{}", result.message);
        assert!(result.message.contains("FeatureCollection"), "{}", result.message);
    }

    #[test]
    fn test_non_object_is_invalid() {
        for doc in [json!(null), json!([1, 2]), json!("Point"), json!(3)] {
            let result = validate(&doc);
            assert!(!result.valid, "{} should be invalid", doc);
            assert!(result.message.contains("<root>"), "{}", result.message);
        }
    }

    #[test]
    fn test_non_string_type_is_invalid() {
        assert!(!validate(&json!({"type": 1})).valid);
        assert!(!validate(&json!({"type": ["Point"]})).valid);
    }

    #[test]
    fn test_feature_collection_requires_features() {
        let result = validate(&json!({"type": "FeatureCollection"}));
        assert_eq!(
            result,
            ValidationResult::invalid("FeatureCollection must have 'features' array")
        );
        assert!(validate(&json!({"type": "FeatureCollection", "features": []})).valid);
    }

    #[test]
    fn test_feature_requires_geometry() {
        let result = validate(&json!({"type": "Feature"}));
        assert_eq!(
            result,
            ValidationResult::invalid("Feature must have 'geometry' property")
        );
        let result = validate(&json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [0, 0]}
        }));
        assert_eq!(result, ValidationResult::valid());
    }

    #[test]
    fn test_bare_geometries_need_nothing_else() {
        for t in GeoJsonType::ALL.iter().filter(|t| t.is_geometry()) {
            assert!(validate(&json!({"type": t.as_str()})).valid, "{}", t);
        }
    }

    #[test]
    fn test_loose_member_typing_is_default() {
        let doc = json!({"type": "FeatureCollection", "features": "not an array"});
        assert!(validate(&doc).valid);

        let doc = json!({"type": "Feature", "geometry": null});
        assert!(validate(&doc).valid);
    }

    #[test]
    fn test_strict_member_typing() {
        let validator = GeoJsonValidator::with_strict_member_types(true).unwrap();
        assert!(validator.strict_member_types());

        let result = validator.validate(&json!({"type": "FeatureCollection", "features": {}}));
        assert!(!result.valid);
        assert!(result.message.contains("/features"), "{}", result.message);

        let result = validator.validate(&json!({"type": "Feature", "geometry": []}));
        assert!(!result.valid);

        assert!(validator
            .validate(&json!({"type": "FeatureCollection", "features": []}))
            .valid);
    }
}
