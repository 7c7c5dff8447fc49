//! GeoJSON type vocabulary and safe member access
//!
//! Documents arrive as untrusted `serde_json::Value`s. Every accessor here
//! returns an absent marker or a default instead of failing, and a member of
//! the wrong JSON kind is treated exactly like a missing one.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Placeholder used whenever a type name cannot be read
pub const UNKNOWN: &str = "Unknown";

/// The nine recognized GeoJSON `type` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeoJsonType {
    FeatureCollection,
    Feature,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeoJsonType {
    /// All recognized types, in the order the structural schema lists them
    pub const ALL: [GeoJsonType; 9] = [
        GeoJsonType::FeatureCollection,
        GeoJsonType::Feature,
        GeoJsonType::Point,
        GeoJsonType::LineString,
        GeoJsonType::Polygon,
        GeoJsonType::MultiPoint,
        GeoJsonType::MultiLineString,
        GeoJsonType::MultiPolygon,
        GeoJsonType::GeometryCollection,
    ];

    /// The `type` string as it appears in a document
    pub fn as_str(&self) -> &'static str {
        match self {
            GeoJsonType::FeatureCollection => "FeatureCollection",
            GeoJsonType::Feature => "Feature",
            GeoJsonType::Point => "Point",
            GeoJsonType::LineString => "LineString",
            GeoJsonType::Polygon => "Polygon",
            GeoJsonType::MultiPoint => "MultiPoint",
            GeoJsonType::MultiLineString => "MultiLineString",
            GeoJsonType::MultiPolygon => "MultiPolygon",
            GeoJsonType::GeometryCollection => "GeometryCollection",
        }
    }

    /// Whether this is a bare geometry rather than a feature wrapper
    pub fn is_geometry(&self) -> bool {
        !matches!(self, GeoJsonType::FeatureCollection | GeoJsonType::Feature)
    }
}

impl fmt::Display for GeoJsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeoJsonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeoJsonType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unrecognized GeoJSON type: '{}'", s))
    }
}

/// The `type` member when it is a string
pub fn type_name(doc: &Value) -> Option<&str> {
    doc.get("type").and_then(Value::as_str)
}

/// The recognized type of a document, if any
pub fn geojson_type(doc: &Value) -> Option<GeoJsonType> {
    type_name(doc).and_then(|s| s.parse().ok())
}

/// The `features` sequence, empty when missing or not an array
pub fn features(doc: &Value) -> &[Value] {
    doc.get("features")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// `geometry.type` of a feature, or [`UNKNOWN`] if any level is missing
pub fn geometry_type(feature: &Value) -> &str {
    feature
        .get("geometry")
        .and_then(|g| g.get("type"))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN)
}

/// Keys of a feature's `properties` object; empty unless it is a non-empty object
pub fn property_keys(feature: &Value) -> impl Iterator<Item = &str> {
    feature
        .get("properties")
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|props| props.keys().map(String::as_str))
}

/// Union of property keys across a sequence of features
pub fn collect_property_keys(features: &[Value]) -> BTreeSet<String> {
    features
        .iter()
        .flat_map(property_keys)
        .map(str::to_string)
        .collect()
}
