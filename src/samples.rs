//! Built-in sample documents

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::GeoJsonError;

/// One of the two fixed sample FeatureCollections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sample {
    /// A point with `value` and a line with `length`
    First,
    /// A point with `elevation` and a polygon with `area`
    Second,
}

impl Sample {
    pub fn number(&self) -> u8 {
        match self {
            Sample::First => 1,
            Sample::Second => 2,
        }
    }

    /// Build the sample document
    pub fn document(&self) -> Value {
        match self {
            Sample::First => json!({
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": {"name": "Point 1", "value": 42},
                        "geometry": {"type": "Point", "coordinates": [0, 0]}
                    },
                    {
                        "type": "Feature",
                        "properties": {"name": "Line 1", "length": 10.5},
                        "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}
                    }
                ]
            }),
            Sample::Second => json!({
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": {"name": "Point A", "elevation": 100},
                        "geometry": {"type": "Point", "coordinates": [2, 2]}
                    },
                    {
                        "type": "Feature",
                        "properties": {"name": "Polygon A", "area": 25.0},
                        "geometry": {
                            "type": "Polygon",
                            "coordinates": [[[0, 0], [5, 0], [5, 5], [0, 5], [0, 0]]]
                        }
                    }
                ]
            }),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sample:{}", self.number())
    }
}

impl FromStr for Sample {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Sample::First),
            "2" => Ok(Sample::Second),
            other => Err(GeoJsonError::UnknownSample(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_feature_collections() {
        for sample in [Sample::First, Sample::Second] {
            let doc = sample.document();
            assert_eq!(doc["type"], "FeatureCollection");
            assert_eq!(doc["features"].as_array().map(Vec::len), Some(2));
        }
    }

    #[test]
    fn test_parse_sample_number() {
        assert_eq!("1".parse::<Sample>().unwrap(), Sample::First);
        assert_eq!("2".parse::<Sample>().unwrap(), Sample::Second);
        assert!(matches!(
            "3".parse::<Sample>(),
            Err(GeoJsonError::UnknownSample(n)) if n == "3"
        ));
        assert_eq!(Sample::Second.to_string(), "sample:2");
    }
}
