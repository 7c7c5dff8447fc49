//! Document acquisition
//!
//! Reads raw bytes from a file, stdin or a built-in sample and parses them into
//! a JSON value. Read and parse failures are reported here, before a document
//! ever reaches the analysis pipeline.

use serde_json::Value;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::error::{GeoJsonError, Result};
use crate::samples::Sample;

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A `.json`/`.geojson` file on disk
    File(PathBuf),
    /// Standard input (`-`)
    Stdin,
    /// A built-in sample (`sample:1`, `sample:2`)
    Sample(Sample),
}

impl DocumentSource {
    /// Read and parse the document
    pub fn load(&self) -> Result<Value> {
        let text = match self {
            DocumentSource::Sample(sample) => {
                info!(%sample, "using sample document");
                return Ok(sample.document());
            }
            DocumentSource::File(path) => {
                info!(path = %path.display(), "reading document");
                std::fs::read_to_string(path)?
            }
            DocumentSource::Stdin => {
                info!("reading document from stdin");
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        parse_document(&text, &self.to_string())
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Stdin => f.write_str("<stdin>"),
            DocumentSource::Sample(sample) => write!(f, "{}", sample),
        }
    }
}

impl FromStr for DocumentSource {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "-" {
            return Ok(DocumentSource::Stdin);
        }
        match s.strip_prefix("sample:") {
            Some(n) => Ok(DocumentSource::Sample(n.parse()?)),
            None => Ok(DocumentSource::File(PathBuf::from(s))),
        }
    }
}

/// Parse UTF-8 text as a JSON document, naming the source on failure
pub fn parse_document(text: &str, source_name: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|error| GeoJsonError::Parse {
        source_name: source_name.to_string(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_source_strings() {
        assert_eq!("-".parse::<DocumentSource>().unwrap(), DocumentSource::Stdin);
        assert_eq!(
            "sample:1".parse::<DocumentSource>().unwrap(),
            DocumentSource::Sample(Sample::First)
        );
        assert_eq!(
            "data/roads.geojson".parse::<DocumentSource>().unwrap(),
            DocumentSource::File(PathBuf::from("data/roads.geojson"))
        );
        assert!("sample:9".parse::<DocumentSource>().is_err());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"type": "Point", "coordinates": [1, 2]}}"#).unwrap();

        let source = DocumentSource::File(file.path().to_path_buf());
        let doc = source.load().unwrap();
        assert_eq!(doc["type"], "Point");
    }

    #[test]
    fn test_parse_error_names_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let source = DocumentSource::File(file.path().to_path_buf());
        match source.load() {
            Err(GeoJsonError::Parse { source_name, .. }) => {
                assert_eq!(source_name, file.path().display().to_string());
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = DocumentSource::File(PathBuf::from("/nonexistent/doc.geojson"));
        assert!(matches!(source.load(), Err(GeoJsonError::Io(_))));
    }
}
