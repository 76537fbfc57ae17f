//! Structured input records.
//!
//! A record bundles one text with the patterns to scan it for:
//!
//! ```json
//! {"text": "ahishers", "patterns": ["he", "she", "his", "hers"]}
//! ```
//!
//! Both fields are required; a record missing either (or not valid JSON
//! at all) surfaces as [`InputError::Malformed`] here, before the matcher
//! is ever involved.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// One text plus the patterns to scan it for.
#[derive(Debug, Clone, Deserialize)]
pub struct InputRecord {
    pub text: String,
    pub patterns: Vec<String>,
}

/// Errors raised by the loading layer.
#[derive(Debug)]
pub enum InputError {
    /// The record file could not be read
    Io(std::io::Error),
    /// The record is not valid JSON or lacks a required field
    Malformed(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "failed to read record: {}", e),
            InputError::Malformed(msg) => write!(f, "malformed record: {}", msg),
        }
    }
}

impl std::error::Error for InputError {}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        InputError::Io(e)
    }
}

/// Parse a record from raw JSON bytes.
pub fn parse_record(bytes: &[u8]) -> Result<InputRecord, InputError> {
    serde_json::from_slice(bytes).map_err(|e| InputError::Malformed(e.to_string()))
}

/// Load a record from a JSON file.
pub fn load_record(path: &Path) -> Result<InputRecord, InputError> {
    let bytes = fs::read(path)?;
    parse_record(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_record() {
        let record =
            parse_record(br#"{"text": "ahishers", "patterns": ["he", "she"]}"#).unwrap();
        assert_eq!(record.text, "ahishers");
        assert_eq!(record.patterns, ["he", "she"]);
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = parse_record(br#"{"text": "ahishers"}"#).unwrap_err();
        match err {
            InputError::Malformed(msg) => assert!(msg.contains("patterns")),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_field_type_is_malformed() {
        let err = parse_record(br#"{"text": "x", "patterns": "he"}"#).unwrap_err();
        assert!(matches!(err, InputError::Malformed(_)));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = parse_record(b"not json").unwrap_err();
        assert!(matches!(err, InputError::Malformed(_)));
    }

    #[test]
    fn test_missing_file_is_io() {
        let err = load_record(Path::new("/nonexistent/record.json")).unwrap_err();
        assert!(matches!(err, InputError::Io(_)));
    }

    #[test]
    fn test_empty_pattern_list_is_well_formed() {
        // an empty pattern *set* is the matcher's business, not the loader's
        let record = parse_record(br#"{"text": "x", "patterns": []}"#).unwrap();
        assert!(record.patterns.is_empty());
    }
}
