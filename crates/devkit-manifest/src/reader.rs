use std::path::Path;

use semver::Version;
use serde_json::{Map, Value};

use crate::error::ManifestError;

pub(crate) const VERSION_FIELD: &str = "version";

/// Reads a JSON document whose top level must be an object.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or is not an object.
pub fn read_document(path: &Path) -> Result<Map<String, Value>, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(path, &content)
}

pub(crate) fn parse_document(
    path: &Path,
    content: &str,
) -> Result<Map<String, Value>, ManifestError> {
    let value: Value = serde_json::from_str(content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ManifestError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// # Errors
///
/// Returns an error if the document cannot be read or has no valid `version` string.
pub fn read_version(path: &Path) -> Result<Version, ManifestError> {
    let doc = read_document(path)?;

    let raw = doc
        .get(VERSION_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| ManifestError::MissingField {
            path: path.to_path_buf(),
            field: VERSION_FIELD.to_string(),
        })?;

    Version::parse(raw).map_err(|source| ManifestError::InvalidVersion {
        path: path.to_path_buf(),
        version: raw.to_string(),
        source,
    })
}
