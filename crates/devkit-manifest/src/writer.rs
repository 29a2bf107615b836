use std::path::Path;

use semver::Version;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::ManifestError;
use crate::reader::{VERSION_FIELD, parse_document, read_version};

const DEFAULT_INDENT: &[u8] = b"  ";

/// Sets the `version` field, keeping key order and the file's indentation style.
///
/// # Errors
///
/// Returns an error if the document cannot be read, parsed, or written.
pub fn write_version(path: &Path, version: &Version) -> Result<(), ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut doc = parse_document(path, &content)?;
    doc.insert(
        VERSION_FIELD.to_string(),
        Value::String(version.to_string()),
    );

    let indent = detect_indent(&content);
    let mut buf = Vec::with_capacity(content.len() + 16);
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    Value::Object(doc)
        .serialize(&mut serializer)
        .map_err(|source| ManifestError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
    buf.push(b'\n');

    std::fs::write(path, buf).map_err(|source| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// # Errors
///
/// Returns `ManifestError::VerificationFailed` if the version in the document
/// does not match the expected version.
pub fn verify_version(path: &Path, expected: &Version) -> Result<(), ManifestError> {
    let actual = read_version(path)?;

    if actual != *expected {
        return Err(ManifestError::VerificationFailed {
            path: path.to_path_buf(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }

    Ok(())
}

/// Uses the leading whitespace of the first indented line.
fn detect_indent(content: &str) -> Vec<u8> {
    content
        .lines()
        .skip(1)
        .map(|line| {
            let trimmed = line.trim_start_matches([' ', '\t']);
            &line[..line.len() - trimmed.len()]
        })
        .find(|indent| !indent.is_empty())
        .map_or_else(|| DEFAULT_INDENT.to_vec(), |indent| indent.as_bytes().to_vec())
}
