use std::cmp::Ordering;

use semver::Version;

use crate::Result;
use crate::error::VersionError;

/// Validates a manually entered version.
///
/// Returns `Ok(None)` for empty input, which callers treat as an abort.
/// Duplicates are detected before the format check so that a released tag
/// typed verbatim (`v1.2.0`) is reported as a duplicate.
///
/// # Errors
///
/// Returns [`VersionError::DuplicateVersion`] if the candidate was already released,
/// [`VersionError::InvalidFormat`] if it is not `MAJOR.MINOR.PATCH` semver, and
/// [`VersionError::NotGreaterThanCurrent`] if it does not exceed `current`.
pub fn validate_candidate(
    input: &str,
    existing: &[Version],
    current: Option<&Version>,
) -> Result<Option<Version>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let unprefixed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    if let Some(version) = existing.iter().find(|v| v.to_string() == unprefixed) {
        return Err(VersionError::DuplicateVersion {
            version: version.clone(),
        });
    }

    let candidate = Version::parse(trimmed).map_err(|source| VersionError::InvalidFormat {
        input: trimmed.to_string(),
        source,
    })?;

    // Build metadata does not distinguish releases.
    if let Some(version) = existing
        .iter()
        .find(|v| v.cmp_precedence(&candidate) == Ordering::Equal)
    {
        return Err(VersionError::DuplicateVersion {
            version: version.clone(),
        });
    }

    if let Some(current) = current {
        if candidate.cmp_precedence(current) != Ordering::Greater {
            return Err(VersionError::NotGreaterThanCurrent {
                candidate,
                current: current.clone(),
            });
        }
    }

    Ok(Some(candidate))
}

/// Parses a release tag such as `1.4.0` or `v1.4.0`.
#[must_use]
pub fn parse_tag_version(tag: &str) -> Option<Version> {
    let tag = tag.trim();
    let tag = tag.strip_prefix('v').unwrap_or(tag);
    Version::parse(tag).ok()
}

#[must_use]
pub fn sorted_versions(versions: impl IntoIterator<Item = Version>) -> Vec<Version> {
    let mut versions: Vec<Version> = versions.into_iter().collect();
    versions.sort();
    versions.dedup();
    versions
}
