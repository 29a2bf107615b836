use semver::Version;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("'{input}' is not a valid semantic version (expected MAJOR.MINOR.PATCH)")]
    InvalidFormat {
        input: String,
        #[source]
        source: semver::Error,
    },

    #[error("version {version} has already been released")]
    DuplicateVersion { version: Version },

    #[error("version {candidate} must be greater than the current version {current}")]
    NotGreaterThanCurrent { candidate: Version, current: Version },
}
