use std::path::Path;

use semver::Version;

use crate::Result;

pub trait VersionFileWriter: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or has no valid version.
    fn read_version(&self, path: &Path) -> Result<Version>;

    /// # Errors
    ///
    /// Returns an error if the document cannot be read, parsed, or written.
    fn write_version(&self, path: &Path, version: &Version) -> Result<()>;
}
