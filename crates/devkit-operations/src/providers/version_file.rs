use std::path::Path;

use semver::Version;

use crate::Result;
use crate::traits::VersionFileWriter;

pub struct JsonVersionFileWriter;

impl JsonVersionFileWriter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonVersionFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionFileWriter for JsonVersionFileWriter {
    fn read_version(&self, path: &Path) -> Result<Version> {
        Ok(devkit_manifest::read_version(path)?)
    }

    fn write_version(&self, path: &Path, version: &Version) -> Result<()> {
        devkit_manifest::write_version(path, version)?;
        Ok(devkit_manifest::verify_version(path, version)?)
    }
}
