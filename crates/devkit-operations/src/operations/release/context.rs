use semver::Version;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseInput {
    /// Replace every mutating step with a log line.
    pub dry_run: bool,
}

/// State of one release attempt once a version has been confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseContext {
    pub version: Version,
    pub previous_version: Option<Version>,
    pub dry_run: bool,
}

impl ReleaseContext {
    #[must_use]
    pub fn new(version: Version, previous_version: Option<Version>, input: &ReleaseInput) -> Self {
        Self {
            version,
            previous_version,
            dry_run: input.dry_run,
        }
    }

    #[must_use]
    pub fn tag(&self) -> String {
        self.version.to_string()
    }
}
