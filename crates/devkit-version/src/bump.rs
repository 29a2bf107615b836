use std::fmt;

use semver::{BuildMetadata, Prerelease, Version};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        };
        write!(f, "{s}")
    }
}

#[must_use]
pub fn bump_version(version: &Version, bump_type: BumpType) -> Version {
    let mut new_version = version.clone();
    new_version.pre = Prerelease::EMPTY;
    new_version.build = BuildMetadata::EMPTY;

    match bump_type {
        BumpType::Major => {
            new_version.major += 1;
            new_version.minor = 0;
            new_version.patch = 0;
        }
        BumpType::Minor => {
            new_version.minor += 1;
            new_version.patch = 0;
        }
        BumpType::Patch => {
            new_version.patch += 1;
        }
    }

    new_version
}

/// The three canonical successors of a released version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpChoices {
    pub patch: Version,
    pub minor: Version,
    pub major: Version,
}

impl BumpChoices {
    #[must_use]
    pub fn from_current(current: &Version) -> Self {
        Self {
            patch: bump_version(current, BumpType::Patch),
            minor: bump_version(current, BumpType::Minor),
            major: bump_version(current, BumpType::Major),
        }
    }

    #[must_use]
    pub fn get(&self, bump_type: BumpType) -> &Version {
        match bump_type {
            BumpType::Patch => &self.patch,
            BumpType::Minor => &self.minor,
            BumpType::Major => &self.major,
        }
    }
}
