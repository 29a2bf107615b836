mod bump;
mod error;
mod validate;

pub use bump::{BumpChoices, BumpType, bump_version};
pub use error::VersionError;
pub use validate::{parse_tag_version, sorted_versions, validate_candidate};

pub type Result<T> = std::result::Result<T, VersionError>;
