mod changelog;
mod error;
mod notes;

pub use changelog::Changelog;
pub use error::ChangelogError;
pub use notes::{comparison_url, compose_release_notes};

pub type Result<T> = std::result::Result<T, ChangelogError>;
