mod error;
mod reader;
mod writer;

pub use error::ManifestError;
pub use reader::{read_document, read_version};
pub use writer::{verify_version, write_version};
