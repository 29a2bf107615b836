use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("failed to read changelog at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render changelog section for {version}")]
    Render {
        version: String,
        #[source]
        source: pulldown_cmark_to_cmark::Error,
    },
}
