use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("no devkit.toml or package.json found traversing from '{start_dir}'")]
    NotFound { start_dir: PathBuf },

    #[error("failed to read config at '{path}'")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at '{path}'")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for '{field}' in '{path}': {reason}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        reason: &'static str,
    },
}
