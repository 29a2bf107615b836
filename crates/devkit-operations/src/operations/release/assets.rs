use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{OperationError, Result};

/// Every regular file below `build_dir`, sorted by path.
///
/// A missing directory yields no assets.
///
/// # Errors
///
/// Returns an error if the directory tree cannot be walked.
pub fn collect_assets(build_dir: &Path) -> Result<Vec<PathBuf>> {
    if !build_dir.exists() {
        return Ok(Vec::new());
    }

    let mut assets = Vec::new();
    for entry in WalkDir::new(build_dir) {
        let entry = entry.map_err(|source| OperationError::AssetCollection {
            path: build_dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() {
            assets.push(entry.into_path());
        }
    }

    assets.sort();
    Ok(assets)
}
