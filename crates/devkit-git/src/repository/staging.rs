use std::path::Path;

use crate::Result;

use super::Repository;

impl Repository {
    /// # Errors
    ///
    /// Returns an error if staging any of the files fails.
    pub fn stage_files(&self, paths: &[&Path]) -> Result<()> {
        let mut index = self.inner.index()?;

        for path in paths {
            let relative_path = self.to_relative_path(path);

            if path.exists() || self.root().join(&relative_path).exists() {
                index.add_path(&relative_path)?;
            } else {
                index.remove_path(&relative_path)?;
            }
        }

        index.write()?;
        Ok(())
    }

    /// Unstages everything, leaving the working tree untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the index cannot be rebuilt from HEAD.
    pub fn reset_staged(&self) -> Result<()> {
        let mut index = self.inner.index()?;

        match self.inner.head() {
            Ok(head) => {
                let tree = head.peel_to_tree()?;
                index.read_tree(&tree)?;
            }
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => index.clear()?,
            Err(e) => return Err(e.into()),
        }

        index.write()?;
        Ok(())
    }
}
