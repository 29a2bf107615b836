use crate::Result;

use super::Repository;

impl Repository {
    /// Names of all tags in the repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag list cannot be read.
    pub fn tags(&self) -> Result<Vec<String>> {
        let names = self.inner.tag_names(None)?;
        Ok(names.iter().flatten().map(String::from).collect())
    }
}
