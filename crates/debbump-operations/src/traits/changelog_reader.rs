use std::path::Path;

use debbump_changelog::Changelog;

use crate::Result;

pub trait ChangelogReader: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the changelog does not exist or cannot be read.
    fn read_changelog(&self, path: &Path) -> Result<Changelog>;
}
