use std::path::Path;

use debbump_changelog::Changelog;

use crate::Result;
use crate::traits::ChangelogReader;

pub struct FileSystemChangelogReader;

impl FileSystemChangelogReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemChangelogReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogReader for FileSystemChangelogReader {
    fn read_changelog(&self, path: &Path) -> Result<Changelog> {
        Ok(Changelog::from_file(path)?)
    }
}
