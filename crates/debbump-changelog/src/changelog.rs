use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::entry::RenderedEntry;
use crate::error::ChangelogError;

/// Location of the changelog relative to a source package root.
pub const CHANGELOG_PATH: &str = "debian/changelog";

#[derive(Debug, Clone)]
pub struct Changelog {
    path: PathBuf,
    content: String,
}

impl Changelog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `ChangelogError::NotFound` if the file does not exist and
    /// `ChangelogError::Read` for any other IO failure.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ChangelogError::NotFound {
                    path: path.to_path_buf(),
                    source,
                }
            } else {
                ChangelogError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Ok(Self::new(path, content))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Header line of the most recent entry, without its line ending.
    ///
    /// # Errors
    ///
    /// Returns `ChangelogError::Empty` if the changelog has no content.
    pub fn first_line(&self) -> Result<&str> {
        let line = self
            .content
            .lines()
            .next()
            .ok_or_else(|| ChangelogError::Empty {
                path: self.path.clone(),
            })?;

        Ok(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Returns the file content with `entry` placed above everything else.
    #[must_use]
    pub fn prepend(&self, entry: &RenderedEntry) -> String {
        let mut output = String::with_capacity(entry.text().len() + self.content.len());
        output.push_str(entry.text());
        output.push_str(&self.content);
        output
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use debbump_core::{ChangelogHeader, Identity};
    use tempfile::TempDir;

    use super::*;
    use crate::format::Timestamp;

    const EXISTING: &str = "\
mypkg (1.2.3) unstable; urgency=low

  * Initial release.

 -- Jane Doe <jane@example.org>  Fri, 13 Jul 2012 15:05:04 +0300
";

    #[test]
    fn reads_existing_file() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("changelog");
        std::fs::write(&path, EXISTING)?;

        let changelog = Changelog::from_file(&path)?;

        assert_eq!(changelog.path(), path);
        assert_eq!(changelog.content(), EXISTING);
        assert_eq!(changelog.first_line()?, "mypkg (1.2.3) unstable; urgency=low");

        Ok(())
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("debian").join("changelog");

        let err = Changelog::from_file(&path).expect_err("should fail");

        assert!(matches!(err, ChangelogError::NotFound { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn directory_is_a_read_error() {
        let dir = TempDir::new().expect("create temp dir");

        let err = Changelog::from_file(dir.path()).expect_err("should fail");

        assert!(matches!(err, ChangelogError::Read { .. }));
    }

    #[test]
    fn first_line_strips_carriage_return() {
        let changelog = Changelog::new(CHANGELOG_PATH, "pkg (1.0) unstable; urgency=low\r\n\r\n");

        assert_eq!(
            changelog.first_line().expect("has a line"),
            "pkg (1.0) unstable; urgency=low"
        );
    }

    #[test]
    fn first_line_without_trailing_newline() {
        let changelog = Changelog::new(CHANGELOG_PATH, "pkg (1.0) unstable; urgency=low");

        assert_eq!(
            changelog.first_line().expect("has a line"),
            "pkg (1.0) unstable; urgency=low"
        );
    }

    #[test]
    fn empty_changelog_has_no_first_line() {
        let changelog = Changelog::new(CHANGELOG_PATH, "");

        let err = changelog.first_line().expect_err("should fail");

        assert!(matches!(err, ChangelogError::Empty { .. }));
    }

    #[test]
    fn prepend_places_entry_above_previous_content() {
        let changelog = Changelog::new(CHANGELOG_PATH, EXISTING);
        let header = ChangelogHeader {
            package_name: "mypkg".to_string(),
            version: "1.2.4".to_string(),
            distribution: "unstable".to_string(),
            urgency: "urgency=low".to_string(),
        };
        let identity = Identity::new("Jane Doe", "jane@example.org").expect("valid identity");
        let timestamp = Timestamp::from_datetime(
            &Utc.with_ymd_and_hms(2012, 7, 14, 8, 0, 0)
                .single()
                .expect("valid datetime"),
        );
        let entry = RenderedEntry::render(header, &identity, &timestamp);

        let content = changelog.prepend(&entry);

        assert!(content.starts_with("mypkg (1.2.4) unstable; urgency=low\n\n  * \n\n"));
        assert!(content.ends_with(EXISTING));
        assert_eq!(content.len(), entry.text().len() + EXISTING.len());
    }
}
