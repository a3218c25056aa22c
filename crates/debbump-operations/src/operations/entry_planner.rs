use std::path::Path;

use debbump_changelog::Changelog;
use debbump_core::ChangelogHeader;
use debbump_parse::parse_header;
use debbump_version::increment_version;
use tracing::debug;

use crate::Result;
use crate::traits::ChangelogReader;

/// Replacement values for the header fields that are otherwise carried over
/// from the previous entry.
#[derive(Debug, Clone, Default)]
pub struct HeaderOverrides {
    pub distribution: Option<String>,
    pub urgency: Option<String>,
}

/// The header of the most recent entry and the header of the entry to add.
#[derive(Debug, Clone)]
pub struct EntryPlan {
    pub changelog: Changelog,
    pub previous: ChangelogHeader,
    pub next: ChangelogHeader,
}

pub struct EntryPlanner<R> {
    changelog_reader: R,
}

impl<R> EntryPlanner<R>
where
    R: ChangelogReader,
{
    pub fn new(changelog_reader: R) -> Self {
        Self { changelog_reader }
    }

    /// # Errors
    ///
    /// Returns an error if the changelog cannot be read, its first line is
    /// not a valid entry header, or the version in it cannot be decomposed.
    pub fn plan(&self, changelog_path: &Path, overrides: &HeaderOverrides) -> Result<EntryPlan> {
        let changelog = self.changelog_reader.read_changelog(changelog_path)?;
        let previous = parse_header(changelog.first_line()?)?;

        debug!(
            package = %previous.package_name,
            version = %previous.version,
            distribution = %previous.distribution,
            "parsed changelog header"
        );

        let new_version = increment_version(&previous.version)?;
        if new_version == previous.version {
            debug!(version = %new_version, "upstream version is not all-numeric, keeping it");
        } else {
            debug!(from = %previous.version, to = %new_version, "incremented version");
        }

        let mut next = previous.clone().with_version(new_version);
        if let Some(distribution) = &overrides.distribution {
            next = next.with_distribution(distribution.clone());
        }
        if let Some(urgency) = &overrides.urgency {
            next = next.with_urgency(urgency.clone());
        }

        Ok(EntryPlan {
            changelog,
            previous,
            next,
        })
    }
}
