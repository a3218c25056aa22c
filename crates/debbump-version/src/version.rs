use std::fmt;
use std::str::FromStr;

use crate::error::VersionError;

const EPOCH_SEPARATOR: char = ':';
const REVISION_SEPARATOR: char = '-';

/// A Debian version split into `[epoch:]upstream_version[-debian_revision]`.
///
/// The epoch keeps its trailing `:` and the revision keeps its leading `-`,
/// so `Display` reassembles the exact input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString {
    epoch: Option<String>,
    upstream_version: String,
    debian_revision: Option<String>,
}

impl VersionString {
    /// A prefix before the first `:` only counts as an epoch when it is all
    /// digits and an upstream part follows it; otherwise the colon belongs to
    /// the upstream version.
    ///
    /// # Errors
    ///
    /// Returns `VersionError::Malformed` if the version or its upstream part
    /// is empty.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        let malformed = |reason| VersionError::Malformed {
            version: version.to_string(),
            reason,
        };

        if version.is_empty() {
            return Err(malformed("version is empty"));
        }

        let epoch_split = version
            .split_once(EPOCH_SEPARATOR)
            .filter(|(digits, rest)| is_epoch(digits) && !split_revision(rest).0.is_empty());

        let (epoch, rest) = match epoch_split {
            Some((digits, rest)) => (Some(format!("{digits}{EPOCH_SEPARATOR}")), rest),
            None => (None, version),
        };

        let (upstream_version, debian_revision) = split_revision(rest);
        if upstream_version.is_empty() {
            return Err(malformed("upstream version is empty"));
        }

        Ok(Self {
            epoch,
            upstream_version: upstream_version.to_string(),
            debian_revision: debian_revision.map(str::to_string),
        })
    }

    /// Epoch including the trailing `:`.
    #[must_use]
    pub fn epoch(&self) -> Option<&str> {
        self.epoch.as_deref()
    }

    #[must_use]
    pub fn upstream_version(&self) -> &str {
        &self.upstream_version
    }

    /// Revision including the leading `-`.
    #[must_use]
    pub fn debian_revision(&self) -> Option<&str> {
        self.debian_revision.as_deref()
    }

    /// Returns a copy with only the upstream part replaced.
    #[must_use]
    pub fn with_upstream_version(&self, upstream_version: impl Into<String>) -> Self {
        Self {
            upstream_version: upstream_version.into(),
            ..self.clone()
        }
    }
}

fn is_epoch(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Splits at the first `-`; the revision keeps its dash.
fn split_revision(rest: &str) -> (&str, Option<&str>) {
    match rest.find(REVISION_SEPARATOR) {
        Some(pos) => (&rest[..pos], Some(&rest[pos..])),
        None => (rest, None),
    }
}

impl FromStr for VersionString {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(epoch) = &self.epoch {
            f.write_str(epoch)?;
        }
        f.write_str(&self.upstream_version)?;
        if let Some(revision) = &self.debian_revision {
            f.write_str(revision)?;
        }
        Ok(())
    }
}
