use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{FixedOffset, TimeZone};
use debbump_changelog::{Changelog, ChangelogError, Timestamp};

use crate::traits::{ChangelogReader, Clock, EditOutcome, EntryEditor};
use crate::{OperationError, Result};

pub struct MockChangelogReader {
    changelogs: HashMap<PathBuf, String>,
}

impl MockChangelogReader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            changelogs: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_changelog(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.changelogs.insert(path.into(), content.to_string());
        self
    }
}

impl Default for MockChangelogReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogReader for MockChangelogReader {
    fn read_changelog(&self, path: &Path) -> Result<Changelog> {
        match self.changelogs.get(path) {
            Some(content) => Ok(Changelog::new(path, content.clone())),
            None => Err(ChangelogError::NotFound {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }
            .into()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum EditorBehavior {
    Save,
    Discard,
    Fail,
}

/// Records every prompt as `(target, content)`.
pub struct MockEntryEditor {
    behavior: EditorBehavior,
    prompts: Mutex<Vec<(PathBuf, String)>>,
}

impl MockEntryEditor {
    fn with_behavior(behavior: EditorBehavior) -> Self {
        Self {
            behavior,
            prompts: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn saving() -> Self {
        Self::with_behavior(EditorBehavior::Save)
    }

    #[must_use]
    pub fn discarding() -> Self {
        Self::with_behavior(EditorBehavior::Discard)
    }

    #[must_use]
    pub fn failing() -> Self {
        Self::with_behavior(EditorBehavior::Fail)
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn prompts(&self) -> Vec<(PathBuf, String)> {
        self.prompts.lock().expect("lock poisoned").clone()
    }
}

impl EntryEditor for MockEntryEditor {
    fn prompt_and_maybe_persist(&self, content: &str, target: &Path) -> Result<EditOutcome> {
        self.prompts
            .lock()
            .expect("lock poisoned")
            .push((target.to_path_buf(), content.to_string()));

        match self.behavior {
            EditorBehavior::Save => Ok(EditOutcome::Persisted),
            EditorBehavior::Discard => Ok(EditOutcome::Unchanged),
            EditorBehavior::Fail => Err(OperationError::TempFile(std::io::Error::other(
                "mock editor failure",
            ))),
        }
    }
}

impl EntryEditor for Arc<MockEntryEditor> {
    fn prompt_and_maybe_persist(&self, content: &str, target: &Path) -> Result<EditOutcome> {
        (**self).prompt_and_maybe_persist(content, target)
    }
}

/// Always reports `Fri, 13 Jul 2012 15:05:04 +0300`.
pub struct FixedClock;

impl FixedClock {
    pub const TIMESTAMP: &'static str = "Fri, 13 Jul 2012 15:05:04 +0300";
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        let offset = FixedOffset::east_opt(3 * 3600).expect("valid offset");
        let datetime = offset
            .with_ymd_and_hms(2012, 7, 13, 15, 5, 4)
            .single()
            .expect("valid datetime");
        Timestamp::from_datetime(&datetime)
    }
}
