use std::path::Path;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Persisted,
    Unchanged,
}

pub trait EntryEditor: Send + Sync {
    /// Lets the user edit `content` and writes it to `target` only if the
    /// edited copy was saved. Blocks until the edit session ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the edit session cannot be run or the result
    /// cannot be written.
    fn prompt_and_maybe_persist(&self, content: &str, target: &Path) -> Result<EditOutcome>;
}
