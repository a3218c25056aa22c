use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::process::Command;
use std::time::SystemTime;

use debbump_changelog::ChangelogError;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::Result;
use crate::error::OperationError;
use crate::traits::{EditOutcome, EntryEditor};

const TEMP_FILE_PREFIX: &str = "changelog.";

/// Runs an interactive editor command against a scratch copy of the content.
///
/// The command may carry arguments (`"code --wait"`); the scratch file path
/// is appended as the last argument.
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    #[must_use]
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl EntryEditor for ExternalEditor {
    fn prompt_and_maybe_persist(&self, content: &str, target: &Path) -> Result<EditOutcome> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or(OperationError::EmptyEditorCommand)?;
        let args: Vec<&str> = parts.collect();

        let scratch = write_scratch_file(content)?;
        let before = modified_time(scratch.path())?;

        debug!(
            editor = %self.command,
            scratch = %scratch.path().display(),
            "launching editor"
        );

        let status = Command::new(program)
            .args(&args)
            .arg(scratch.path())
            .status()
            .map_err(|source| OperationError::EditorLaunch {
                command: self.command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(OperationError::EditorFailed {
                command: self.command.clone(),
                status,
            });
        }

        if modified_time(scratch.path())? == before {
            debug!("scratch file not saved, leaving changelog untouched");
            return Ok(EditOutcome::Unchanged);
        }

        let edited = fs::read(scratch.path()).map_err(OperationError::TempFile)?;
        fs::write(target, edited).map_err(|source| ChangelogError::Write {
            path: target.to_path_buf(),
            source,
        })?;

        debug!(target = %target.display(), "changelog updated");
        Ok(EditOutcome::Persisted)
    }
}

fn write_scratch_file(content: &str) -> Result<NamedTempFile> {
    let mut scratch = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .tempfile()
        .map_err(OperationError::TempFile)?;

    scratch
        .write_all(content.as_bytes())
        .map_err(OperationError::TempFile)?;
    scratch.flush().map_err(OperationError::TempFile)?;

    // Backdated so that a save within the same timestamp tick still shows up.
    scratch
        .as_file()
        .set_modified(SystemTime::UNIX_EPOCH)
        .map_err(OperationError::TempFile)?;

    Ok(scratch)
}

fn modified_time(path: &Path) -> Result<SystemTime> {
    fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(OperationError::TempFile)
}
