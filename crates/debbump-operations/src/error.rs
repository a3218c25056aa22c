use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Changelog(#[from] debbump_changelog::ChangelogError),

    #[error(transparent)]
    Header(#[from] debbump_parse::HeaderError),

    #[error("version calculation failed")]
    VersionCalculation(#[from] debbump_version::VersionError),

    #[error("failed to prepare temporary file for editing")]
    TempFile(#[source] std::io::Error),

    #[error("editor command is empty")]
    EmptyEditorCommand,

    #[error("failed to launch editor '{command}'")]
    EditorLaunch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("editor '{command}' exited with status: {status}")]
    EditorFailed { command: String, status: ExitStatus },
}

pub type Result<T> = std::result::Result<T, OperationError>;
