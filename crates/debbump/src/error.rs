use std::path::PathBuf;

use debbump_core::IdentityError;
use debbump_operations::OperationError;
use thiserror::Error;

use crate::environment::NonInteractiveReason;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("invalid maintainer identity")]
    Identity(#[from] IdentityError),

    #[error(
        "no changelog at '{}'; run debbump in a source package containing debian/changelog",
        path.display()
    )]
    NotASourcePackage {
        path: PathBuf,
        #[source]
        source: OperationError,
    },

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error(
        "interactive editing requires a terminal ({reason}); use --dry-run to print the entry instead"
    )]
    NotATty { reason: NonInteractiveReason },

    #[error("failed to serialize output")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
