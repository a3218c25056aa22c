mod new;
mod next;

use std::path::Path;

use clap::{Args, Subcommand};
use debbump_changelog::{CHANGELOG_PATH, ChangelogError};
use debbump_operations::OperationError;
use debbump_operations::operations::HeaderOverrides;

use crate::error::{CliError, Result};
use crate::output::OutputFormat;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Prepare a new changelog entry and open it in an editor
    New(NewArgs),
    /// Print the version the next changelog entry would get
    Next(NextArgs),
}

#[derive(Args)]
pub(crate) struct OverrideArgs {
    /// Distribution for the new entry (default: same as the previous entry)
    #[arg(long, short = 'D')]
    pub distribution: Option<String>,

    /// Urgency for the new entry, e.g. "urgency=medium" (default: same as the previous entry)
    #[arg(long, short = 'u')]
    pub urgency: Option<String>,
}

impl From<OverrideArgs> for HeaderOverrides {
    fn from(args: OverrideArgs) -> Self {
        Self {
            distribution: args.distribution,
            urgency: args.urgency,
        }
    }
}

#[derive(Args)]
pub(crate) struct NewArgs {
    /// Maintainer full name
    #[arg(long, env = "DEBFULLNAME")]
    pub full_name: Option<String>,

    /// Maintainer email address
    #[arg(long, env = "DEBEMAIL")]
    pub email: Option<String>,

    /// Editor command used to edit the new entry
    #[arg(long, env = "EDITOR", default_value = "vim")]
    pub editor: String,

    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Print the new entry instead of opening an editor
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub(crate) struct NextArgs {
    #[command(flatten)]
    pub overrides: OverrideArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

impl Commands {
    pub(crate) fn execute(self, package_root: &Path) -> Result<()> {
        let changelog_path = package_root.join(CHANGELOG_PATH);
        match self {
            Self::New(args) => new::run(args, changelog_path),
            Self::Next(args) => next::run(args, &changelog_path),
        }
    }
}

/// Turns a missing changelog into a hint about where to run the tool.
fn with_source_package_hint(error: OperationError) -> CliError {
    if let OperationError::Changelog(ChangelogError::NotFound { path, .. }) = &error {
        let path = path.clone();
        return CliError::NotASourcePackage {
            path,
            source: error,
        };
    }
    error.into()
}
