use std::path::PathBuf;

use debbump_core::Identity;
use debbump_operations::operations::{EntryOutcome, NewEntryInput, NewEntryOperation};
use debbump_operations::providers::{ExternalEditor, FileSystemChangelogReader, SystemClock};
use tracing::debug;

use super::{NewArgs, with_source_package_hint};
use crate::environment::non_interactive_reason;
use crate::error::{CliError, Result};

pub(super) fn run(args: NewArgs, changelog_path: PathBuf) -> Result<()> {
    let identity = Identity::new(
        args.full_name.unwrap_or_default(),
        args.email.unwrap_or_default(),
    )?;

    if !args.dry_run {
        if let Some(reason) = non_interactive_reason() {
            debug!(%reason, "refusing to launch an editor");
            return Err(CliError::NotATty { reason });
        }
    }

    let operation = NewEntryOperation::new(
        FileSystemChangelogReader::new(),
        ExternalEditor::new(args.editor),
        SystemClock,
    );
    let input = NewEntryInput {
        changelog_path,
        identity,
        overrides: args.overrides.into(),
        dry_run: args.dry_run,
    };

    let output = operation.execute(input).map_err(with_source_package_hint)?;
    let header = output.entry.header();

    match output.outcome {
        EntryOutcome::DryRun { .. } => print!("{}", output.entry.text()),
        EntryOutcome::Written => println!(
            "Added {} ({}) to {}",
            header.package_name,
            header.version,
            output.plan.changelog.path().display()
        ),
        EntryOutcome::Unchanged => {
            println!("Entry not saved; {} left unchanged", output.plan.changelog.path().display());
        }
    }

    Ok(())
}
