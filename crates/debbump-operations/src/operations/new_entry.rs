use std::path::PathBuf;

use debbump_changelog::RenderedEntry;
use debbump_core::Identity;
use tracing::debug;

use super::entry_planner::{EntryPlan, EntryPlanner, HeaderOverrides};
use crate::Result;
use crate::traits::{ChangelogReader, Clock, EditOutcome, EntryEditor};

pub struct NewEntryInput {
    pub changelog_path: PathBuf,
    pub identity: Identity,
    pub overrides: HeaderOverrides,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Written,
    Unchanged,
    /// Nothing was written; carries the content the changelog would have.
    DryRun { content: String },
}

#[derive(Debug)]
pub struct NewEntryOutput {
    pub plan: EntryPlan,
    pub entry: RenderedEntry,
    pub outcome: EntryOutcome,
}

pub struct NewEntryOperation<R, E, C> {
    planner: EntryPlanner<R>,
    editor: E,
    clock: C,
}

impl<R, E, C> NewEntryOperation<R, E, C>
where
    R: ChangelogReader,
    E: EntryEditor,
    C: Clock,
{
    pub fn new(changelog_reader: R, editor: E, clock: C) -> Self {
        Self {
            planner: EntryPlanner::new(changelog_reader),
            editor,
            clock,
        }
    }

    /// # Errors
    ///
    /// Returns an error if the entry cannot be planned or if the edit
    /// session fails.
    pub fn execute(&self, input: NewEntryInput) -> Result<NewEntryOutput> {
        let plan = self.planner.plan(&input.changelog_path, &input.overrides)?;

        let entry = RenderedEntry::render(plan.next.clone(), &input.identity, &self.clock.now());
        let content = plan.changelog.prepend(&entry);

        let outcome = if input.dry_run {
            EntryOutcome::DryRun { content }
        } else {
            match self
                .editor
                .prompt_and_maybe_persist(&content, &input.changelog_path)?
            {
                EditOutcome::Persisted => EntryOutcome::Written,
                EditOutcome::Unchanged => EntryOutcome::Unchanged,
            }
        };

        debug!(version = %plan.next.version, ?outcome, "new entry finished");

        Ok(NewEntryOutput {
            plan,
            entry,
            outcome,
        })
    }
}
