mod entry_planner;
mod new_entry;

pub use entry_planner::{EntryPlan, EntryPlanner, HeaderOverrides};
pub use new_entry::{EntryOutcome, NewEntryInput, NewEntryOperation, NewEntryOutput};
