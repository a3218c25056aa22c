mod changelog_reader;
mod clock;
mod editor;

pub use changelog_reader::ChangelogReader;
pub use clock::Clock;
pub use editor::{EditOutcome, EntryEditor};
