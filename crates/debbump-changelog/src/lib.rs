mod changelog;
mod entry;
mod error;
mod format;

pub use changelog::{CHANGELOG_PATH, Changelog};
pub use entry::RenderedEntry;
pub use error::ChangelogError;
pub use format::{TIMESTAMP_FORMAT, Timestamp, format_entry};

pub type Result<T> = std::result::Result<T, ChangelogError>;
