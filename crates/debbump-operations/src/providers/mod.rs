mod changelog;
mod clock;
mod editor;

pub use changelog::FileSystemChangelogReader;
pub use clock::SystemClock;
pub use editor::ExternalEditor;
