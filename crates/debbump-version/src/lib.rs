mod error;
mod increment;
mod version;

pub use error::VersionError;
pub use increment::increment_version;
pub use version::VersionString;
