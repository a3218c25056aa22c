use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("malformed version '{version}': {reason}")]
    Malformed {
        version: String,
        reason: &'static str,
    },
}
