use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error(
        "malformed changelog header '{line}': expected '<package> (<version>) <distribution>; <urgency>'"
    )]
    Malformed { line: String },
}
