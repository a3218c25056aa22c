use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("maintainer full name is empty (set DEBFULLNAME or pass --full-name)")]
    EmptyFullName,

    #[error("maintainer email is empty (set DEBEMAIL or pass --email)")]
    EmptyEmail,
}
