use serde::Serialize;

use crate::error::IdentityError;

/// The fields of a changelog entry header line:
/// `<package_name> (<version>) <distribution>; <urgency>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangelogHeader {
    pub package_name: String,
    pub version: String,
    pub distribution: String,
    pub urgency: String,
}

impl ChangelogHeader {
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_distribution(mut self, distribution: impl Into<String>) -> Self {
        self.distribution = distribution.into();
        self
    }

    #[must_use]
    pub fn with_urgency(mut self, urgency: impl Into<String>) -> Self {
        self.urgency = urgency.into();
        self
    }
}

/// Maintainer identity written into the trailer line of a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    full_name: String,
    email: String,
}

impl Identity {
    /// # Errors
    ///
    /// Returns an error if either field is empty or whitespace only.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let full_name = full_name.into();
        let email = email.into();

        if full_name.trim().is_empty() {
            return Err(IdentityError::EmptyFullName);
        }
        if email.trim().is_empty() {
            return Err(IdentityError::EmptyEmail);
        }

        Ok(Self { full_name, email })
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
