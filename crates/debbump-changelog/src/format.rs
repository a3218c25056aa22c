use std::fmt;

use chrono::{DateTime, TimeZone};

use debbump_core::{ChangelogHeader, Identity};
use debbump_parse::format_header;

/// `Fri, 13 Jul 2012 15:05:04 +0300`
pub const TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// A trailer-line date, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp(String);

impl Timestamp {
    #[must_use]
    pub fn from_datetime<Tz>(datetime: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self(datetime.format(TIMESTAMP_FORMAT).to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders the text of a new changelog entry. The bullet line keeps a
/// trailing space so the editor cursor lands after `* `.
#[must_use]
pub fn format_entry(header: &ChangelogHeader, identity: &Identity, timestamp: &Timestamp) -> String {
    let mut output = String::new();

    output.push_str(&format_header(header));
    output.push_str("\n\n");
    output.push_str("  * \n");
    output.push('\n');
    output.push_str(" -- ");
    output.push_str(identity.full_name());
    output.push_str(" <");
    output.push_str(identity.email());
    output.push_str(">  ");
    output.push_str(timestamp.as_str());
    output.push_str("\n\n");

    output
}
