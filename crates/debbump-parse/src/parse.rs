use std::sync::LazyLock;

use regex::Regex;

use debbump_core::ChangelogHeader;

use crate::error::HeaderError;

static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<package_name>[^\s();][^();]*?) \((?P<version>[^)]*)\) (?P<distribution>[^();]+); (?P<urgency>[^();]+)$",
    )
    .expect("Invalid changelog header regex")
});

/// Parses the header line of a changelog entry.
///
/// The whole line must match; nothing is silently truncated.
#[must_use = "parsing result should be handled"]
pub fn parse_header(line: &str) -> Result<ChangelogHeader, HeaderError> {
    let malformed = || HeaderError::Malformed {
        line: line.to_string(),
    };

    let captures = HEADER_REGEX.captures(line).ok_or_else(malformed)?;
    let field = |name: &str| {
        captures
            .name(name)
            .map(|m| m.as_str().to_string())
            .ok_or_else(malformed)
    };

    Ok(ChangelogHeader {
        package_name: field("package_name")?,
        version: field("version")?,
        distribution: field("distribution")?,
        urgency: field("urgency")?,
    })
}
