use crate::error::VersionError;
use crate::version::VersionString;

const COMPONENT_SEPARATOR: char = '.';

impl VersionString {
    /// Returns the next version, changing only the upstream part.
    ///
    /// Only all-numeric, dot-separated upstream versions are incremented; any
    /// other upstream version is returned unchanged.
    #[must_use]
    pub fn incremented(&self) -> Self {
        self.with_upstream_version(increment_upstream(self.upstream_version()))
    }
}

/// Decomposes `version`, increments its upstream part and reassembles it.
///
/// # Errors
///
/// Returns `VersionError::Malformed` if the version cannot be decomposed.
pub fn increment_version(version: &str) -> Result<String, VersionError> {
    Ok(VersionString::parse(version)?.incremented().to_string())
}

fn increment_upstream(upstream: &str) -> String {
    if !upstream.split(COMPONENT_SEPARATOR).all(is_numeric) {
        return upstream.to_string();
    }

    let mut components: Vec<String> = upstream
        .split(COMPONENT_SEPARATOR)
        .map(|c| strip_leading_zeros(c).to_string())
        .collect();

    // Odometer: every component but the first rolls over at 10.
    let mut index = components.len() - 1;
    loop {
        components[index] = add_one(&components[index]);

        if index == 0 || components[index].len() == 1 {
            break;
        }

        components[index] = "0".to_string();
        index -= 1;
    }

    components.join(".")
}

fn is_numeric(component: &str) -> bool {
    !component.is_empty() && component.bytes().all(|b| b.is_ascii_digit())
}

fn strip_leading_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() { "0" } else { stripped }
}

/// Adds one to a normalized decimal string without a width limit.
fn add_one(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();

    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return bytes.into_iter().map(char::from).collect();
        }
    }

    std::iter::once('1')
        .chain(bytes.into_iter().map(char::from))
        .collect()
}
