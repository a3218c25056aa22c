use debbump_core::{ChangelogHeader, Identity};

use crate::format::{Timestamp, format_entry};

/// The text block placed above the existing changelog content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    header: ChangelogHeader,
    text: String,
}

impl RenderedEntry {
    #[must_use]
    pub fn render(header: ChangelogHeader, identity: &Identity, timestamp: &Timestamp) -> Self {
        let text = format_entry(&header, identity, timestamp);
        Self { header, text }
    }

    #[must_use]
    pub fn header(&self) -> &ChangelogHeader {
        &self.header
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
