use debbump_core::ChangelogHeader;

#[must_use]
pub fn format_header(header: &ChangelogHeader) -> String {
    format!(
        "{} ({}) {}; {}",
        header.package_name, header.version, header.distribution, header.urgency
    )
}
