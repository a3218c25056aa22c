use std::path::Path;

use debbump_operations::operations::EntryPlanner;
use debbump_operations::providers::FileSystemChangelogReader;

use super::{NextArgs, with_source_package_hint};
use crate::error::Result;
use crate::output::{JsonFormatter, OutputFormat, PlainTextFormatter, PlanFormatter};

pub(super) fn run(args: NextArgs, changelog_path: &Path) -> Result<()> {
    let planner = EntryPlanner::new(FileSystemChangelogReader::new());
    let plan = planner
        .plan(changelog_path, &args.overrides.into())
        .map_err(with_source_package_hint)?;

    let formatted = match args.format {
        OutputFormat::Plain => PlainTextFormatter.format_plan(&plan)?,
        OutputFormat::Json => JsonFormatter.format_plan(&plan)?,
    };
    println!("{formatted}");

    Ok(())
}
