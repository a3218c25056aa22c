mod formatter;
mod json;
mod plain;

use clap::ValueEnum;

pub(crate) use formatter::PlanFormatter;
pub(crate) use json::JsonFormatter;
pub(crate) use plain::PlainTextFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum OutputFormat {
    /// The next version only
    #[default]
    Plain,
    /// Previous and next header fields as JSON
    Json,
}
