use debbump_core::ChangelogHeader;
use debbump_operations::operations::EntryPlan;
use serde::Serialize;

use super::PlanFormatter;
use crate::error::Result;

#[derive(Serialize)]
struct PlanOutput<'a> {
    previous: &'a ChangelogHeader,
    next: &'a ChangelogHeader,
}

pub(crate) struct JsonFormatter;

impl PlanFormatter for JsonFormatter {
    fn format_plan(&self, plan: &EntryPlan) -> Result<String> {
        let output = PlanOutput {
            previous: &plan.previous,
            next: &plan.next,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
