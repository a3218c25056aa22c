use debbump_operations::operations::EntryPlan;

use super::PlanFormatter;
use crate::error::Result;

pub(crate) struct PlainTextFormatter;

impl PlanFormatter for PlainTextFormatter {
    fn format_plan(&self, plan: &EntryPlan) -> Result<String> {
        Ok(plan.next.version.clone())
    }
}
