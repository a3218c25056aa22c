use debbump_operations::operations::EntryPlan;

use crate::error::Result;

pub(crate) trait PlanFormatter {
    fn format_plan(&self, plan: &EntryPlan) -> Result<String>;
}
