//! Apply command implementation

use crate::context::Project;
use crate::error::Result;

use super::execute_plan;

/// Run the apply command
pub fn run_apply(project: &Project, dry_run: bool) -> Result<()> {
    let plan = project.plan()?;
    tracing::debug!(patches = plan.len(), dry_run, "Applying plan");
    execute_plan(project, &plan, dry_run)
}
