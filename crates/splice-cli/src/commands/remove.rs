//! Remove command implementation

use colored::Colorize;

use crate::context::Project;
use crate::error::{CliError, Result};

use super::execute_plan;

/// Run the remove command
///
/// Strips every block the configuration manages, or only those in `tags`.
pub fn run_remove(project: &Project, tags: &[String], dry_run: bool) -> Result<()> {
    let plan = project.plan()?;

    let unknown: Vec<&str> = tags
        .iter()
        .filter(|tag| !plan.patches().iter().any(|p| p.action.id() == tag.as_str()))
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        return Err(CliError::user(format!(
            "Unknown tag(s): {}. Run {} to see planned tags.",
            unknown.join(", "),
            "splice status".cyan()
        )));
    }

    let removals = plan.removals(tags);
    tracing::debug!(patches = removals.len(), dry_run, "Removing blocks");
    execute_plan(project, &removals, dry_run)
}
