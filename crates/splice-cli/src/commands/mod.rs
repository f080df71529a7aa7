//! Command implementations for splice-cli

pub mod apply;
pub mod blocks;
pub mod remove;
pub mod status;

pub use apply::run_apply;
pub use blocks::run_blocks;
pub use remove::run_remove;
pub use status::run_status;

use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use std::path::Path;

use splice_fragments::{ActionStatus, Plan};
use splice_fs::{read_text, write_if_changed};

use crate::context::Project;
use crate::error::{CliError, Result};

/// Execute `plan` file by file.
///
/// Each file is all-or-nothing: a failing action leaves that file untouched
/// and the remaining files are still processed. Returns an error when any
/// file failed.
pub(crate) fn execute_plan(project: &Project, plan: &Plan, dry_run: bool) -> Result<()> {
    let mut failed = 0usize;
    let mut written = 0usize;
    let (mut added, mut removed) = (0usize, 0usize);

    for (file, actions) in plan.by_file() {
        let path = project.path(file);
        println!("{}", file.display().to_string().bold());

        let text = match read_text(&path) {
            Ok(text) => text,
            Err(e) => {
                println!("  {} {e}", "x".red().bold());
                failed += 1;
                continue;
            }
        };

        for action in &actions {
            let status = action.status(&text);
            println!("  {} {}", status_symbol(status), action.id().cyan());
        }

        let result = match Plan::execute(&text, &actions) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(file = %file.display(), "Leaving file untouched");
                println!("  {} {e}", "x".red().bold());
                failed += 1;
                continue;
            }
        };

        if dry_run {
            if result.changed() {
                print_diff(file, &text, &result.contents);
                let (file_added, file_removed) = line_changes(&text, &result.contents);
                added += file_added;
                removed += file_removed;
                written += 1;
            }
        } else {
            match write_if_changed(&path, &result.contents, result.changed()) {
                Ok(true) => written += 1,
                Ok(false) => {}
                Err(e) => {
                    println!("  {} {e}", "x".red().bold());
                    failed += 1;
                }
            }
        }
    }

    if dry_run {
        println!();
        println!(
            "{} {written} file(s) would change ({}, {}). No files were written.",
            "dry-run".yellow().bold(),
            format!("+{added}").green(),
            format!("-{removed}").red()
        );
    } else {
        println!();
        println!("{} {written} file(s) updated.", "OK".green().bold());
    }

    if failed > 0 {
        return Err(CliError::user(format!("{failed} file(s) could not be patched")));
    }
    Ok(())
}

/// One-character summary of what an action will do.
pub(crate) fn status_symbol(status: ActionStatus) -> colored::ColoredString {
    match status {
        ActionStatus::Missing => "+".green(),
        ActionStatus::Stale => "~".yellow(),
        ActionStatus::Present => "-".red(),
        ActionStatus::Current | ActionStatus::Absent => "=".dimmed(),
    }
}

/// Print a unified diff of `old` to `new`.
pub(crate) fn print_diff(file: &Path, old: &str, new: &str) {
    let name = file.display().to_string();
    let diff = TextDiff::from_lines(old, new);
    let mut unified = diff.unified_diff();
    let formatted = unified
        .context_radius(3)
        .header(&format!("a/{name}"), &format!("b/{name}"))
        .to_string();

    for line in formatted.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else {
            println!("{line}");
        }
    }
}

/// Count of inserted and deleted lines between two texts.
pub(crate) fn line_changes(old: &str, new: &str) -> (usize, usize) {
    TextDiff::from_lines(old, new)
        .iter_all_changes()
        .fold((0, 0), |(added, removed), change| match change.tag() {
            ChangeTag::Insert => (added + 1, removed),
            ChangeTag::Delete => (added, removed + 1),
            ChangeTag::Equal => (added, removed),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_changes_counts_both_sides() {
        assert_eq!(line_changes("a\nb\n", "a\nc\nd\n"), (2, 1));
        assert_eq!(line_changes("same\n", "same\n"), (0, 0));
    }
}
