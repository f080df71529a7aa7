//! Status command implementation

use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;

use splice_fragments::ActionStatus;
use splice_fs::read_text;

use super::status_symbol;
use crate::context::Project;
use crate::error::Result;

/// Status of one planned action, as reported by `--json`.
#[derive(Debug, Serialize)]
struct StatusEntry {
    file: PathBuf,
    tag: String,
    action: &'static str,
    /// `None` when the file could not be read.
    status: Option<ActionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the status command
pub fn run_status(project: &Project, json: bool) -> Result<()> {
    let plan = project.plan()?;
    let mut entries = Vec::with_capacity(plan.len());

    for (file, actions) in plan.by_file() {
        let text = read_text(&project.path(file));
        for action in actions {
            let (status, error) = match &text {
                Ok(text) => (Some(action.status(text)), None),
                Err(e) => (None, Some(e.to_string())),
            };
            entries.push(StatusEntry {
                file: file.to_path_buf(),
                tag: action.id().to_string(),
                action: if action.is_apply() { "apply" } else { "remove" },
                status,
                error,
            });
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "Nothing planned".dimmed());
        return Ok(());
    }

    println!("{}", "Block Status".bold());
    println!();
    for entry in &entries {
        match (entry.status, &entry.error) {
            (Some(status), _) => println!(
                "  {} {:<32} {:<7} {}",
                status_symbol(status),
                entry.tag.cyan(),
                status.to_string(),
                entry.file.display().to_string().dimmed()
            ),
            (None, error) => println!(
                "  {} {:<32} {}",
                "x".red().bold(),
                entry.tag.cyan(),
                error.as_deref().unwrap_or_default()
            ),
        }
    }

    let pending = entries
        .iter()
        .filter(|e| !e.status.is_some_and(|s| s.is_settled()))
        .count();
    println!();
    if pending == 0 {
        println!("{} Every block is up to date.", "OK".green().bold());
    } else {
        println!(
            "{} block(s) need {}.",
            pending.to_string().yellow().bold(),
            "splice apply".cyan()
        );
    }
    Ok(())
}
