//! Blocks command implementation
//!
//! Lists every generated block in one file, whatever produced it.

use colored::Colorize;
use std::path::Path;

use splice_blocks::parse_blocks;
use splice_fs::read_text;

use crate::error::Result;

/// Run the blocks command
pub fn run_blocks(path: &Path, json: bool) -> Result<()> {
    let text = read_text(path)?;
    let blocks = parse_blocks(&text);

    if json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
        return Ok(());
    }

    if blocks.is_empty() {
        println!("{} {}", "No generated blocks in".dimmed(), path.display());
        return Ok(());
    }

    println!("{} ({})", path.display().to_string().bold(), blocks.len());
    for block in &blocks {
        let fingerprint = block
            .fingerprint
            .as_ref()
            .map_or_else(|| "unreadable".red().to_string(), |fp| fp.to_string().dimmed().to_string());
        println!(
            "  {} lines {}-{} {}",
            block.id.cyan(),
            block.start_line + 1,
            block.end_line + 1,
            fingerprint
        );
    }
    Ok(())
}
