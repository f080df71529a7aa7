//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use splice_fragments::DEFAULT_CONFIG_FILE;

/// splice - keep generated blocks in native project files up to date
#[derive(Parser, Debug)]
#[command(name = "splice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file
    #[arg(short, long, global = true, env = "SPLICE_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Project root that file paths are relative to (defaults to the config file's directory)
    #[arg(short = 'C', long, global = true)]
    pub root: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Insert or refresh every planned block
    Apply {
        /// Print a diff instead of writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Strip planned blocks from their files
    ///
    /// Examples:
    ///   splice remove                       # every block the config manages
    ///   splice remove -t react-native-maps  # just one
    Remove {
        /// Only remove blocks with these tags
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Print a diff instead of writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Show whether each planned block is up to date
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List every generated block in a file
    Blocks {
        /// File to inspect, relative to the project root
        file: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["splice", "apply"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(cli.config, PathBuf::from("splice.toml"));
        assert_eq!(cli.root, None);
        assert_eq!(cli.command, Commands::Apply { dry_run: false });
    }

    #[test]
    fn parse_remove_tags() {
        let cli = Cli::try_parse_from([
            "splice", "-C", "app", "remove", "-t", "a", "--tag", "b", "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("app")));
        assert_eq!(
            cli.command,
            Commands::Remove {
                tags: vec!["a".into(), "b".into()],
                dry_run: true
            }
        );
    }

    #[test]
    fn blocks_requires_file() {
        assert!(Cli::try_parse_from(["splice", "blocks"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["splice", "status", "--json", "-v", "-c", "cfg/s.yaml"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("cfg/s.yaml"));
    }
}
