//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Source root, destination and namespace are fixed; there are no flags for them
//! - `--json` only changes how events are printed and is inherited by all subcommands

use clap::{Parser, Subcommand};

/// nsbundle - aggregate namespace declaration fragments into one file
#[derive(Parser, Debug)]
#[command(name = "nsbundle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print events as NDJSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Build the destination file once and exit
    Build,

    /// Build, then rebuild whenever a fragment changes
    Watch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_build() {
        let cli = Cli::try_parse_from(["nsbundle", "build"]).unwrap();
        assert_eq!(cli.command, Commands::Build);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parse_watch() {
        let cli = Cli::try_parse_from(["nsbundle", "watch"]).unwrap();
        assert_eq!(cli.command, Commands::Watch);
    }

    #[test]
    fn test_cli_json_flag_before_subcommand() {
        let cli = Cli::try_parse_from(["nsbundle", "--json", "build"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_json_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["nsbundle", "watch", "--json"]).unwrap();
        assert!(cli.json);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["nsbundle"]).is_err());
    }

    #[test]
    fn test_cli_rejects_source_flag() {
        assert!(Cli::try_parse_from(["nsbundle", "build", "--source", "x"]).is_err());
    }
}
