//! nsbundle CLI - namespace declaration bundler
//!
//! Usage: nsbundle [--json] <COMMAND>
//!
//! Commands:
//!   build   Build the destination file once and exit
//!   watch   Build, then rebuild whenever a fragment changes

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use nsbundle::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build => commands::build::cmd_build(cli.json),
        Commands::Watch => commands::watch::cmd_watch(cli.json),
    }
}
