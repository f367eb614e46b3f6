//! tsinit CLI - bootstrap TypeScript into a React Native project
//!
//! Usage: tsinit <COMMAND>
//!
//! Commands:
//!   init    Set up TypeScript in the current project (aliases: set, start, i, s)

use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    let result = match cli.command {
        Commands::Init { path, dry_run } => commands::init::cmd_init(&path, dry_run, &ui),
    };

    if let Err(err) = result {
        ui::error::print_error(&err, cli.json);
        std::process::exit(1);
    }
}
