//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose) are inherited by the
//! subcommand. `-v` prints the version, so verbosity is long-form only.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// tsinit - bootstrap TypeScript into a React Native project
#[derive(Parser, Debug)]
#[command(name = "tsinit")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true, subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)] // handled by clap before parsing returns
    pub version: Option<bool>,

    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// More output (--verbose, --verbose --verbose)
    #[arg(long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up TypeScript in the current React Native project
    #[command(visible_aliases = ["set", "start", "i", "s"])]
    Init {
        /// Project directory
        #[arg(long, default_value = ".")]
        path: PathBuf,

        /// Show what would change without touching anything
        #[arg(long)]
        dry_run: bool,
    },
}
