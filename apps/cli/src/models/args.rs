//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "featdeck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Feature-status badges, indicators and panels for mock dashboards")]
pub struct Cli {
    /// Config file (TOML, JSON or YAML). Without it, an optional ./featdeck.* is used
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also write logs to rolling files in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the inline status badge of a feature
    Badge {
        /// Dotted feature path, e.g. auth.emailLogin
        #[arg(required_unless_present = "descriptor", conflicts_with = "descriptor")]
        path: Option<String>,
        /// Render a descriptor given as JSON instead of a registry entry
        #[arg(long, value_name = "JSON")]
        descriptor: Option<String>,
        /// Fail on unknown paths instead of printing nothing
        #[arg(long)]
        strict: bool,
    },
    /// Print the glyph-only indicator of a feature
    Indicator {
        /// Dotted feature path, e.g. auth.emailLogin
        path: String,
        /// Print the badge wrapped in the inline indicator span instead
        #[arg(long)]
        inline: bool,
        /// Fail on unknown paths instead of printing nothing
        #[arg(long)]
        strict: bool,
    },
    /// Print the floating status panel
    Panel {
        /// `path` or `Label=path`; defaults to `panel.items` from the config
        items: Vec<String>,
        /// Fail on unknown paths instead of skipping them
        #[arg(long)]
        strict: bool,
    },
    /// List registry entries
    List {
        /// Comma separated statuses to keep (production, testing, development, planned, other, all)
        #[arg(long, value_name = "NAMES")]
        status: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show readiness per group
    Progress {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Mount the status panel into an HTML page
    Inject {
        /// HTML page to mount into
        file: PathBuf,
        /// Write the result here instead of overwriting FILE
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Mount even when `panel.auto_mount` is disabled
        #[arg(long)]
        force: bool,
    },
}
