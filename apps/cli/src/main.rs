#![allow(clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{inject, list, progress, render};
use crate::models::args::{Cli, Commands};

use anyhow::{Context, Result};
use clap::Parser;
use featdeck::domain::config::{DeckConfig, LogConfig};
use featdeck::kernel::config::load_config;
use featdeck_logger::{LevelFilter, Logger};
use std::path::Path;
use tracing::{debug, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: DeckConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _logger = init_logger(&config.log, cli.log_dir.as_deref())?;
    match cli.config.as_deref() {
        Some(path) => info!(path = %path.display(), "configuration loaded"),
        None => debug!("configuration loaded from optional file and environment"),
    }

    match cli.command {
        Commands::Badge { path, descriptor, strict } => {
            render::badge(path.as_deref(), descriptor.as_deref(), strict)?;
        },
        Commands::Indicator { path, inline, strict } => render::indicator(&path, inline, strict)?,
        Commands::Panel { items, strict } => render::panel(&items, &config.panel.items, strict)?,
        Commands::List { status, json } => list::list_features(status.as_deref(), json)?,
        Commands::Progress { json } => progress::show_progress(json)?,
        Commands::Inject { file, output, force } => {
            inject::inject_panel(&file, output.as_deref(), force, &config.panel)?;
        },
    }

    Ok(())
}

fn init_logger(log: &LogConfig, log_dir: Option<&Path>) -> Result<Logger> {
    let level: LevelFilter =
        log.level.parse().with_context(|| format!("Invalid log level '{}'", log.level))?;

    let mut builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).json(log.json);
    if let Some(dir) = log_dir.or(log.dir.as_deref()) {
        builder = builder.directory(dir);
    }

    Ok(builder.init()?)
}
