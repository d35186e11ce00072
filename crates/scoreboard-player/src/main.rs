//! Scoreboard — terminal leaderboard for Name/Score/Avatar tables
//!
//! Architecture:
//!   cli       — command-line flags
//!   settings  — flags layered over scoreboard.toml, source discovery
//!   snapshot  — one refresh: load, rank, resolve avatars
//!   engine/   — refresh loop, text and JSON renderers

mod cli;
mod engine;
mod settings;
mod snapshot;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scoreboard_common::AppConfig;

use crate::cli::Cli;
use crate::settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config_path = AppConfig::locate(cli.config.as_deref(), &cwd);
    let config = AppConfig::load_or_default(config_path.as_deref())?;

    let level: tracing::Level = config
        .log_level
        .parse()
        .with_context(|| format!("Invalid log_level '{}'", config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Scoreboard v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) => tracing::info!("Config: {}", path.display()),
        None => tracing::debug!("No {} found, using defaults", scoreboard_common::DEFAULT_CONFIG_FILE),
    }

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));
    let settings = Settings::resolve(&cli, config, &cwd, exe_dir.as_deref());
    tracing::info!(
        "Score table: {} | avatars: {} | policy: {}",
        settings.source.display(),
        settings.avatar_dir.display(),
        settings.policy
    );

    engine::run(&settings)
}
