//! Command-line arguments

use clap::{Parser, ValueEnum};
use scoreboard_common::ValidationPolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scoreboard", version, about = "Rank players from a Name/Score/Avatar score table")]
pub struct Cli {
    /// Score table (.csv, .xlsx, .xlsm, .xls or .ods)
    pub source: Option<PathBuf>,

    /// Config file (default: ./scoreboard.toml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory avatar filenames are resolved against
    #[arg(long, value_name = "DIR")]
    pub avatars: Option<PathBuf>,

    /// Row validation: "strict" needs name, score and avatar; "relaxed" only name and score
    #[arg(long, value_name = "POLICY")]
    pub policy: Option<ValidationPolicy>,

    /// Number of entries in the top section
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Board title
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Keep re-reading the table and redrawing the board
    #[arg(long)]
    pub watch: bool,

    /// Delay between redraws in watch mode
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Stop watch mode after this many redraws
    #[arg(long, value_name = "N", requires = "watch", value_parser = clap::value_parser!(u64).range(1..))]
    pub frames: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
