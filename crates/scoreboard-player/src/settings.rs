//! Effective run settings: CLI flags layered over the config file

use std::path::{Path, PathBuf};

use scoreboard_common::{AppConfig, DisplayConfig, ValidationPolicy};

use crate::cli::{Cli, OutputFormat};

/// Table names looked for when no source is given, in priority order
pub const SOURCE_CANDIDATES: [&str; 4] = [
    "scores_with_avatars.xlsx",
    "scores_with_avatars.csv",
    "scores.xlsx",
    "scores.csv",
];

const AVATAR_DIR_NAME: &str = "avatars";

#[derive(Debug, Clone)]
pub struct Settings {
    pub source: PathBuf,
    pub avatar_dir: PathBuf,
    pub policy: ValidationPolicy,
    pub display: DisplayConfig,
    pub format: OutputFormat,
    pub watch: bool,
    /// Watch-mode redraw limit, `None` runs until interrupted
    pub frames: Option<u64>,
}

impl Settings {
    /// Precedence: CLI flag, then config file, then built-in default
    pub fn resolve(cli: &Cli, config: AppConfig, cwd: &Path, exe_dir: Option<&Path>) -> Self {
        let source = cli
            .source
            .clone()
            .or(config.source.path)
            .unwrap_or_else(|| find_source(cwd, exe_dir));

        let avatar_dir = cli
            .avatars
            .clone()
            .or(config.source.avatar_dir)
            .unwrap_or_else(|| default_avatar_dir(&source));

        let mut display = config.display;
        if let Some(top) = cli.top {
            display.podium_size = top;
        }
        if let Some(title) = &cli.title {
            display.title = title.clone();
        }
        if let Some(ms) = cli.interval_ms {
            display.refresh_interval_ms = ms;
        }

        Self {
            source,
            avatar_dir,
            policy: cli.policy.unwrap_or(config.source.policy),
            display,
            format: cli.format,
            watch: cli.watch,
            frames: cli.frames,
        }
    }
}

/// Locate a score table. Priority:
/// 1. Well-known table names in the working directory
/// 2. The same names next to the executable
///
/// Falls back to the first candidate in the working directory; loading it
/// then reports the table as missing and the board shows no data.
pub fn find_source(cwd: &Path, exe_dir: Option<&Path>) -> PathBuf {
    let dirs = std::iter::once(cwd).chain(exe_dir);
    for dir in dirs {
        for name in SOURCE_CANDIDATES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                tracing::debug!("Found score table: {}", candidate.display());
                return candidate;
            }
        }
    }
    cwd.join(SOURCE_CANDIDATES[0])
}

/// `avatars/` next to the score table
fn default_avatar_dir(source: &Path) -> PathBuf {
    source
        .parent()
        .map(|dir| dir.join(AVATAR_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(AVATAR_DIR_NAME))
}
