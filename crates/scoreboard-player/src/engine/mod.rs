//! Refresh loop — captures a snapshot per frame and writes it out.

pub mod json;
pub mod text;

use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;

use crate::cli::OutputFormat;
use crate::settings::Settings;
use crate::snapshot::Snapshot;

/// ANSI: clear screen, cursor home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Run the board on stdout
pub fn run(settings: &Settings) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(settings, &mut out)
}

/// Draw once, or keep redrawing in watch mode until the frame limit (if any)
pub fn run_with<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    if !settings.watch {
        let snapshot = Snapshot::capture(settings);
        return write_frame(out, &snapshot, settings, true);
    }

    let interval = Duration::from_millis(settings.display.refresh_interval_ms);
    tracing::info!(
        "Watching {} (every {} ms)",
        settings.source.display(),
        settings.display.refresh_interval_ms
    );

    let mut frame_count: u64 = 0;
    loop {
        let snapshot = Snapshot::capture(settings);
        if settings.format == OutputFormat::Text {
            out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        write_frame(out, &snapshot, settings, false)?;

        frame_count += 1;
        if settings.frames.is_some_and(|limit| frame_count >= limit) {
            break;
        }
        std::thread::sleep(interval);
    }

    tracing::info!("Stopped after {} frames", frame_count);
    Ok(())
}

fn write_frame<W: Write>(out: &mut W, snapshot: &Snapshot, settings: &Settings, pretty: bool) -> Result<()> {
    match settings.format {
        OutputFormat::Text => {
            out.write_all(text::render(snapshot, &settings.display).as_bytes())?;
        }
        OutputFormat::Json => {
            let json = json::render(snapshot, &settings.display, pretty)
                .context("Failed to serialize leaderboard")?;
            writeln!(out, "{}", json)?;
        }
    }
    out.flush().context("Failed to write leaderboard")?;
    Ok(())
}
