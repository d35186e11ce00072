//! JSON rendition of a snapshot, for scripts

use serde::Serialize;
use std::path::Path;

use scoreboard_common::DisplayConfig;
use scoreboard_table::RankedEntry;

use crate::snapshot::Snapshot;

#[derive(Serialize)]
struct JsonEntry<'a> {
    #[serde(flatten)]
    entry: &'a RankedEntry,
    avatar_path: Option<&'a Path>,
}

#[derive(Serialize)]
struct JsonBoard<'a> {
    title: &'a str,
    refreshed_at: String,
    source: &'a Path,
    warning: Option<&'a str>,
    skipped: Vec<String>,
    entries: Vec<JsonEntry<'a>>,
}

/// Pretty-printed for one-shot output, single-line for watch mode
pub fn render(snapshot: &Snapshot, display: &DisplayConfig, pretty: bool) -> serde_json::Result<String> {
    let board = JsonBoard {
        title: &display.title,
        refreshed_at: snapshot.taken_at.to_rfc3339(),
        source: &snapshot.source,
        warning: snapshot.warning.as_deref(),
        skipped: snapshot.rejected.iter().map(ToString::to_string).collect(),
        entries: snapshot
            .leaderboard
            .iter()
            .enumerate()
            .map(|(idx, entry)| JsonEntry {
                entry,
                avatar_path: snapshot.avatar(idx).map(|a| a.path.as_path()),
            })
            .collect(),
    };
    if pretty {
        serde_json::to_string_pretty(&board)
    } else {
        serde_json::to_string(&board)
    }
}
