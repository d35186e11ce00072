//! Plain-text leaderboard page

use scoreboard_avatars::AvatarHandle;
use scoreboard_common::DisplayConfig;
use scoreboard_table::RankedEntry;

use crate::snapshot::Snapshot;

pub const NO_DATA: &str = "No data available";
const MORE_PLAYERS: &str = "More players";
/// Wide enough for "[silver]"
const TIER_WIDTH: usize = 8;

/// Column widths shared by every entry line of one page
#[derive(Debug, Clone, Copy)]
struct Widths {
    name: usize,
    score: usize,
}

/// Render the whole page, newline-terminated
pub fn render(snapshot: &Snapshot, display: &DisplayConfig) -> String {
    let mut lines = vec![
        display.title.clone(),
        "=".repeat(display.title.chars().count().max(1)),
        String::new(),
    ];

    let board = &snapshot.leaderboard;
    if board.is_empty() {
        lines.push(NO_DATA.to_string());
        if let Some(warning) = &snapshot.warning {
            lines.push(format!("({})", warning));
        }
    } else {
        let widths = Widths {
            name: board.iter().map(|e| e.record.name.chars().count()).max().unwrap_or(0),
            score: board.iter().map(|e| e.record.score.to_string().len()).max().unwrap_or(1),
        };

        let podium = board.podium(display.podium_size);
        for (idx, entry) in podium.iter().enumerate() {
            lines.push(entry_line(entry, snapshot.avatar(idx), widths));
        }

        let rest = board.remainder(display.podium_size);
        if !rest.is_empty() {
            if !podium.is_empty() {
                lines.push(String::new());
            }
            lines.push(MORE_PLAYERS.to_string());
            lines.push("-".repeat(MORE_PLAYERS.len()));
            for (offset, entry) in rest.iter().enumerate() {
                lines.push(entry_line(entry, snapshot.avatar(podium.len() + offset), widths));
            }
        }
    }

    lines.push(String::new());
    lines.push(footer(snapshot));

    let mut page = lines.join("\n");
    page.push('\n');
    page
}

fn entry_line(entry: &RankedEntry, avatar: Option<&AvatarHandle>, widths: Widths) -> String {
    let tier = entry
        .tier
        .label()
        .map(|label| format!("[{}]", label))
        .unwrap_or_default();
    let avatar = avatar.map(|a| a.file_name.as_str()).unwrap_or("-");
    let line = format!(
        "{:>3}. {:<name_w$}  {:>score_w$} points  {:<tier_w$}  {}",
        entry.position,
        entry.record.name,
        entry.record.score,
        tier,
        avatar,
        name_w = widths.name,
        score_w = widths.score,
        tier_w = TIER_WIDTH,
    );
    line.trim_end().to_string()
}

fn footer(snapshot: &Snapshot) -> String {
    let mut footer = format!("Refreshed {}", snapshot.taken_at.format("%H:%M:%S"));
    match snapshot.rejected.len() {
        0 => {}
        1 => footer.push_str(" | 1 row skipped"),
        n => footer.push_str(&format!(" | {} rows skipped", n)),
    }
    footer
}
