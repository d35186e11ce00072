//! One refresh worth of leaderboard data
//!
//! A snapshot is captured from scratch on every redraw: the table is re-read,
//! re-ranked and every avatar re-resolved. Nothing is carried between frames.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use scoreboard_avatars::{AvatarDirectory, AvatarHandle};
use scoreboard_common::ValidationPolicy;
use scoreboard_table::{load_with_report, rank, Leaderboard, RowRejection};

use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub taken_at: DateTime<Local>,
    pub source: PathBuf,
    pub leaderboard: Leaderboard,
    /// Parallel to `leaderboard.entries()`
    pub avatars: Vec<Option<AvatarHandle>>,
    pub rejected: Vec<RowRejection>,
    /// Why the board is empty when the table could not be read
    pub warning: Option<String>,
}

impl Snapshot {
    pub fn capture(settings: &Settings) -> Self {
        Self::capture_at(
            &settings.source,
            &AvatarDirectory::new(&settings.avatar_dir),
            settings.policy,
            Local::now(),
        )
    }

    /// Load and rank `source`. Never fails: an unreadable table yields an
    /// empty board with `warning` set.
    pub fn capture_at(
        source: &Path,
        avatars: &AvatarDirectory,
        policy: ValidationPolicy,
        taken_at: DateTime<Local>,
    ) -> Self {
        let (leaderboard, rejected, warning) = match load_with_report(source, policy) {
            Ok(report) => (rank(report.records), report.rejected, None),
            Err(e) if e.is_not_found() => {
                tracing::warn!("{}, showing an empty board", e);
                (Leaderboard::default(), Vec::new(), Some(e.to_string()))
            }
            Err(e) => {
                tracing::warn!("Failed to read score table {}: {}", source.display(), e);
                (Leaderboard::default(), Vec::new(), Some(e.to_string()))
            }
        };
        tracing::debug!("Ranked {} players", leaderboard.len());
        let avatars = avatars.resolve_all(&leaderboard);

        Self {
            taken_at,
            source: source.to_path_buf(),
            leaderboard,
            avatars,
            rejected,
            warning,
        }
    }

    /// Avatar of the entry at `index` in board order
    pub fn avatar(&self, index: usize) -> Option<&AvatarHandle> {
        self.avatars.get(index).and_then(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_gives_empty_board_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("scores_with_avatars.xlsx");
        let snapshot = Snapshot::capture_at(
            &source,
            &AvatarDirectory::new(dir.path()),
            ValidationPolicy::Strict,
            Local::now(),
        );
        assert!(snapshot.leaderboard.is_empty());
        assert!(snapshot.avatars.is_empty());
        let warning = snapshot.warning.unwrap();
        assert!(warning.contains("not found"), "{}", warning);
    }

    #[test]
    fn test_unsupported_source_also_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("scores.txt");
        std::fs::write(&source, "Name,Score,Avatar\n").unwrap();
        let snapshot = Snapshot::capture_at(
            &source,
            &AvatarDirectory::new(dir.path()),
            ValidationPolicy::Strict,
            Local::now(),
        );
        assert!(snapshot.leaderboard.is_empty());
        assert!(snapshot.warning.is_some());
    }

    #[test]
    fn test_each_capture_rereads_the_table() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("scores.csv");
        let avatars = AvatarDirectory::new(dir.path());

        std::fs::write(&source, "Name,Score,Avatar\nAlice,90,a.png\nBob,95,b.png\n").unwrap();
        let first = Snapshot::capture_at(&source, &avatars, ValidationPolicy::Strict, Local::now());
        assert_eq!(first.leaderboard.entries()[0].record.name, "Bob");

        std::fs::write(&source, "Name,Score,Avatar\nAlice,99,a.png\nBob,95,b.png\nCara,40,c.png\n")
            .unwrap();
        let second = Snapshot::capture_at(&source, &avatars, ValidationPolicy::Strict, Local::now());
        assert_eq!(second.leaderboard.entries()[0].record.name, "Alice");
        assert_eq!(second.leaderboard.len(), 3);

        std::fs::remove_file(&source).unwrap();
        let third = Snapshot::capture_at(&source, &avatars, ValidationPolicy::Strict, Local::now());
        assert!(third.leaderboard.is_empty());
        assert!(third.warning.is_some());
    }

    #[test]
    fn test_capture_ranks_and_resolves_avatars() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("scores.csv");
        std::fs::write(&source, "Name,Score,Avatar\nAlice,90,a.png\nBob,95,b.png\nEve,x,e.png\n")
            .unwrap();
        let avatar_dir = dir.path().join("avatars");
        std::fs::create_dir(&avatar_dir).unwrap();
        std::fs::write(avatar_dir.join("b.png"), b"png").unwrap();

        let snapshot = Snapshot::capture_at(
            &source,
            &AvatarDirectory::new(&avatar_dir),
            ValidationPolicy::Strict,
            Local::now(),
        );
        assert_eq!(snapshot.warning, None);
        assert_eq!(snapshot.leaderboard.entries()[0].record.name, "Bob");
        assert_eq!(snapshot.avatar(0).map(|a| a.file_name.as_str()), Some("b.png"));
        assert!(snapshot.avatar(1).is_none());
        assert_eq!(snapshot.rejected.len(), 1);
        assert_eq!(snapshot.rejected[0].line, 4);
    }
}
