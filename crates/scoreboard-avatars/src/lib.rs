//! Avatar lookup for leaderboard entries
//!
//! This module handles:
//! - Resolving a record's avatar filename against the avatar directory
//! - Degrading to "no avatar" when the image is missing
//!
//! Decoding and scaling the image is left to whatever draws the board; the
//! handle only carries the fixed presentation size.

use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

use scoreboard_table::{Leaderboard, PlayerRecord};

/// Every avatar is presented at 100×100
pub const PRESENTATION_SIZE: (u32, u32) = (100, 100);

#[derive(Error, Debug)]
pub enum AvatarError {
    #[error("Avatar '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("Avatar '{}' is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("Avatar '{0}' points outside the avatar directory")]
    OutsideRoot(String),
}

pub type Result<T> = std::result::Result<T, AvatarError>;

/// A located avatar image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarHandle {
    pub path: PathBuf,
    /// Filename as written in the score table
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

/// The directory avatar filenames are resolved against
#[derive(Debug, Clone)]
pub struct AvatarDirectory {
    root: PathBuf,
}

impl AvatarDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Join `file_name` onto the root and check that it is a file.
    ///
    /// Only plain relative names are accepted: absolute paths, drive
    /// prefixes and `.`/`..` segments are refused.
    pub fn locate(&self, file_name: &str) -> Result<PathBuf> {
        let relative = Path::new(file_name);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(AvatarError::OutsideRoot(file_name.to_string()));
        }
        let path = self.root.join(relative);
        if !path.exists() {
            return Err(AvatarError::NotFound(path));
        }
        if !path.is_file() {
            return Err(AvatarError::NotAFile(path));
        }
        Ok(path)
    }

    /// Avatar for `record`, or `None` if it has none or the file is missing
    pub fn resolve(&self, record: &PlayerRecord) -> Option<AvatarHandle> {
        let file_name = record.avatar.as_deref()?;
        match self.locate(file_name) {
            Ok(path) => Some(AvatarHandle {
                path,
                file_name: file_name.to_string(),
                width: PRESENTATION_SIZE.0,
                height: PRESENTATION_SIZE.1,
            }),
            Err(e) => {
                tracing::warn!("{} (player '{}')", e, record.name);
                None
            }
        }
    }

    /// Resolve every entry on the board, in board order
    pub fn resolve_all(&self, board: &Leaderboard) -> Vec<Option<AvatarHandle>> {
        board.iter().map(|entry| self.resolve(&entry.record)).collect()
    }
}

/// Shorthand for [`AvatarDirectory::resolve`]
pub fn resolve_avatar(record: &PlayerRecord, avatar_root: impl AsRef<Path>) -> Option<AvatarHandle> {
    AvatarDirectory::new(avatar_root.as_ref()).resolve(record)
}
