//! Player records and per-row rejections

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// One validated row of the score table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    /// Unique key within a table
    pub name: String,
    pub score: u64,
    /// Avatar filename, relative to the avatar directory
    pub avatar: Option<String>,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, score: u64, avatar: Option<&str>) -> Self {
        Self {
            name: name.into(),
            score,
            avatar: avatar.map(str::to_string),
        }
    }
}

/// Why a data row was left out of the ranking
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error("missing name")]
    MissingName,

    #[error("missing score")]
    MissingScore,

    #[error("missing avatar")]
    MissingAvatar,

    #[error("score '{0}' is not a whole number")]
    MalformedScore(String),

    #[error("score {0} is negative")]
    NegativeScore(i64),
}

/// A rejected data row; `line` is 1-based and counts the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRejection {
    pub line: usize,
    pub reason: RejectReason,
}

impl fmt::Display for RowRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.line, self.reason)
    }
}
