//! Score table loader and ranker
//!
//! This module handles:
//! - Reading Name/Score/Avatar tables from CSV files and spreadsheet workbooks
//! - Validating rows against a [`ValidationPolicy`]
//! - Ranking the surviving records by score

pub mod loader;
pub mod ranking;
pub mod reader;
pub mod record;

use std::path::PathBuf;
use thiserror::Error;

pub use loader::{load, load_with_report, LoadReport};
pub use ranking::{rank, Leaderboard, RankedEntry, Tier};
pub use reader::{Cell, SourceFormat};
pub use record::{PlayerRecord, RejectReason, RowRejection};
pub use scoreboard_common::ValidationPolicy;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Score table not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Unsupported table format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read score table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Workbook has no worksheets: {}", .0.display())]
    NoWorksheet(PathBuf),
}

impl TableError {
    /// True when the table file does not exist (as opposed to being unreadable)
    pub fn is_not_found(&self) -> bool {
        matches!(self, TableError::SourceNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
