//! Row validation: turns raw table rows into [`PlayerRecord`]s
//!
//! The first row is always the header. Columns are located by header name
//! (`Name`, `Score`, `Avatar`, case-insensitive); when the header does not
//! name all three, the first three columns are used in that order.

use std::collections::HashMap;
use std::path::Path;

use scoreboard_common::ValidationPolicy;

use crate::reader::{read_rows, Cell, SourceFormat};
use crate::record::{PlayerRecord, RejectReason, RowRejection};
use crate::{Result, TableError};

/// Records that survived validation plus the rows that did not
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub records: Vec<PlayerRecord>,
    pub rejected: Vec<RowRejection>,
}

/// Load the records of the table at `path`
pub fn load(path: impl AsRef<Path>, policy: ValidationPolicy) -> Result<Vec<PlayerRecord>> {
    load_with_report(path, policy).map(|report| report.records)
}

/// Load the table at `path`, keeping track of rejected rows
pub fn load_with_report(path: impl AsRef<Path>, policy: ValidationPolicy) -> Result<LoadReport> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TableError::SourceNotFound(path.to_path_buf()));
    }

    let format = SourceFormat::from_path(path)?;
    let rows = read_rows(path, format)?;
    let report = validate_rows(&rows, policy);

    tracing::debug!(
        "Loaded {} records from {} ({} rejected)",
        report.records.len(),
        path.display(),
        report.rejected.len()
    );
    for rejection in &report.rejected {
        tracing::warn!("{}: skipping {}", path.display(), rejection);
    }

    Ok(report)
}

/// Column indices of the three fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    name: usize,
    score: usize,
    avatar: usize,
}

impl Columns {
    const POSITIONAL: Columns = Columns { name: 0, score: 1, avatar: 2 };

    fn from_header(header: &[Cell]) -> Self {
        let find = |wanted: &str| {
            header.iter().position(|cell| {
                cell.as_text()
                    .is_some_and(|text| text.eq_ignore_ascii_case(wanted))
            })
        };
        match (find("name"), find("score"), find("avatar")) {
            (Some(name), Some(score), Some(avatar)) => Columns { name, score, avatar },
            _ => {
                tracing::debug!("Header does not name Name/Score/Avatar, using columns 1-3");
                Self::POSITIONAL
            }
        }
    }
}

/// Validate data rows (everything after the header).
///
/// A repeated name replaces the earlier record's score and avatar but keeps
/// the earlier record's place in the sequence.
pub fn validate_rows(rows: &[Vec<Cell>], policy: ValidationPolicy) -> LoadReport {
    let mut report = LoadReport::default();
    let Some((header, data)) = rows.split_first() else {
        return report;
    };
    let columns = Columns::from_header(header);
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for (offset, row) in data.iter().enumerate() {
        // header is line 1
        let line = offset + 2;
        if row.iter().all(Cell::is_empty) {
            continue;
        }
        match parse_row(row, columns, policy) {
            Ok(record) => match index_by_name.get(&record.name) {
                Some(&existing) => {
                    tracing::debug!("Row {}: '{}' repeats an earlier row, replacing it", line, record.name);
                    report.records[existing] = record;
                }
                None => {
                    index_by_name.insert(record.name.clone(), report.records.len());
                    report.records.push(record);
                }
            },
            Err(reason) => report.rejected.push(RowRejection { line, reason }),
        }
    }

    report
}

fn parse_row(
    row: &[Cell],
    columns: Columns,
    policy: ValidationPolicy,
) -> std::result::Result<PlayerRecord, RejectReason> {
    static EMPTY: Cell = Cell::Empty;
    let cell = |idx: usize| row.get(idx).unwrap_or(&EMPTY);

    let name = cell(columns.name).as_text().ok_or(RejectReason::MissingName)?;
    let score = coerce_score(cell(columns.score))?;
    let avatar = cell(columns.avatar).as_text();
    if avatar.is_none() && policy.requires_avatar() {
        return Err(RejectReason::MissingAvatar);
    }

    Ok(PlayerRecord { name, score, avatar })
}

/// Integers pass through, floats truncate toward zero, text must parse as a
/// base-10 integer. A float outside the `i64` range is malformed, the same
/// as an over-long integer written as text.
fn coerce_score(cell: &Cell) -> std::result::Result<u64, RejectReason> {
    // 2^63, the first float past i64::MAX
    const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let value = match cell {
        Cell::Empty => return Err(RejectReason::MissingScore),
        Cell::Int(i) => *i,
        Cell::Float(f) if f.is_finite() && f.trunc() > -I64_LIMIT && f.trunc() < I64_LIMIT => {
            f.trunc() as i64
        }
        Cell::Float(f) => return Err(RejectReason::MalformedScore(f.to_string())),
        Cell::Text(text) => text
            .parse::<i64>()
            .map_err(|_| RejectReason::MalformedScore(text.clone()))?,
    };
    u64::try_from(value).map_err(|_| RejectReason::NegativeScore(value))
}
