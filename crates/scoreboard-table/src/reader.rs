//! Raw row readers for the supported table formats
//!
//! Both readers return every row of the sheet (header included) as a vector
//! of [`Cell`]s. Validation happens later in [`crate::loader`].

use calamine::{open_workbook_auto, Data, Reader};
use csv::{ReaderBuilder, Trim};
use std::path::Path;

use crate::{Result, TableError};

/// A single cell value, normalised across formats
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
}

impl Cell {
    /// Build a text cell; blank text becomes [`Cell::Empty`]
    pub fn text(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(trimmed.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Cell rendered as a trimmed string, `None` when blank
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Int(i) => Some(i.to_string()),
            Cell::Float(f) => Some(f.to_string()),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty | Data::Error(_) => Cell::Empty,
            Data::Int(i) => Cell::Int(*i),
            Data::Float(f) => Cell::Float(*f),
            Data::String(s) => Cell::text(s),
            Data::Bool(b) => Cell::Text(b.to_string()),
            other => Cell::text(&other.to_string()),
        }
    }
}

/// Table container format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Workbook,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "csv" => Ok(SourceFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Ok(SourceFormat::Workbook),
            "" => Err(TableError::UnsupportedFormat(format!(
                "{} has no file extension",
                path.display()
            ))),
            other => Err(TableError::UnsupportedFormat(format!(".{}", other))),
        }
    }
}

/// Read every row of the table at `path`
pub fn read_rows(path: &Path, format: SourceFormat) -> Result<Vec<Vec<Cell>>> {
    match format {
        SourceFormat::Csv => read_csv(path),
        SourceFormat::Workbook => read_workbook(path),
    }
}

fn read_csv(path: &Path) -> Result<Vec<Vec<Cell>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::text).collect());
    }
    Ok(rows)
}

/// Reads the first worksheet of an xlsx/xlsm/xls/ods workbook
fn read_workbook(path: &Path) -> Result<Vec<Vec<Cell>>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TableError::NoWorksheet(path.to_path_buf()))??;

    Ok(range
        .rows()
        .map(|row| row.iter().map(Cell::from).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;
    use std::path::PathBuf;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            SourceFormat::from_path(Path::new("scores.CSV")).unwrap(),
            SourceFormat::Csv
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("scores_with_avatars.xlsx")).unwrap(),
            SourceFormat::Workbook
        );
        assert!(matches!(
            SourceFormat::from_path(Path::new("scores.txt")),
            Err(TableError::UnsupportedFormat(_))
        ));
        assert!(SourceFormat::from_path(&PathBuf::from("scores")).is_err());
    }

    #[test]
    fn test_text_cells_are_trimmed() {
        assert_eq!(Cell::text("  Bob "), Cell::Text("Bob".to_string()));
        assert!(Cell::text("   ").is_empty());
        assert_eq!(Cell::Int(7).as_text().as_deref(), Some("7"));
    }

    #[test]
    fn test_read_csv_keeps_header_and_ragged_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.csv");
        std::fs::write(&path, "Name,Score,Avatar\nAlice, 90 ,a.png\nBob,95\n").unwrap();

        let rows = read_rows(&path, SourceFormat::Csv).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], Cell::Text("Name".to_string()));
        assert_eq!(rows[1][1], Cell::Text("90".to_string()));
        assert_eq!(rows[2].len(), 2);
    }

    #[test]
    fn test_workbook_values_map_to_cells() {
        assert_eq!(Cell::from(&Data::Float(95.7)), Cell::Float(95.7));
        assert_eq!(Cell::from(&Data::Int(42)), Cell::Int(42));
        assert_eq!(Cell::from(&Data::Bool(true)), Cell::Text("true".to_string()));
        assert_eq!(Cell::from(&Data::String("  Bob ".to_string())), Cell::Text("Bob".to_string()));
        assert_eq!(Cell::from(&Data::String("   ".to_string())), Cell::Empty);
        assert_eq!(Cell::from(&Data::Empty), Cell::Empty);
        assert_eq!(Cell::from(&Data::Error(CellErrorType::Div0)), Cell::Empty);
        assert_eq!(
            Cell::from(&Data::DateTimeIso("2024-05-01T10:00:00".to_string())),
            Cell::Text("2024-05-01T10:00:00".to_string())
        );
    }

    #[test]
    fn test_read_workbook_first_sheet() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/scores_with_avatars.xlsx");
        let rows = read_rows(&path, SourceFormat::from_path(&path).unwrap()).unwrap();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], vec![Cell::text("Name"), Cell::text("Score"), Cell::text("Avatar")]);
        assert_eq!(rows[1][0], Cell::text("Alice"));
        assert_eq!(rows[1][1], Cell::Float(90.0));
        assert_eq!(rows[2][1], Cell::Float(95.7));
        // Cara has no avatar cell; the range still spans three columns
        assert_eq!(rows[3].len(), 3);
        assert!(rows[3][2].is_empty());
        // score typed as text in the sheet
        assert_eq!(rows[4][1], Cell::text("88"));
        assert!(rows.iter().all(|row| row[0] != Cell::text("Zed")));
    }

    #[test]
    fn test_garbage_workbook_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.xlsx");
        std::fs::write(&path, b"not a zip archive").unwrap();

        assert!(read_rows(&path, SourceFormat::Workbook).is_err());
    }
}
