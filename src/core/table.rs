// TaxDesk - core/table.rs
//
// Record store: reads a header-row CSV file into a table with a fixed,
// caller-supplied column set.
//
// Normalisation rules:
//   - columns missing from the file are synthesised as empty text
//   - columns not in the expected set are dropped
//   - column order always follows the expected set
//   - short (ragged) rows are padded with empty text
//
// Bytes that are not valid UTF-8 (Excel exports in cp1252 are common) are
// replaced with U+FFFD per field; the row is kept and counted as lossy.
//
// `load` never fails: a missing, empty or unreadable file yields an empty
// table with the expected header. `load_with_status` returns the same table
// plus the reason, so callers can warn about broken files while treating a
// missing file as normal.

use crate::util::error::TableError;
use std::borrow::Cow;
use std::io::{self, Read};
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A loaded table whose columns are exactly the expected set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    synthesized: Vec<String>,
    lossy_rows: usize,
}

impl Table {
    /// A table with the given header and no rows.
    pub fn empty(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
            synthesized: Vec::new(),
            lossy_rows: 0,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }

    /// Expected columns that were absent from the file and filled with
    /// empty text.
    pub fn synthesized_columns(&self) -> &[String] {
        &self.synthesized
    }

    /// Rows in which at least one invalid UTF-8 byte was replaced.
    pub fn lossy_rows(&self) -> usize {
        self.lossy_rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Why a load produced the table it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file was read; `rows` may be zero for a header-only file.
    Loaded { rows: usize },
    /// The file does not exist.
    Missing,
    /// The file exists but has no header row.
    Empty,
    /// The file exists but could not be read or parsed.
    Malformed { reason: String },
}

/// Load `path` as a table with exactly `expected` columns.
///
/// Failures are absorbed into an empty table; see `load_with_status` to
/// learn why a table came back empty.
pub fn load(path: &Path, expected: &[&str]) -> Table {
    load_with_status(path, expected).0
}

/// Load `path` and report how the load went.
pub fn load_with_status(path: &Path, expected: &[&str]) -> (Table, LoadStatus) {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Table file not found");
            return (Table::empty(expected), LoadStatus::Missing);
        }
        Err(e) => {
            let err = TableError::Io {
                path: path.to_path_buf(),
                source: e,
            };
            tracing::warn!(error = %err, "Table file unreadable; using empty table");
            return (
                Table::empty(expected),
                LoadStatus::Malformed {
                    reason: err.to_string(),
                },
            );
        }
    };

    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);
    if content.iter().all(u8::is_ascii_whitespace) {
        tracing::debug!(path = %path.display(), "Table file is empty");
        return (Table::empty(expected), LoadStatus::Empty);
    }

    match read_table(content, expected) {
        Ok(table) => {
            if !table.synthesized_columns().is_empty() {
                tracing::debug!(
                    path = %path.display(),
                    missing = ?table.synthesized_columns(),
                    "Synthesised missing columns as empty text"
                );
            }
            if table.lossy_rows() > 0 {
                tracing::warn!(
                    path = %path.display(),
                    lossy_rows = table.lossy_rows(),
                    "Invalid UTF-8 replaced while loading table"
                );
            }
            tracing::debug!(path = %path.display(), rows = table.len(), "Table loaded");
            let rows = table.len();
            (table, LoadStatus::Loaded { rows })
        }
        Err(e) => {
            let err = TableError::Csv {
                path: path.to_path_buf(),
                source: e,
            };
            tracing::warn!(error = %err, "Table file malformed; using empty table");
            (
                Table::empty(expected),
                LoadStatus::Malformed {
                    reason: err.to_string(),
                },
            )
        }
    }
}

/// Parse a header-row CSV stream into a table with exactly `expected`
/// columns.
///
/// An input with no header row produces an empty table. Fields are decoded
/// lossily, so invalid UTF-8 never fails the read.
pub fn read_table<R: Read>(reader: R, expected: &[&str]) -> Result<Table, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .byte_headers()?
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();
    if headers.is_empty() {
        return Ok(Table::empty(expected));
    }

    // Position of each expected column in the file, first occurrence wins.
    let positions: Vec<Option<usize>> = expected
        .iter()
        .map(|col| headers.iter().position(|h| h.trim() == *col))
        .collect();

    let synthesized = expected
        .iter()
        .zip(&positions)
        .filter(|(_, pos)| pos.is_none())
        .map(|(col, _)| col.to_string())
        .collect();

    let mut rows = Vec::new();
    let mut lossy_rows = 0;
    for record in csv_reader.byte_records() {
        let record = record?;
        let mut lossy = false;
        let row: Vec<String> = positions
            .iter()
            .map(|pos| {
                let raw = pos.and_then(|i| record.get(i)).unwrap_or_default();
                match String::from_utf8_lossy(raw) {
                    Cow::Borrowed(text) => text.to_string(),
                    Cow::Owned(text) => {
                        lossy = true;
                        text
                    }
                }
            })
            .collect();
        if lossy {
            lossy_rows += 1;
        }
        rows.push(row);
    }

    Ok(Table {
        columns: expected.iter().map(|c| c.to_string()).collect(),
        rows,
        synthesized,
        lossy_rows,
    })
}
