// TaxDesk - app/store.rs
//
// File-backed result table (hasil_pencarian.csv).
//
// Design notes:
// - Every merge reloads the file, merges in memory and rewrites the whole
//   file. The rewrite is NOT atomic: a failure mid-write can leave the file
//   truncated, and the error is returned to the caller as a StoreError.
// - A missing result file means zero saved rows, never an error.
// - A file that exists but cannot be read back intact (I/O error, invalid
//   UTF-8) is never merged into: the merge is refused and the file is left
//   as it is. Only reset() discards saved rows.
// - No locking. Two processes merging at once: the last writer wins.

use crate::core::dedup::{self, MergeOutcome};
use crate::core::export;
use crate::core::model::{SavedRecord, RESULT_COLUMNS};
use crate::core::table::{self, LoadStatus};
use crate::util::error::{ExportError, StoreError};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Handle to the persisted result table.
#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data directory if needed, and a header-only result file if
    /// none exists yet. An existing file is left untouched.
    pub fn ensure(&self) -> Result<(), StoreError> {
        self.create_parent_dir()?;
        if self.path.exists() {
            return Ok(());
        }
        tracing::info!(path = %self.path.display(), "Creating empty result file");
        self.write_all(&[])
    }

    /// All saved rows. Missing or unreadable files yield no rows.
    pub fn load(&self) -> Vec<SavedRecord> {
        self.load_with_status().0
    }

    /// All saved rows, plus how the file load went.
    pub fn load_with_status(&self) -> (Vec<SavedRecord>, LoadStatus) {
        let (table, status) = table::load_with_status(&self.path, &RESULT_COLUMNS);
        let rows = table
            .rows()
            .iter()
            .map(|row| SavedRecord::from_row(row))
            .collect();
        (rows, status)
    }

    /// Merge `incoming` into the saved rows and rewrite the file.
    ///
    /// On success the outcome carries the before/after row counts. On a
    /// write failure nothing is rolled back and the error is returned.
    pub fn merge_append(&self, incoming: &[SavedRecord]) -> Result<MergeOutcome, StoreError> {
        let existing = self.readable_rows().map_err(|e| {
            tracing::error!(error = %e, "Merge refused");
            e
        })?;

        let outcome = dedup::merge_append(existing, incoming);
        self.write_all(&outcome.table)?;

        tracing::info!(
            path = %self.path.display(),
            before = outcome.before,
            after = outcome.after,
            added = outcome.added(),
            "Result file updated"
        );
        Ok(outcome)
    }

    /// Saved rows, failing if the file exists but cannot be read back
    /// exactly as it is on disk.
    pub fn readable_rows(&self) -> Result<Vec<SavedRecord>, StoreError> {
        let (table, status) = table::load_with_status(&self.path, &RESULT_COLUMNS);
        if let LoadStatus::Malformed { reason } = status {
            return Err(StoreError::Unreadable {
                path: self.path.clone(),
                reason,
            });
        }
        if table.lossy_rows() > 0 {
            return Err(StoreError::Unreadable {
                path: self.path.clone(),
                reason: format!("{} row(s) are not valid UTF-8", table.lossy_rows()),
            });
        }
        Ok(table.rows().iter().map(|row| SavedRecord::from_row(row)).collect())
    }

    /// Discard every saved row, leaving only the header. Irreversible.
    pub fn reset(&self) -> Result<(), StoreError> {
        self.write_all(&[])?;
        tracing::info!(path = %self.path.display(), "Result file reset to header only");
        Ok(())
    }

    /// Copy the result file to `dest` byte for byte.
    ///
    /// If the file does not exist yet, a header-only CSV is written instead.
    pub fn export_csv(&self, dest: &Path) -> Result<usize, ExportError> {
        if self.path.exists() {
            std::fs::copy(&self.path, dest).map_err(|e| ExportError::Io {
                path: dest.to_path_buf(),
                source: e,
            })?;
            let rows = self.load().len();
            tracing::info!(dest = %dest.display(), rows, "Result file exported as CSV");
            return Ok(rows);
        }
        let file = File::create(dest).map_err(|e| ExportError::Io {
            path: dest.to_path_buf(),
            source: e,
        })?;
        export::write_csv(&[], BufWriter::new(file), dest)
    }

    /// Write the saved rows to `dest` as a JSON array.
    pub fn export_json(&self, dest: &Path) -> Result<usize, ExportError> {
        let rows = self.load();
        let file = File::create(dest).map_err(|e| ExportError::Io {
            path: dest.to_path_buf(),
            source: e,
        })?;
        let n = export::write_json(&rows, BufWriter::new(file), dest)?;
        tracing::info!(dest = %dest.display(), rows = n, "Result file exported as JSON");
        Ok(n)
    }

    fn create_parent_dir(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                std::fs::create_dir_all(dir).map_err(|e| StoreError::CreateDir {
                    path: dir.to_path_buf(),
                    source: e,
                })
            }
            _ => Ok(()),
        }
    }

    /// Overwrite the result file with `rows` (header always written).
    fn write_all(&self, rows: &[SavedRecord]) -> Result<(), StoreError> {
        self.create_parent_dir()?;
        let file = File::create(&self.path).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        export::write_csv(rows, BufWriter::new(file), &self.path).map_err(|e| match e {
            ExportError::Csv { path, source } => StoreError::Csv { path, source },
            ExportError::Io { path, source } => StoreError::Io { path, source },
            ExportError::Json { path, source } => StoreError::Io {
                path,
                source: source.into(),
            },
        })?;
        Ok(())
    }
}
