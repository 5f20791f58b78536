// TaxDesk - app/data.rs
//
// Resolves the three data files and loads the two read-only reference
// tables (master and office list).
//
// Load problems never abort start-up. Each one becomes an operator-visible
// warning and the affected table is empty. A missing file and a broken file
// produce different warnings.

use crate::core::model::{MasterRecord, MASTER_COLUMNS, OFFICE_COLUMNS};
use crate::core::table::{self, LoadStatus};
use crate::platform::config::AppConfig;
use std::path::{Path, PathBuf};

/// Locations of the data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    /// Directory holding all three files.
    pub dir: PathBuf,
    /// Vehicle-tax master table.
    pub master: PathBuf,
    /// Office reference list.
    pub offices: PathBuf,
    /// Persisted result table.
    pub results: PathBuf,
}

impl DataFiles {
    /// Resolve file paths inside `dir` using the configured file names.
    pub fn resolve(dir: &Path, config: &AppConfig) -> Self {
        Self {
            dir: dir.to_path_buf(),
            master: dir.join(&config.master_file),
            offices: dir.join(&config.office_file),
            results: dir.join(&config.result_file),
        }
    }
}

/// Reference tables loaded for one run of the application.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub master: Vec<MasterRecord>,
    pub offices: Vec<String>,
    pub warnings: Vec<String>,
}

/// Load the master table and office list.
pub fn load_reference_data(files: &DataFiles) -> ReferenceData {
    let mut warnings = Vec::new();

    let (master_table, master_status) = table::load_with_status(&files.master, &MASTER_COLUMNS);
    note_status("Master data", &files.master, &master_status, &mut warnings);
    if matches!(master_status, LoadStatus::Loaded { .. })
        && !master_table.synthesized_columns().is_empty()
    {
        warnings.push(format!(
            "Master data '{}' has no column(s) {}; they are shown empty.",
            files.master.display(),
            master_table.synthesized_columns().join(", ")
        ));
    }
    note_lossy("Master data", &files.master, master_table.lossy_rows(), &mut warnings);
    let master: Vec<MasterRecord> = master_table
        .rows()
        .iter()
        .map(|row| MasterRecord::from_row(row))
        .collect();

    let (office_table, office_status) = table::load_with_status(&files.offices, &OFFICE_COLUMNS);
    note_status("Office list", &files.offices, &office_status, &mut warnings);
    note_lossy("Office list", &files.offices, office_table.lossy_rows(), &mut warnings);
    let offices = office_names(office_table.into_rows());

    tracing::info!(
        master = master.len(),
        offices = offices.len(),
        warnings = warnings.len(),
        "Reference data loaded"
    );

    ReferenceData {
        master,
        offices,
        warnings,
    }
}

/// Office names in file order, skipping blank cells and repeats.
fn office_names(rows: Vec<Vec<String>>) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(name) = row.into_iter().next() else {
            continue;
        };
        let name = name.trim().to_string();
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

fn note_lossy(label: &str, path: &Path, lossy_rows: usize, warnings: &mut Vec<String>) {
    if lossy_rows > 0 {
        warnings.push(format!(
            "{label} file '{}' is not valid UTF-8 in {lossy_rows} row(s); \
             unreadable characters are shown as U+FFFD. Re-save it as UTF-8.",
            path.display()
        ));
    }
}

fn note_status(label: &str, path: &Path, status: &LoadStatus, warnings: &mut Vec<String>) {
    let msg = match status {
        LoadStatus::Loaded { .. } => return,
        LoadStatus::Missing => format!("{label} file not found: {}", path.display()),
        LoadStatus::Empty => format!("{label} file is empty: {}", path.display()),
        LoadStatus::Malformed { reason } => {
            format!("{label} file could not be read and was ignored. {reason}")
        }
    };
    tracing::warn!("{}", msg);
    warnings.push(msg);
}
