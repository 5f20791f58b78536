// TaxDesk - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every subsystem has its own enum. Operations that span subsystems (the
// save path: validate, then persist) return `TaxDeskError`; the others
// return their subsystem enum directly.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for operations that cross subsystems.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum TaxDeskError {
    /// A save request was rejected before touching the result file.
    Save(SaveError),

    /// Persisting the result table failed.
    Store(StoreError),
}

impl fmt::Display for TaxDeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Save(e) => write!(f, "Save rejected: {e}"),
            Self::Store(e) => write!(f, "Result file error: {e}"),
        }
    }
}

impl std::error::Error for TaxDeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Save(e) => Some(e),
            Self::Store(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Table errors
// ---------------------------------------------------------------------------

/// Errors raised while reading a header-row CSV table.
#[derive(Debug)]
pub enum TableError {
    /// The file could not be opened or read.
    Io { path: PathBuf, source: io::Error },

    /// The file content is not a readable CSV table.
    Csv { path: PathBuf, source: csv::Error },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "Malformed CSV '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Search errors
// ---------------------------------------------------------------------------

/// Errors related to running a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The master table is empty or failed to load, so there is nothing to
    /// search. Distinct from a search that matched zero rows.
    SourceUnavailable,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable => {
                write!(f, "Master data is empty or could not be loaded")
            }
        }
    }
}

impl std::error::Error for SearchError {}

// ---------------------------------------------------------------------------
// Save errors
// ---------------------------------------------------------------------------

/// User-input errors that cause a save request to be skipped entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// No office was selected when the search was run.
    NoOfficeSelected,

    /// There is no search result to save.
    NoResults,

    /// A per-row save referenced a row that is not in the current result.
    RowOutOfRange { index: usize, len: usize },
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOfficeSelected => write!(f, "Select an office (instansi) first"),
            Self::NoResults => write!(f, "There are no search results to save"),
            Self::RowOutOfRange { index, len } => write!(
                f,
                "Row {index} is not part of the current result ({len} rows)"
            ),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<SaveError> for TaxDeskError {
    fn from(e: SaveError) -> Self {
        Self::Save(e)
    }
}

// ---------------------------------------------------------------------------
// Store errors
// ---------------------------------------------------------------------------

/// Errors raised while writing the result table.
///
/// The result file is rewritten in place, so a write error may leave it
/// truncated. `Unreadable` is raised before anything is written.
#[derive(Debug)]
pub enum StoreError {
    /// The existing result file cannot be read back intact, so merging
    /// into it would drop saved rows.
    Unreadable { path: PathBuf, reason: String },

    /// The data directory could not be created.
    CreateDir { path: PathBuf, source: io::Error },

    /// I/O error creating or writing the result file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, reason } => write!(
                f,
                "Result file '{}' cannot be read back intact ({reason}); nothing was saved. \
                 Fix the file or reset it.",
                path.display()
            ),
            Self::CreateDir { path, source } => write!(
                f,
                "Cannot create data directory '{}': {source}",
                path.display()
            ),
            Self::Io { path, source } => {
                write!(f, "Failed to save '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "Failed to write CSV '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Unreadable { .. } => None,
        }
    }
}

impl From<StoreError> for TaxDeskError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export file.
    Io { path: PathBuf, source: io::Error },

    /// CSV serialisation error.
    Csv { path: PathBuf, source: csv::Error },

    /// JSON serialisation error.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Export I/O error '{}': {source}", path.display())
            }
            Self::Csv { path, source } => {
                write!(f, "CSV export error '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "JSON export error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for TaxDesk results.
pub type Result<T> = std::result::Result<T, TaxDeskError>;
