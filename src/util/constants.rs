// TaxDesk - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "TaxDesk";

/// Application identifier used for config directories.
pub const APP_ID: &str = "TaxDesk";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Window title shown above the search form.
pub const APP_TITLE: &str = "Pusat Informasi Pajak Kendaraan";

// =============================================================================
// Data files
// =============================================================================

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Vehicle-tax master table (read-only, externally maintained).
pub const DEFAULT_MASTER_FILE: &str = "data_master.csv";

/// Office (instansi) reference list (read-only).
pub const DEFAULT_OFFICE_FILE: &str = "data_instansi.csv";

/// Persisted result table, created header-only when absent.
pub const DEFAULT_RESULT_FILE: &str = "hasil_pencarian.csv";

/// Suggested file name for the CSV export dialog.
pub const EXPORT_CSV_FILE_NAME: &str = "hasil_pencarian.csv";

/// Suggested file name for the JSON export dialog.
pub const EXPORT_JSON_FILE_NAME: &str = "hasil_pencarian.json";

/// Maximum accepted length of a configured file name.
pub const MAX_FILE_NAME_LENGTH: usize = 255;

// =============================================================================
// UI limits
// =============================================================================

/// Maximum number of non-fatal warnings kept for the data summary window.
/// Older warnings are dropped first.
pub const MAX_WARNINGS: usize = 200;

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
