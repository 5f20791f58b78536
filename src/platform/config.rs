// TaxDesk - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with start-up validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Resolved platform paths for TaxDesk configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/taxdesk/ or %APPDATA%\TaxDesk\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Default location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file still works
/// with an older binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[data]` section.
    pub data: DataSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[data]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DataSection {
    /// Directory holding the three CSV files.
    pub dir: Option<String>,
    /// Master table file name.
    pub master_file: Option<String>,
    /// Office list file name.
    pub office_file: Option<String>,
    /// Result table file name.
    pub result_file: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path (empty = stderr only).
    pub file: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- Data --
    /// Data directory.
    pub data_dir: PathBuf,
    /// Master table file name inside `data_dir`.
    pub master_file: String,
    /// Office list file name inside `data_dir`.
    pub office_file: String,
    /// Result table file name inside `data_dir`.
    pub result_file: String,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file path.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(constants::DEFAULT_DATA_DIR),
            master_file: constants::DEFAULT_MASTER_FILE.to_string(),
            office_file: constants::DEFAULT_OFFICE_FILE.to_string(),
            result_file: constants::DEFAULT_RESULT_FILE.to_string(),
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            log_level: None,
            log_file: None,
        }
    }
}

/// Load and validate `config.toml` at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unparseable, returns defaults with a warning so the
/// application still starts but the user is informed.
///
/// Runs before logging is initialised, so problems are reported only
/// through the returned warnings.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    match toml::from_str::<RawConfig>(&content) {
        Ok(raw) => {
            let config = validate(raw, &mut warnings);
            (config, warnings)
        }
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path.to_path_buf(),
                source: e,
            };
            warnings.push(format!("{err}. Using defaults."));
            (AppConfig::default(), warnings)
        }
    }
}

/// Validate each field against named constants, accumulating all problems.
pub fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- Data: dir --
    if let Some(dir) = raw.data.dir {
        if dir.trim().is_empty() {
            warnings.push(format!(
                "[data] dir is empty. Using default ({}).",
                constants::DEFAULT_DATA_DIR
            ));
        } else {
            config.data_dir = PathBuf::from(dir);
        }
    }

    // -- Data: file names --
    if let Some(name) = raw.data.master_file {
        if let Some(valid) = check_file_name("master_file", &name, warnings) {
            config.master_file = valid;
        }
    }
    if let Some(name) = raw.data.office_file {
        if let Some(valid) = check_file_name("office_file", &name, warnings) {
            config.office_file = valid;
        }
    }
    if let Some(name) = raw.data.result_file {
        if let Some(valid) = check_file_name("result_file", &name, warnings) {
            config.result_file = valid;
        }
    }

    // The result file is rewritten on every save; it must never alias an
    // input table.
    if config.result_file == config.master_file || config.result_file == config.office_file {
        warnings.push(format!(
            "[data] result_file = \"{}\" collides with an input file. Using default ({}).",
            config.result_file,
            constants::DEFAULT_RESULT_FILE,
        ));
        config.result_file = constants::DEFAULT_RESULT_FILE.to_string();
        if config.master_file == config.result_file || config.office_file == config.result_file {
            config.master_file = constants::DEFAULT_MASTER_FILE.to_string();
            config.office_file = constants::DEFAULT_OFFICE_FILE.to_string();
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            let err = ConfigError::ValueOutOfRange {
                field: "ui.font_size".to_string(),
                value: size.to_string(),
                expected: format!("{}-{}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
            };
            warnings.push(format!(
                "{err}. Using default ({}).",
                constants::DEFAULT_FONT_SIZE
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        if !file.is_empty() {
            config.log_file = Some(PathBuf::from(file));
        }
    }

    config
}

/// A configured file name must be a bare, non-empty file name.
fn check_file_name(field: &str, name: &str, warnings: &mut Vec<String>) -> Option<String> {
    let trimmed = name.trim();
    let bare = Path::new(trimmed).file_name() == Some(OsStr::new(trimmed));
    if trimmed.is_empty() || !bare || trimmed.len() > constants::MAX_FILE_NAME_LENGTH {
        warnings.push(format!(
            "[data] {field} = \"{name}\" must be a plain file name inside the data directory. \
             Using default.",
        ));
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(toml_text: &str) -> (AppConfig, Vec<String>) {
        let raw: RawConfig = toml::from_str(toml_text).unwrap();
        let mut warnings = Vec::new();
        let config = validate(raw, &mut warnings);
        (config, warnings)
    }

    #[test]
    fn test_missing_file_gives_defaults_silently() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unparseable_file_warns() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[data\ndir = ").unwrap();
        let (config, warnings) = load_config(&path);
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_valid_values_are_applied() {
        let (config, warnings) = parse(
            r#"
            [data]
            dir = "/srv/pajak"
            master_file = "master_2026.csv"

            [ui]
            theme = "Light"
            font_size = 16.0

            [logging]
            level = "DEBUG"
            file = "taxdesk.log"
            "#,
        );
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.data_dir, PathBuf::from("/srv/pajak"));
        assert_eq!(config.master_file, "master_2026.csv");
        assert!(!config.dark_mode);
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file, Some(PathBuf::from("taxdesk.log")));
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let (config, warnings) = parse(
            r#"
            [ui]
            theme = "purple"
            font_size = 99.0
            [logging]
            level = "loud"
            "#,
        );
        assert_eq!(warnings.len(), 3);
        assert!(config.dark_mode);
        assert_eq!(config.font_size, constants::DEFAULT_FONT_SIZE);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_file_name_with_directory_is_rejected() {
        let (config, warnings) = parse("[data]\nresult_file = \"../elsewhere.csv\"\n");
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.result_file, constants::DEFAULT_RESULT_FILE);
    }

    #[test]
    fn test_result_file_may_not_alias_master() {
        let (config, warnings) = parse("[data]\nresult_file = \"data_master.csv\"\n");
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.result_file, constants::DEFAULT_RESULT_FILE);
        assert_eq!(config.master_file, constants::DEFAULT_MASTER_FILE);
    }
}
