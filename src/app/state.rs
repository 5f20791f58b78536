// TaxDesk - app/state.rs
//
// Application state management. Holds the loaded reference data, the
// search session, the search form inputs and UI flags.
// Owned by the eframe::App implementation; every handler runs to
// completion inside the frame that triggered it.

use crate::app::data::{self, DataFiles};
use crate::app::session::{SaveAction, SearchSession};
use crate::app::store::ResultStore;
use crate::core::filter::SearchQuery;
use crate::core::model::{MasterRecord, SavedRecord};
use crate::util::constants::MAX_WARNINGS;
use crate::util::error::{SearchError, TaxDeskError};
use std::path::Path;

/// Which page the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Search,
    Report,
}

/// Severity of the status bar message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Inputs of the sidebar search form.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    /// Index into `AppState::offices`.
    pub office_index: Option<usize>,
    pub name: String,
    pub address: String,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Resolved data file locations.
    pub files: DataFiles,

    /// Read-only master table.
    pub master: Vec<MasterRecord>,

    /// Office names offered in the sidebar.
    pub offices: Vec<String>,

    /// Persisted result table.
    pub store: ResultStore,

    /// Search session context.
    pub session: SearchSession,

    /// Sidebar form inputs.
    pub form: SearchForm,

    /// Current page.
    pub page: Page,

    /// Saved rows shown on the report page (refreshed on demand).
    pub report_rows: Vec<SavedRecord>,

    /// Rows currently in the result file.
    pub saved_count: usize,

    /// Status message for the status bar.
    pub status_message: String,

    /// Colour class of `status_message`.
    pub status_kind: StatusKind,

    /// Non-fatal warnings (load and config problems), oldest first.
    pub warnings: Vec<String>,

    /// Whether to show the data summary window.
    pub show_summary: bool,

    /// Whether to show the reset confirmation window.
    pub show_reset_confirm: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create state for `files`, creating the result file if needed and
    /// loading the reference tables.
    pub fn new(files: DataFiles, debug_mode: bool) -> Self {
        let store = ResultStore::new(&files.results);
        let mut state = Self {
            files,
            master: Vec::new(),
            offices: Vec::new(),
            store,
            session: SearchSession::new(),
            form: SearchForm::default(),
            page: Page::Search,
            report_rows: Vec::new(),
            saved_count: 0,
            status_message: "Ready.".to_string(),
            status_kind: StatusKind::Info,
            warnings: Vec::new(),
            show_summary: false,
            show_reset_confirm: false,
            show_about: false,
            debug_mode,
        };

        if let Err(e) = state.store.ensure() {
            tracing::error!(error = %e, "Cannot prepare result file");
            state.push_warning(e.to_string());
        }
        state.reload_data();
        state
    }

    /// Reload master, office and result tables from disk.
    ///
    /// The search session is kept; the office selection is cleared if the
    /// office list no longer covers it.
    pub fn reload_data(&mut self) {
        let data = data::load_reference_data(&self.files);
        self.master = data.master;
        self.offices = data.offices;
        for w in data.warnings {
            self.push_warning(w);
        }

        if self.offices.is_empty() {
            self.form.office_index = None;
        } else if self.form.office_index.map_or(true, |i| i >= self.offices.len()) {
            self.form.office_index = Some(0);
        }

        self.refresh_report();

        if self.master.is_empty() {
            self.set_status(
                StatusKind::Warning,
                format!("Master data is empty or missing: {}", self.files.master.display()),
            );
        } else {
            self.set_status(
                StatusKind::Info,
                format!(
                    "Loaded {} master rows and {} offices.",
                    self.master.len(),
                    self.offices.len()
                ),
            );
        }
        if !self.warnings.is_empty() {
            self.show_summary = true;
        }
    }

    /// Office currently chosen in the sidebar.
    pub fn selected_office(&self) -> Option<&str> {
        self.form
            .office_index
            .and_then(|i| self.offices.get(i))
            .map(String::as_str)
    }

    /// Run the sidebar search.
    pub fn run_search(&mut self) {
        let query = SearchQuery::new(self.form.name.clone(), self.form.address.clone());
        let office = self.selected_office().map(str::to_string);
        match self.session.search(&self.master, &query, office.as_deref()) {
            Ok(n) => {
                self.page = Page::Search;
                self.set_status(StatusKind::Info, format!("Search found {n} row(s)."));
            }
            Err(SearchError::SourceUnavailable) => {
                self.set_status(
                    StatusKind::Error,
                    format!(
                        "Master file is empty or not found: {}",
                        self.files.master.display()
                    ),
                );
            }
        }
    }

    /// Apply a save request from the search page.
    pub fn save(&mut self, action: SaveAction) {
        match self.session.save(action, &self.store) {
            Ok(outcome) => {
                self.saved_count = outcome.after;
                let what = match action {
                    SaveAction::SaveAll => "Saved search results".to_string(),
                    SaveAction::SaveOne(i) => {
                        let plate = self
                            .session
                            .results
                            .get(i)
                            .map(|r| r.license_plate.as_str())
                            .unwrap_or("?");
                        format!("Saved row {plate}")
                    }
                };
                self.set_status(
                    StatusKind::Success,
                    format!(
                        "{what} at {}: {} \u{2192} {} rows (+{}).",
                        chrono::Local::now().format("%H:%M:%S"),
                        outcome.before,
                        outcome.after,
                        outcome.added()
                    ),
                );
            }
            Err(TaxDeskError::Save(e)) => {
                self.set_status(StatusKind::Warning, e.to_string());
            }
            Err(e) => {
                tracing::error!(error = %e, "Saving to result file failed");
                self.set_status(StatusKind::Error, e.to_string());
                // The file may now hold anything; show what is really there.
                self.refresh_report();
            }
        }
    }

    /// Reset the result file to header only.
    pub fn reset_results(&mut self) {
        match self.store.reset() {
            Ok(()) => {
                self.set_status(
                    StatusKind::Success,
                    format!("{} reset (header only).", self.files.results.display()),
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Resetting result file failed");
                self.set_status(StatusKind::Error, e.to_string());
            }
        }
        self.refresh_report();
    }

    /// Re-read the result file for the report page and row counter.
    ///
    /// A file that cannot be read back intact is still shown as far as it
    /// can be decoded, with a warning; saving into it is refused by the store.
    pub fn refresh_report(&mut self) {
        let rows = match self.store.readable_rows() {
            Ok(rows) => rows,
            Err(e) => {
                self.push_warning(e.to_string());
                self.show_summary = true;
                self.store.load()
            }
        };
        self.saved_count = rows.len();
        self.report_rows = rows;
    }

    /// Copy the result file verbatim to `dest`.
    pub fn export_csv(&mut self, dest: &Path) {
        match self.store.export_csv(dest) {
            Ok(n) => self.set_status(
                StatusKind::Success,
                format!("Exported {n} rows to {}.", dest.display()),
            ),
            Err(e) => self.set_status(StatusKind::Error, e.to_string()),
        }
    }

    /// Write the saved rows to `dest` as JSON.
    pub fn export_json(&mut self, dest: &Path) {
        match self.store.export_json(dest) {
            Ok(n) => self.set_status(
                StatusKind::Success,
                format!("Exported {n} rows to {}.", dest.display()),
            ),
            Err(e) => self.set_status(StatusKind::Error, e.to_string()),
        }
    }

    /// Record a non-fatal warning, dropping the oldest past the cap.
    pub fn push_warning(&mut self, warning: String) {
        if self.warnings.contains(&warning) {
            return;
        }
        self.warnings.push(warning);
        if self.warnings.len() > MAX_WARNINGS {
            let excess = self.warnings.len() - MAX_WARNINGS;
            self.warnings.drain(..excess);
        }
    }

    pub fn set_status(&mut self, kind: StatusKind, message: String) {
        self.status_kind = kind;
        self.status_message = message;
    }
}
