// TaxDesk - app/session.rs
//
// Per-session search context: the current search result, the office that
// was selected when it was produced, and a summary of the last search.
//
// Lifecycle: created empty at start-up, replaced wholesale by every
// successful search, dropped when the window closes. Nothing here is
// persisted; only saved rows reach disk, through app::store.

use crate::app::store::ResultStore;
use crate::core::dedup::MergeOutcome;
use crate::core::filter::{self, SearchQuery};
use crate::core::model::{MasterRecord, SavedRecord};
use crate::util::error::{Result, SaveError, SearchError};

/// The two ways the operator can save search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    /// Save every row of the current result.
    SaveAll,
    /// Save a single row, by index into the current result.
    SaveOne(usize),
}

/// What the last successful search asked for and how many rows it found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub name: String,
    pub address: String,
    pub matches: usize,
}

/// Session-scoped search state.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    /// Rows matched by the last successful search.
    pub results: Vec<MasterRecord>,

    /// Office selected when the last search ran. Saved rows are tagged
    /// with this value.
    pub office: Option<String>,

    /// Summary of the last successful search, `None` before the first.
    pub last_search: Option<SearchSummary>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `query` against `master` and replace the session's result.
    ///
    /// An empty master table is reported as `SourceUnavailable` and leaves
    /// the previous result untouched. Returns the number of matches.
    pub fn search(
        &mut self,
        master: &[MasterRecord],
        query: &SearchQuery,
        office: Option<&str>,
    ) -> std::result::Result<usize, SearchError> {
        if master.is_empty() {
            return Err(SearchError::SourceUnavailable);
        }

        self.results = filter::search(master, query);
        self.office = office
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string);
        self.last_search = Some(SearchSummary {
            name: query.name.trim().to_string(),
            address: query.address.trim().to_string(),
            matches: self.results.len(),
        });

        tracing::debug!(
            matches = self.results.len(),
            office = self.office.as_deref().unwrap_or(""),
            "Search completed"
        );
        Ok(self.results.len())
    }

    /// Build the rows `action` would save, tagged with the session office.
    ///
    /// Fails without side effects when no office is selected, when there is
    /// nothing to save, or when `SaveOne` points outside the result.
    pub fn rows_for(&self, action: SaveAction) -> std::result::Result<Vec<SavedRecord>, SaveError> {
        let office = self.office.as_deref().ok_or(SaveError::NoOfficeSelected)?;
        match action {
            SaveAction::SaveAll => {
                if self.results.is_empty() {
                    return Err(SaveError::NoResults);
                }
                Ok(self.results.iter().map(|r| r.tagged(office)).collect())
            }
            SaveAction::SaveOne(index) => self
                .results
                .get(index)
                .map(|r| vec![r.tagged(office)])
                .ok_or(SaveError::RowOutOfRange {
                    index,
                    len: self.results.len(),
                }),
        }
    }

    /// Validate `action`, then merge its rows into `store`.
    pub fn save(&self, action: SaveAction, store: &ResultStore) -> Result<MergeOutcome> {
        let rows = self.rows_for(action)?;
        Ok(store.merge_append(&rows)?)
    }
}
