// TaxDesk - tests/e2e_workflow.rs
//
// End-to-end tests for the search, save and reset workflow.
//
// These tests copy the fixture CSV files into a scratch data directory and
// drive the library exactly as the GUI does: load reference data, search,
// save through the session, read the result file back from disk. No mocks.

use std::fs;
use std::path::{Path, PathBuf};
use taxdesk::app::data::{load_reference_data, DataFiles};
use taxdesk::app::session::{SaveAction, SearchSession};
use taxdesk::app::store::ResultStore;
use taxdesk::core::dedup::merge_append;
use taxdesk::core::filter::{search, SearchQuery};
use taxdesk::core::model::{MasterRecord, SavedRecord, RESULT_COLUMNS};
use taxdesk::core::table;
use taxdesk::platform::config::AppConfig;
use taxdesk::util::error::{StoreError, TaxDeskError};
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A scratch data directory holding copies of both input fixtures.
fn data_dir() -> (TempDir, DataFiles) {
    let dir = TempDir::new().unwrap();
    let files = DataFiles::resolve(dir.path(), &AppConfig::default());
    fs::copy(fixture("data_master.csv"), &files.master).unwrap();
    fs::copy(fixture("data_instansi.csv"), &files.offices).unwrap();
    (dir, files)
}

fn master() -> Vec<MasterRecord> {
    let (_dir, files) = data_dir();
    load_reference_data(&files).master
}

fn plates(records: &[MasterRecord]) -> Vec<&str> {
    records.iter().map(|r| r.license_plate.as_str()).collect()
}

fn saved(office: &str, plate: &str, name: &str, address: &str, paid: &str) -> SavedRecord {
    MasterRecord {
        license_plate: plate.into(),
        owner_name: name.into(),
        address: address.into(),
        payment_status: paid.into(),
        ..Default::default()
    }
    .tagged(office)
}

fn header_of(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

// =============================================================================
// Reference data
// =============================================================================

#[test]
fn e2e_loads_fixture_reference_data() {
    let (_dir, files) = data_dir();
    let data = load_reference_data(&files);

    assert!(data.warnings.is_empty(), "unexpected warnings: {:?}", data.warnings);
    assert_eq!(data.master.len(), 5);
    assert_eq!(data.master[2].address, "Jl. Sudirman, RT 04");
    assert_eq!(
        data.offices,
        vec!["Dinas Perhubungan", "BPKAD", "Kecamatan Waru"],
        "offices are trimmed, blank lines skipped, repeats dropped"
    );
}

#[test]
fn e2e_missing_inputs_degrade_to_warnings() {
    let dir = TempDir::new().unwrap();
    let files = DataFiles::resolve(dir.path(), &AppConfig::default());
    let data = load_reference_data(&files);

    assert!(data.master.is_empty());
    assert!(data.offices.is_empty());
    assert_eq!(data.warnings.len(), 2, "{:?}", data.warnings);
}

#[test]
fn e2e_load_missing_path_gives_full_column_set() {
    let dir = TempDir::new().unwrap();
    let t = table::load(&dir.path().join("absent.csv"), &RESULT_COLUMNS);
    assert!(t.is_empty());
    assert_eq!(t.columns(), RESULT_COLUMNS.map(String::from).as_slice());
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn e2e_name_search_is_case_insensitive_and_ordered() {
    let records = master();
    let hits = search(&records, &SearchQuery::new("BUDI", ""));
    assert_eq!(plates(&hits), vec!["KT 1234 AB", "KT 3310 EF", "KT 5012 IJ"]);

    // Exactly the subset whose name contains the pattern.
    let expected: Vec<&MasterRecord> = records
        .iter()
        .filter(|r| r.owner_name.to_lowercase().contains("budi"))
        .collect();
    assert_eq!(hits.iter().collect::<Vec<_>>(), expected);
}

#[test]
fn e2e_empty_search_returns_everything() {
    let records = master();
    let hits = search(&records, &SearchQuery::new("", "   "));
    assert_eq!(hits, records);
}

#[test]
fn e2e_name_and_address_are_combined() {
    let records = master();
    let hits = search(&records, &SearchQuery::new("budi", "propinsi"));
    assert_eq!(plates(&hits), vec!["KT 1234 AB"]);

    let none = search(&records, &SearchQuery::new("siti", "propinsi"));
    assert!(none.is_empty());
}

// =============================================================================
// Save workflow
// =============================================================================

#[test]
fn e2e_search_save_and_reset_round_trip() {
    let (_dir, files) = data_dir();
    let data = load_reference_data(&files);
    let store = ResultStore::new(&files.results);
    store.ensure().unwrap();
    assert_eq!(header_of(&files.results), RESULT_COLUMNS.join(","));

    let mut session = SearchSession::new();
    let n = session
        .search(&data.master, &SearchQuery::new("", "propinsi"), Some("BPKAD"))
        .unwrap();
    assert_eq!(n, 2);

    let first = session.save(SaveAction::SaveOne(1), &store).unwrap();
    assert_eq!((first.before, first.after), (0, 1));

    let all = session.save(SaveAction::SaveAll, &store).unwrap();
    assert_eq!((all.before, all.after, all.added()), (1, 2, 1));

    // Row order on disk: the single save first, then the new row from SaveAll.
    let on_disk = store.load();
    assert_eq!(on_disk.len(), 2);
    assert_eq!(on_disk[0].record.license_plate, "KT 4477 GH");
    assert_eq!(on_disk[1].record.license_plate, "KT 1234 AB");
    assert!(on_disk.iter().all(|r| r.office_name == "BPKAD"));

    store.reset().unwrap();
    let reloaded = table::load(&files.results, &RESULT_COLUMNS);
    assert!(reloaded.is_empty());
    assert_eq!(reloaded.columns(), RESULT_COLUMNS.map(String::from).as_slice());
}

#[test]
fn e2e_same_rows_under_another_office_are_kept() {
    let (_dir, files) = data_dir();
    let data = load_reference_data(&files);
    let store = ResultStore::new(&files.results);

    let mut session = SearchSession::new();
    session
        .search(&data.master, &SearchQuery::new("siti", ""), Some("BPKAD"))
        .unwrap();
    session.save(SaveAction::SaveAll, &store).unwrap();
    session
        .search(&data.master, &SearchQuery::new("siti", ""), Some("Kecamatan Waru"))
        .unwrap();
    let outcome = session.save(SaveAction::SaveAll, &store).unwrap();

    assert_eq!((outcome.before, outcome.after), (1, 2));
}

#[test]
fn e2e_save_without_office_writes_nothing() {
    let (_dir, files) = data_dir();
    let data = load_reference_data(&files);
    let store = ResultStore::new(&files.results);

    let mut session = SearchSession::new();
    session.search(&data.master, &SearchQuery::default(), None).unwrap();

    assert!(session.save(SaveAction::SaveOne(0), &store).is_err());
    assert!(session.save(SaveAction::SaveAll, &store).is_err());
    assert!(!files.results.exists());
}

#[test]
fn e2e_write_failure_is_reported() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("hasil_pencarian.csv");
    fs::create_dir(&target).unwrap();

    let store = ResultStore::new(&target);
    let err = store
        .merge_append(&[saved("X", "KT1", "A", "B", "LUNAS")])
        .unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn e2e_unreadable_result_file_is_never_overwritten() {
    let (_dir, files) = data_dir();
    let data = load_reference_data(&files);
    let store = ResultStore::new(&files.results);

    let mut session = SearchSession::new();
    session
        .search(&data.master, &SearchQuery::new("budi", ""), Some("BPKAD"))
        .unwrap();
    session.save(SaveAction::SaveAll, &store).unwrap();

    // A row added by hand in a Latin-1 editor.
    let mut edited = fs::read(&files.results).unwrap();
    edited.extend_from_slice(b"BPKAD,KT 6001 KL,Jos\xe9 Ramos,Desa Sotek,,,,LUNAS\n");
    fs::write(&files.results, &edited).unwrap();

    let err = session.save(SaveAction::SaveOne(0), &store).unwrap_err();
    assert!(
        matches!(err, TaxDeskError::Store(StoreError::Unreadable { .. })),
        "{err}"
    );
    assert!(err.to_string().contains("nothing was saved"), "{err}");
    assert_eq!(fs::read(&files.results).unwrap(), edited);
    assert_eq!(store.load().len(), 4, "rows stay readable for the report");

    store.reset().unwrap();
    let outcome = session.save(SaveAction::SaveAll, &store).unwrap();
    assert_eq!((outcome.before, outcome.after), (0, 3));
}

#[test]
fn e2e_non_utf8_master_still_searchable() {
    let (_dir, files) = data_dir();
    let mut bytes = fs::read(&files.master).unwrap();
    bytes.extend_from_slice(b"KT 6001 KL,Jos\xe9 Ramos,Desa Sotek,,,,\n");
    fs::write(&files.master, &bytes).unwrap();

    let data = load_reference_data(&files);
    assert_eq!(data.master.len(), 6);
    assert_eq!(data.warnings.len(), 1, "{:?}", data.warnings);

    let hits = search(&data.master, &SearchQuery::new("ramos", ""));
    assert_eq!(plates(&hits), vec!["KT 6001 KL"]);
}

// =============================================================================
// Merge properties
// =============================================================================

#[test]
fn e2e_first_occurrence_wins() {
    let dir = TempDir::new().unwrap();
    let store = ResultStore::new(dir.path().join("hasil_pencarian.csv"));
    store
        .merge_append(&[saved("OFFICE_A", "B1234XY", "Jane", "Street 1", "LUNAS")])
        .unwrap();

    let outcome = store
        .merge_append(&[saved("OFFICE_A", "B1234XY", "Jane", "Street 1", "BELUM LUNAS")])
        .unwrap();

    assert_eq!((outcome.before, outcome.after), (1, 1));
    let rows = store.load();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].record.payment_status, "LUNAS");
}

#[test]
fn e2e_merge_is_idempotent_and_bounded() {
    let existing = vec![
        saved("A", "KT1", "Budi", "Jl. 1", "LUNAS"),
        saved("A", "KT2", "Siti", "Jl. 2", "LUNAS"),
    ];
    let incoming = vec![
        saved("A", "KT2", "Siti", "Jl. 2", "BELUM"),
        saved("B", "KT2", "Siti", "Jl. 2", "LUNAS"),
        saved("A", "KT3", "Rina", "Jl. 3", "LUNAS"),
        saved("A", "KT3", "Rina", "Jl. 3", "LUNAS"),
    ];

    let first = merge_append(existing.clone(), &incoming);
    assert!(first.after >= existing.len());
    assert!(first.after <= existing.len() + incoming.len());
    assert_eq!(first.after, 4);

    let second = merge_append(first.table.clone(), &incoming);
    assert_eq!(second.after, first.after);
    assert_eq!(second.table, first.table);
}
