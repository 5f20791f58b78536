// TaxDesk - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// Column names are the on-disk headers of the three CSV files. Records are
// built from rows that `core::table` has already normalised to one of these
// column sets, so conversion is positional.

use serde::Serialize;

/// Header of the master table, in the order `MasterRecord` fields appear.
pub const MASTER_COLUMNS: [&str; 7] = [
    "NOPOL",
    "NAMA",
    "ALAMAT",
    "TANGGAL_PKB",
    "TANGGAL_STNK",
    "STATUS_KB",
    "STATUS_BAYAR",
];

/// Header of the office reference list.
pub const OFFICE_COLUMNS: [&str; 1] = ["NAMA_INSTANSI"];

/// Header of the persisted result table: the office tag followed by the
/// master columns.
pub const RESULT_COLUMNS: [&str; 8] = [
    "NAMA_INSTANSI",
    "NOPOL",
    "NAMA",
    "ALAMAT",
    "TANGGAL_PKB",
    "TANGGAL_STNK",
    "STATUS_KB",
    "STATUS_BAYAR",
];

// =============================================================================
// Master record
// =============================================================================

/// One row of the vehicle-tax master table. All values are kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MasterRecord {
    #[serde(rename = "NOPOL")]
    pub license_plate: String,
    #[serde(rename = "NAMA")]
    pub owner_name: String,
    #[serde(rename = "ALAMAT")]
    pub address: String,
    #[serde(rename = "TANGGAL_PKB")]
    pub tax_due_date: String,
    #[serde(rename = "TANGGAL_STNK")]
    pub registration_due_date: String,
    #[serde(rename = "STATUS_KB")]
    pub vehicle_status: String,
    #[serde(rename = "STATUS_BAYAR")]
    pub payment_status: String,
}

impl MasterRecord {
    /// Build a record from a row laid out as `MASTER_COLUMNS`.
    /// Missing trailing cells become empty text.
    pub fn from_row(row: &[String]) -> Self {
        let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
        Self {
            license_plate: cell(0),
            owner_name: cell(1),
            address: cell(2),
            tax_due_date: cell(3),
            registration_due_date: cell(4),
            vehicle_status: cell(5),
            payment_status: cell(6),
        }
    }

    /// Cells in `MASTER_COLUMNS` order.
    pub fn cells(&self) -> [&str; 7] {
        [
            self.license_plate.as_str(),
            self.owner_name.as_str(),
            self.address.as_str(),
            self.tax_due_date.as_str(),
            self.registration_due_date.as_str(),
            self.vehicle_status.as_str(),
            self.payment_status.as_str(),
        ]
    }

    /// Tag this record with an office, producing the unit that is persisted.
    pub fn tagged(&self, office: &str) -> SavedRecord {
        SavedRecord {
            office_name: office.to_string(),
            record: self.clone(),
        }
    }
}

// =============================================================================
// Saved record
// =============================================================================

/// A master record tagged with the office it was saved for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SavedRecord {
    #[serde(rename = "NAMA_INSTANSI")]
    pub office_name: String,
    #[serde(flatten)]
    pub record: MasterRecord,
}

/// The four fields that make a saved row unique in the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DedupKey<'a> {
    pub office_name: &'a str,
    pub license_plate: &'a str,
    pub owner_name: &'a str,
    pub address: &'a str,
}

impl SavedRecord {
    /// Build a saved record from a row laid out as `RESULT_COLUMNS`.
    pub fn from_row(row: &[String]) -> Self {
        Self {
            office_name: row.first().cloned().unwrap_or_default(),
            record: MasterRecord::from_row(row.get(1..).unwrap_or_default()),
        }
    }

    /// Cells in `RESULT_COLUMNS` order.
    pub fn cells(&self) -> [&str; 8] {
        let r = &self.record;
        [
            self.office_name.as_str(),
            r.license_plate.as_str(),
            r.owner_name.as_str(),
            r.address.as_str(),
            r.tax_due_date.as_str(),
            r.registration_due_date.as_str(),
            r.vehicle_status.as_str(),
            r.payment_status.as_str(),
        ]
    }

    /// Key used to reject duplicate rows.
    pub fn dedup_key(&self) -> DedupKey<'_> {
        DedupKey {
            office_name: &self.office_name,
            license_plate: &self.record.license_plate,
            owner_name: &self.record.owner_name,
            address: &self.record.address,
        }
    }
}
