// TaxDesk - core/dedup.rs
//
// Merge step of the result table: existing rows followed by incoming rows,
// reduced to the first occurrence of each dedup key. Existing rows therefore
// always win over incoming duplicates.
// Core layer: pure logic, persistence lives in app::store.

use crate::core::model::SavedRecord;
use std::collections::HashSet;

/// Result of a merge: the new table plus row counts for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Deduplicated table, ready to be written.
    pub table: Vec<SavedRecord>,

    /// Row count of the existing table before the merge.
    pub before: usize,

    /// Row count of the merged table.
    pub after: usize,
}

impl MergeOutcome {
    /// Number of rows the merge added (zero if every incoming row was a
    /// duplicate).
    pub fn added(&self) -> usize {
        self.after.saturating_sub(self.before)
    }
}

/// Concatenate `existing` and `incoming`, then keep only the first row for
/// each dedup key, preserving the relative order of survivors.
pub fn merge_append(existing: Vec<SavedRecord>, incoming: &[SavedRecord]) -> MergeOutcome {
    let before = existing.len();
    let mut table = existing;
    table.extend_from_slice(incoming);

    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(table.len());
        table.iter().map(|r| seen.insert(r.dedup_key())).collect()
    };
    let mut keep = keep.into_iter();
    table.retain(|_| keep.next().unwrap_or(false));

    let after = table.len();
    MergeOutcome {
        table,
        before,
        after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::MasterRecord;

    fn saved(office: &str, plate: &str, name: &str, address: &str, paid: &str) -> SavedRecord {
        SavedRecord {
            office_name: office.to_string(),
            record: MasterRecord {
                license_plate: plate.to_string(),
                owner_name: name.to_string(),
                address: address.to_string(),
                payment_status: paid.to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_existing_row_wins_over_incoming_duplicate() {
        let existing = vec![saved("OFFICE_A", "B1234XY", "Jane", "Street 1", "LUNAS")];
        let incoming = vec![saved("OFFICE_A", "B1234XY", "Jane", "Street 1", "BELUM")];

        let outcome = merge_append(existing, &incoming);
        assert_eq!(outcome.after, 1);
        assert_eq!(outcome.added(), 0);
        assert_eq!(outcome.table[0].record.payment_status, "LUNAS");
    }

    #[test]
    fn test_new_rows_are_appended_in_order() {
        let existing = vec![saved("A", "B1", "Jane", "S1", "")];
        let incoming = vec![saved("A", "B2", "John", "S2", ""), saved("A", "B3", "Ann", "S3", "")];

        let outcome = merge_append(existing, &incoming);
        let plates: Vec<_> = outcome
            .table
            .iter()
            .map(|r| r.record.license_plate.as_str())
            .collect();
        assert_eq!(plates, vec!["B1", "B2", "B3"]);
        assert_eq!((outcome.before, outcome.after, outcome.added()), (1, 3, 2));
    }

    #[test]
    fn test_duplicates_within_incoming_keep_first() {
        let incoming = vec![
            saved("A", "B1", "Jane", "S1", "first"),
            saved("A", "B1", "Jane", "S1", "second"),
        ];
        let outcome = merge_append(Vec::new(), &incoming);
        assert_eq!(outcome.after, 1);
        assert_eq!(outcome.table[0].record.payment_status, "first");
    }

    #[test]
    fn test_same_vehicle_for_different_office_is_not_duplicate() {
        let existing = vec![saved("A", "B1", "Jane", "S1", "")];
        let incoming = vec![saved("B", "B1", "Jane", "S1", "")];
        assert_eq!(merge_append(existing, &incoming).after, 2);
    }

    #[test]
    fn test_merge_is_idempotent_in_row_count() {
        let existing = vec![saved("A", "B1", "Jane", "S1", "")];
        let incoming = vec![saved("A", "B2", "John", "S2", ""), saved("A", "B1", "Jane", "S1", "")];

        let first = merge_append(existing, &incoming);
        let second = merge_append(first.table.clone(), &incoming);
        assert_eq!(second.after, first.after);
        assert_eq!(second.added(), 0);
        assert_eq!(second.table, first.table);
    }

    #[test]
    fn test_row_count_bounds() {
        let existing = vec![saved("A", "B1", "Jane", "S1", ""), saved("A", "B2", "John", "S2", "")];
        let incoming = vec![
            saved("A", "B2", "John", "S2", ""),
            saved("A", "B3", "Ann", "S3", ""),
            saved("C", "B3", "Ann", "S3", ""),
        ];
        let n_existing = existing.len();
        let outcome = merge_append(existing, &incoming);
        assert!(outcome.after >= n_existing);
        assert!(outcome.after <= n_existing + incoming.len());
        assert_eq!(outcome.after, 4);
    }
}
