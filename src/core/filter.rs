// TaxDesk - core/filter.rs
//
// Search filter over master records.
// Both patterns are AND-combined; a blank pattern imposes no constraint.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::MasterRecord;

/// Owner-name and address patterns entered in the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Case-insensitive substring of the owner name. Blank = any name.
    pub name: String,

    /// Case-insensitive substring of the address. Blank = any address.
    pub address: String,
}

impl SearchQuery {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Returns true if neither pattern constrains the result.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.address.trim().is_empty()
    }
}

/// Return the records matching `query`, in their original order.
pub fn search(records: &[MasterRecord], query: &SearchQuery) -> Vec<MasterRecord> {
    matching_indices(records, query)
        .into_iter()
        .map(|i| records[i].clone())
        .collect()
}

/// Indices of the records matching `query`, ascending.
pub fn matching_indices(records: &[MasterRecord], query: &SearchQuery) -> Vec<usize> {
    if query.is_empty() {
        return (0..records.len()).collect();
    }

    // Blank after trimming means unconstrained; otherwise match as typed.
    let name_lower = pattern(&query.name);
    let address_lower = pattern(&query.address);

    records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            contains(&r.owner_name, name_lower.as_deref())
                && contains(&r.address, address_lower.as_deref())
        })
        .map(|(idx, _)| idx)
        .collect()
}

fn pattern(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw.to_lowercase())
    }
}

fn contains(field: &str, pattern_lower: Option<&str>) -> bool {
    match pattern_lower {
        None => true,
        Some(p) => field.to_lowercase().contains(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(plate: &str, name: &str, address: &str) -> MasterRecord {
        MasterRecord {
            license_plate: plate.to_string(),
            owner_name: name.to_string(),
            address: address.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<MasterRecord> {
        vec![
            rec("B1", "Jane Doe", "Jl. Merdeka 1"),
            rec("B2", "JOHN SMITH", "Jl. Sudirman 5"),
            rec("B3", "janet", "Gang Mawar"),
            rec("B4", "", "Jl. Merdeka 9"),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let records = sample();
        let result = search(&records, &SearchQuery::default());
        assert_eq!(result, records);
    }

    #[test]
    fn test_blank_patterns_are_unconstrained() {
        let records = sample();
        let result = matching_indices(&records, &SearchQuery::new("   ", "\t"));
        assert_eq!(result, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_name_is_case_insensitive_substring() {
        let records = sample();
        let result = matching_indices(&records, &SearchQuery::new("JAN", ""));
        assert_eq!(result, vec![0, 2]);
    }

    #[test]
    fn test_address_only() {
        let records = sample();
        let result = matching_indices(&records, &SearchQuery::new("", "merdeka"));
        assert_eq!(result, vec![0, 3]);
    }

    #[test]
    fn test_both_patterns_are_and_combined() {
        let records = sample();
        let result = search(&records, &SearchQuery::new("jane", "MERDEKA"));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].license_plate, "B1");
    }

    #[test]
    fn test_empty_field_never_matches_non_empty_pattern() {
        let records = sample();
        let result = matching_indices(&records, &SearchQuery::new("a", "Merdeka 9"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_pattern_is_not_a_regex() {
        let records = vec![rec("B1", "A.B", ""), rec("B2", "AxB", "")];
        let result = matching_indices(&records, &SearchQuery::new("a.b", ""));
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let records = sample();
        assert!(search(&records, &SearchQuery::new("zzz", "")).is_empty());
    }
}
