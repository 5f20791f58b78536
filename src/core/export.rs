// TaxDesk - core/export.rs
//
// CSV and JSON serialisation of saved records.
// Core layer: writes to any Write trait object. The result file itself is
// written through `write_csv`, so the header is always present, even for an
// empty table.

use crate::core::model::{SavedRecord, RESULT_COLUMNS};
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Write `records` as CSV with the `RESULT_COLUMNS` header.
///
/// `export_path` is only used to give errors context. Returns the number of
/// data rows written.
pub fn write_csv<W: Write>(
    records: &[SavedRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let csv_err = |e: csv::Error| ExportError::Csv {
        path: export_path.to_path_buf(),
        source: e,
    };

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(RESULT_COLUMNS).map_err(csv_err)?;

    for record in records {
        csv_writer.write_record(record.cells()).map_err(csv_err)?;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(records.len())
}

/// Write `records` as a pretty-printed JSON array of objects keyed by
/// column name.
pub fn write_json<W: Write>(
    records: &[SavedRecord],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::MasterRecord;
    use crate::core::table;

    fn make_saved(plate: &str, name: &str) -> SavedRecord {
        MasterRecord {
            license_plate: plate.to_string(),
            owner_name: name.to_string(),
            address: "Jl. Merdeka, 5".to_string(),
            ..Default::default()
        }
        .tagged("SAMSAT PPU")
    }

    #[test]
    fn test_csv_header_written_for_empty_table() {
        let mut buf = Vec::new();
        let count = write_csv(&[], &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 0);

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.trim_end(), RESULT_COLUMNS.join(","));
    }

    #[test]
    fn test_csv_output_reads_back() {
        let records = vec![make_saved("B1", "Jane"), make_saved("B2", "John")];
        let mut buf = Vec::new();
        let count = write_csv(&records, &mut buf, Path::new("out.csv")).unwrap();
        assert_eq!(count, 2);

        let table = table::read_table(buf.as_slice(), &RESULT_COLUMNS).unwrap();
        assert_eq!(table.len(), 2);
        let back = SavedRecord::from_row(&table.rows()[0]);
        assert_eq!(back, records[0]);
    }

    #[test]
    fn test_json_export() {
        let records = vec![make_saved("B1", "Jane")];
        let mut buf = Vec::new();
        let count = write_json(&records, &mut buf, Path::new("out.json")).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"NAMA\": \"Jane\""));
        assert!(output.contains("SAMSAT PPU"));
    }
}
