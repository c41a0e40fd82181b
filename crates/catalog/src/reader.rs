//! CSV input.

use crate::error::Result;
use crate::row::RawRow;
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads a CSV file into raw rows.
pub fn read_rows_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawRow>> {
    let path = path.as_ref();
    log::debug!("Reading catalog from {}", path.display());
    let file = File::open(path)?;
    read_rows(file)
}

/// Reads CSV text with a header line into raw rows.
///
/// Short rows are allowed; cells past the header are ignored. Rows whose
/// cells are all blank are skipped and leave no gap, so the index of a row
/// in the returned vector counts data rows only.
pub fn read_rows<R: Read>(source: R) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: RawRow = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();

        if row.values().all(|v| v.trim().is_empty()) {
            continue;
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_rows() {
        let text = "Part Name,Width,Height,Thickness\nSide,12,30,0.75\nTop,24,12,0.75\n";
        let rows = read_rows(text.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Part Name").map(String::as_str), Some("Side"));
        assert_eq!(rows[1].get("Width").map(String::as_str), Some("24"));
    }

    #[test]
    fn test_short_rows_and_blank_lines() {
        let text = "Width,Height,Thickness,Quantity\n10,10,0.5\n,,,\n20,5,0.5,2\n";
        let rows = read_rows(text.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].get("Quantity").is_none());
        assert_eq!(rows[1].get("Quantity").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_headers_are_kept_raw() {
        let rows = read_rows(" Length ,Height\n5,6\n".as_bytes()).unwrap();
        assert_eq!(rows[0].get(" Length ").map(String::as_str), Some("5"));
    }

    #[test]
    fn test_read_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Width,Height,Thickness").unwrap();
        writeln!(file, "1,2,3").unwrap();

        let rows = read_rows_from_path(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_rows_from_path(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, crate::CatalogError::Io(_)));
    }
}
