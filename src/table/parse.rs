//! CSV parsing into a typed column table.

use crate::error::JobError;
use crate::table::{Table, Value};
use std::path::Path;

/// Parse a delimited file into a column-oriented table.
///
/// The first record is the header row. Cells are typed independently, so a
/// column may mix integers, floats, and text; ragged rows and read failures
/// surface as a parse error for the whole file.
pub fn parse_csv_file(path: &Path) -> Result<Table, JobError> {
    let parse_err = |reason: String| JobError::Parse {
        path: path.to_path_buf(),
        reason,
    };

    let mut reader = csv::Reader::from_path(path).map_err(|e| parse_err(e.to_string()))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| parse_err(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut columns: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|e| parse_err(e.to_string()))?;
        for (i, column) in columns.iter_mut().enumerate() {
            column.push(Value::parse(record.get(i).unwrap_or("")));
        }
    }

    Ok(Table::new(headers, columns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_headers_and_typed_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Year,Category,Amount").unwrap();
        writeln!(file, "2023,Rent,100.5").unwrap();
        writeln!(file, "2024,,200").unwrap();
        drop(file);

        let table = parse_csv_file(&path).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.column("Amount"),
            Some([Value::Float(100.5), Value::Integer(200)].as_slice())
        );
        assert_eq!(
            table.column("Category"),
            Some([Value::Text("Rent".to_string()), Value::Null].as_slice())
        );
    }

    #[test]
    fn unreadable_file_is_a_parse_error() {
        let err = parse_csv_file(Path::new("no/such/file.csv")).unwrap_err();
        assert!(matches!(err, JobError::Parse { .. }));
    }
}
