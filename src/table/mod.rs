//! Column-oriented in-memory table parsed from a delimited file.

pub mod parse;
pub mod value;

pub use parse::parse_csv_file;
pub use value::Value;

use std::collections::BTreeMap;

/// Named columns of equal length, one row per source record.
///
/// Owned transiently per source file; the measure resolver adds one synthetic
/// column, and the whole table is dropped once its charts are rendered.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: BTreeMap<String, Vec<Value>>,
    rows: usize,
}

impl Table {
    pub fn new(headers: Vec<String>, columns: Vec<Vec<Value>>) -> Self {
        let rows = columns.first().map(|c| c.len()).unwrap_or(0);
        let columns = headers.into_iter().zip(columns).collect();
        Table { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(|c| c.as_slice())
    }

    /// Insert or replace a column; its length must match the row count.
    pub fn insert_column(&mut self, name: &str, values: Vec<Value>) {
        debug_assert_eq!(values.len(), self.rows);
        self.columns.insert(name.to_string(), values);
    }
}
