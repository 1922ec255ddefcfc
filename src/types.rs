//! Core data model types for cleaning.
//!
//! This crate parses uploaded CSV data into an in-memory [`Table`] of
//! heterogeneous [`Value`]s, which the [`crate::cleaning`] pipeline
//! transforms into a cleaned copy.

/// A single cell value in a [`Table`].
///
/// Prior to final type inference a cell is missing, numeric, or text;
/// `Bool` is produced by the inference stage (and tolerated on input, where
/// text normalization renders it back to text).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value (the unified missing marker).
    Missing,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Text(String),
}

impl Value {
    /// Returns `true` for the missing marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns `true` for `Int64` and `Float64` values.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int64(_) | Self::Float64(_))
    }
}

/// In-memory tabular dataset.
///
/// Columns are ordered by name; rows are stored as `Vec<Vec<Value>>` in the
/// same order as `columns`. The cleaning pipeline assumes rows are
/// rectangular (every row has one cell per column); the CSV intake enforces
/// this before a `Table` is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Ordered column names.
    pub columns: Vec<String>,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from column names and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the table.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the index of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate the cells of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(move |row| row.get(index))
    }
}
