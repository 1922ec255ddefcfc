//! Duplicate-row elimination (pipeline stage 7).

use std::collections::HashSet;

use crate::types::{Table, Value};

/// Hashable stand-in for a cell; floats are keyed by their bit pattern so
/// rows stay hashable without an `Eq` float.
#[derive(Debug, Hash, PartialEq, Eq)]
enum CellKey {
    Missing,
    Int(i64),
    Float(u64),
    Bool(bool),
    Text(String),
}

fn row_key(row: &[Value]) -> Vec<CellKey> {
    row.iter()
        .map(|value| match value {
            Value::Missing => CellKey::Missing,
            Value::Int64(v) => CellKey::Int(*v),
            Value::Float64(v) => CellKey::Float(v.to_bits()),
            Value::Bool(v) => CellKey::Bool(*v),
            Value::Text(s) => CellKey::Text(s.clone()),
        })
        .collect()
}

/// Remove rows that duplicate an earlier row across every column, keeping
/// the first occurrence and the relative order of survivors.
pub(crate) fn drop_duplicate_rows(table: &mut Table) {
    let mut seen: HashSet<Vec<CellKey>> = HashSet::with_capacity(table.row_count());
    table.rows.retain(|row| seen.insert(row_key(row)));
}
