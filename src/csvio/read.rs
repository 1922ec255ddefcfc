//! CSV intake implementation.

use std::io;
use std::path::Path;

use crate::error::ServiceResult;
use crate::types::{Table, Value};

/// Parse a CSV file into an in-memory [`Table`].
///
/// Rules:
///
/// - The first record is the header row; header cells become column names
///   verbatim (normalizing them is the cleaner's job).
/// - Cells parse to the narrowest of integer, float, or text; empty cells
///   and `nan` spellings become the missing marker.
/// - Rows must be rectangular; ragged input is an error.
pub fn read_csv_from_path(path: impl AsRef<Path>) -> ServiceResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    read_csv_from_reader(&mut rdr)
}

/// Parse CSV data from an in-memory byte buffer (the upload path).
pub fn read_csv_from_bytes(bytes: &[u8]) -> ServiceResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes);
    read_csv_from_reader(&mut rdr)
}

/// Parse CSV data from an existing CSV reader.
pub fn read_csv_from_reader<R: io::Read>(rdr: &mut csv::Reader<R>) -> ServiceResult<Table> {
    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_owned).collect();

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(parse_cell).collect());
    }

    let mut table = Table::new(columns, rows);
    unify_numeric_columns(&mut table);
    Ok(table)
}

fn parse_cell(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Missing;
    }
    if let Ok(v) = trimmed.parse::<i64>() {
        return Value::Int64(v);
    }
    if let Ok(v) = trimmed.parse::<f64>() {
        // "nan" and friends parse as float NaN; they carry no data, so they
        // land as the missing marker like the empty cell does.
        if v.is_nan() {
            return Value::Missing;
        }
        return Value::Float64(v);
    }
    Value::Text(trimmed.to_owned())
}

/// Promote integers to floats in columns that mix the two (and hold nothing
/// non-numeric), so each numeric column carries one representation and
/// duplicate detection sees `1` and `1.0` as the same cell.
fn unify_numeric_columns(table: &mut Table) {
    for col in 0..table.column_count() {
        let mut has_int = false;
        let mut has_float = false;
        let mut numeric_only = true;
        for value in table.column_values(col) {
            match value {
                Value::Int64(_) => has_int = true,
                Value::Float64(_) => has_float = true,
                Value::Missing => {}
                _ => {
                    numeric_only = false;
                    break;
                }
            }
        }
        if !(numeric_only && has_int && has_float) {
            continue;
        }
        for row in &mut table.rows {
            if let Value::Int64(v) = row[col] {
                row[col] = Value::Float64(v as f64);
            }
        }
    }
}
