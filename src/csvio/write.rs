//! CSV delivery implementation.

use std::io;

use crate::error::ServiceResult;
use crate::types::{Table, Value};

/// Serialize a table to CSV: header row first, then data rows in table
/// order. Missing markers render as empty fields; the csv writer handles
/// quoting.
pub fn write_csv_to_writer<W: io::Write>(
    table: &Table,
    wtr: &mut csv::Writer<W>,
) -> ServiceResult<()> {
    if table.column_count() == 0 {
        return Ok(());
    }
    wtr.write_record(&table.columns)?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(render_cell))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Serialize a table to an in-memory byte buffer (the download path).
pub fn write_csv_to_bytes(table: &Table) -> ServiceResult<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut wtr = csv::Writer::from_writer(&mut buf);
        write_csv_to_writer(table, &mut wtr)?;
    }
    Ok(buf)
}

fn render_cell(value: &Value) -> String {
    match value {
        Value::Missing => String::new(),
        Value::Int64(v) => v.to_string(),
        Value::Float64(v) => v.to_string(),
        Value::Bool(v) => v.to_string(),
        Value::Text(s) => s.clone(),
    }
}
