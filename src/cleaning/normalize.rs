//! Column-name and text-value normalization (pipeline stages 1 and 2).

use std::collections::HashSet;

use crate::types::{Table, Value};

/// Normalize a single column name: trim, lowercase, interior spaces to
/// underscores.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Normalize every column name in place.
///
/// Distinct names that normalize to the same string get a deterministic
/// numeric suffix in column order (`name`, `name_2`, `name_3`, ...), so the
/// cleaned table never carries duplicate column names.
pub(crate) fn normalize_column_names(table: &mut Table) {
    let mut taken: HashSet<String> = HashSet::with_capacity(table.columns.len());
    for name in &mut table.columns {
        let base = normalize_name(name);
        let mut candidate = base.clone();
        let mut n = 1usize;
        while !taken.insert(candidate.clone()) {
            n += 1;
            candidate = format!("{base}_{n}");
        }
        *name = candidate;
    }
}

/// Render a value to the textual representation used by stage 2.
///
/// The missing marker renders as `"nan"`, to be reclassified by the
/// sentinel pass.
pub(crate) fn render_text(value: &Value) -> String {
    match value {
        Value::Missing => "nan".to_string(),
        Value::Int64(v) => v.to_string(),
        Value::Float64(v) => v.to_string(),
        Value::Bool(v) => v.to_string(),
        Value::Text(s) => s.clone(),
    }
}

/// Normalize text values in place.
///
/// A column is touched only if it holds at least one non-numeric,
/// non-missing value; in touched columns every cell (missing included)
/// becomes trimmed, lowercased text. Columns that are numeric-or-missing
/// throughout keep their values untouched, so their missing markers survive
/// to the numeric fill stage.
pub(crate) fn normalize_text_values(table: &mut Table) {
    for col in 0..table.column_count() {
        let mixed = table
            .column_values(col)
            .any(|v| !v.is_numeric() && !v.is_missing());
        if !mixed {
            continue;
        }
        for row in &mut table.rows {
            let text = render_text(&row[col]).trim().to_lowercase();
            row[col] = Value::Text(text);
        }
    }
}
