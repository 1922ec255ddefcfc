//! Missing-value handling (pipeline stages 4 to 6).

use super::classify::ColumnClass;
use crate::types::{Table, Value};

/// Tokens treated as missing, compared case-insensitively.
pub(crate) const SENTINEL_TOKENS: [&str; 6] = ["nan", "none", "", "error", "unknown", "n/a"];

/// Rewrite every sentinel-token cell to the missing marker.
///
/// This is a full-table pass over every column regardless of its class.
pub(crate) fn reclassify_sentinels(table: &mut Table) {
    for row in &mut table.rows {
        for value in row {
            if let Value::Text(s) = value {
                if SENTINEL_TOKENS.iter().any(|t| s.eq_ignore_ascii_case(t)) {
                    *value = Value::Missing;
                }
            }
        }
    }
}

/// Replace missing markers in numeric columns with the numeric value `0`.
///
/// The fill uses an integer zero; the inference stage widens it to float
/// when the rest of the column requires that.
pub(crate) fn fill_numeric_missing(table: &mut Table, classes: &[ColumnClass]) {
    for row in &mut table.rows {
        for (value, class) in row.iter_mut().zip(classes) {
            if *class == ColumnClass::Numeric && value.is_missing() {
                *value = Value::Int64(0);
            }
        }
    }
}

/// Remove every row holding a missing marker in any categorical column.
pub(crate) fn drop_rows_with_categorical_missing(table: &mut Table, classes: &[ColumnClass]) {
    table.rows.retain(|row| {
        row.iter()
            .zip(classes)
            .all(|(value, class)| !(*class == ColumnClass::Categorical && value.is_missing()))
    });
}
