//! Column classification (pipeline stage 3).

use crate::types::Table;

/// Type class of a column, fixed for the duration of one cleaning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ColumnClass {
    /// Every value is numeric or missing.
    Numeric,
    /// Anything else.
    Categorical,
}

/// Classify every column of the (text-normalized) table.
///
/// Missing markers count toward numeric, so an all-missing column is
/// numeric and gets zero-filled rather than dropping every row. Zero-row
/// columns are vacuously numeric. The classification is computed once and
/// does not change even when later stages mutate the column's contents.
pub(crate) fn classify_columns(table: &Table) -> Vec<ColumnClass> {
    (0..table.column_count())
        .map(|col| {
            let numeric = table
                .column_values(col)
                .all(|v| v.is_numeric() || v.is_missing());
            if numeric {
                ColumnClass::Numeric
            } else {
                ColumnClass::Categorical
            }
        })
        .collect()
}
