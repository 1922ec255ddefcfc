//! The Table Cleaner: a fixed, deterministic cleanup pipeline.
//!
//! [`clean`] takes any rectangular [`Table`] and produces a cleaned copy
//! plus a [`CleanSummary`]. The input is never mutated. The stages run in a
//! fixed order:
//!
//! 1. column-name normalization ([`normalize`])
//! 2. text-value normalization ([`normalize`])
//! 3. column classification ([`classify`])
//! 4. sentinel-to-missing reclassification ([`missing`])
//! 5. missing-fill in numeric columns ([`missing`])
//! 6. row drop for missing values in categorical columns ([`missing`])
//! 7. duplicate-row elimination ([`dedup`])
//! 8. column type inference and coercion ([`infer`])
//!
//! Classification must run after text normalization (case/format variance
//! would otherwise misclassify) and before sentinel reclassification
//! (sentinel tokens count as ordinary values while classifying). The
//! pipeline is pure and synchronous; concurrent calls on separate tables
//! need no coordination.
//!
//! ## Example
//!
//! ```rust
//! use csvwash::cleaning::clean;
//! use csvwash::types::{Table, Value};
//!
//! let table = Table::new(
//!     vec!["Name ".to_string(), "Age".to_string()],
//!     vec![
//!         vec![Value::Text("Alice".to_string()), Value::Int64(30)],
//!         vec![Value::Text("alice".to_string()), Value::Int64(30)],
//!         vec![Value::Text("Bob".to_string()), Value::Missing],
//!     ],
//! );
//!
//! let (cleaned, summary) = clean(&table);
//! assert_eq!(cleaned.columns, vec!["name", "age"]);
//! // "Alice" and "alice" normalize to the same row; Bob's missing age is
//! // zero-filled because the age column is numeric.
//! assert_eq!(cleaned.rows.len(), 2);
//! assert_eq!(cleaned.rows[1], vec![Value::Text("bob".to_string()), Value::Int64(0)]);
//! assert_eq!(summary.original_row_count, 3);
//! assert_eq!(summary.rows_removed, 1);
//! ```

pub mod classify;
pub mod dedup;
pub mod infer;
pub mod missing;
pub mod normalize;

use serde::Serialize;

use crate::types::Table;

/// Summary of one cleaning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CleanSummary {
    /// Row count of the input table.
    pub original_row_count: usize,
    /// Rows removed by the pipeline (duplicates plus categorical-missing
    /// drops; the two contributions are not reported separately).
    pub rows_removed: usize,
}

/// Clean a table, returning the cleaned copy and a change summary.
///
/// Total over rectangular tables: it never fails, and an empty input (zero
/// rows or zero columns) yields an empty cleaned table with
/// `rows_removed = 0`.
pub fn clean(table: &Table) -> (Table, CleanSummary) {
    let mut work = table.clone();
    let original_row_count = work.row_count();

    normalize::normalize_column_names(&mut work);
    normalize::normalize_text_values(&mut work);
    let classes = classify::classify_columns(&work);
    missing::reclassify_sentinels(&mut work);
    missing::fill_numeric_missing(&mut work, &classes);
    missing::drop_rows_with_categorical_missing(&mut work, &classes);
    dedup::drop_duplicate_rows(&mut work);
    infer::coerce_column_types(&mut work);

    let summary = CleanSummary {
        original_row_count,
        rows_removed: original_row_count - work.row_count(),
    };
    (work, summary)
}
