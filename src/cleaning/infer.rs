//! Column type inference and coercion (pipeline stage 8).

use super::normalize::render_text;
use crate::types::{Table, Value};

/// Narrowest consistent column type, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InferredType {
    Int64,
    Float64,
    Bool,
    Text,
}

fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Int64(v) => Some(*v),
        Value::Float64(v)
            if v.is_finite()
                && v.fract() == 0.0
                && *v >= i64::MIN as f64
                && *v <= i64::MAX as f64 =>
        {
            Some(*v as i64)
        }
        Value::Text(s) => s.parse::<i64>().ok(),
        _ => None,
    }
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Int64(v) => Some(*v as f64),
        Value::Float64(v) => Some(*v),
        Value::Text(s) => s.parse::<f64>().ok(),
        _ => None,
    }
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(v) => Some(*v),
        Value::Text(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::Text(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

fn infer_column_type(table: &Table, col: usize) -> InferredType {
    let values = || table.column_values(col).filter(|v| !v.is_missing());
    if values().next().is_none() {
        return InferredType::Text;
    }
    if values().all(|v| as_int(v).is_some()) {
        InferredType::Int64
    } else if values().all(|v| as_float(v).is_some()) {
        InferredType::Float64
    } else if values().all(|v| as_bool(v).is_some()) {
        InferredType::Bool
    } else {
        InferredType::Text
    }
}

/// Infer the narrowest consistent type per column and coerce every value to
/// it. Missing markers stay missing under the inferred type; the earlier
/// stages guarantee none survive this far in practice.
pub(crate) fn coerce_column_types(table: &mut Table) {
    for col in 0..table.column_count() {
        let target = infer_column_type(table, col);
        for row in &mut table.rows {
            let value = &mut row[col];
            if value.is_missing() {
                continue;
            }
            *value = match target {
                InferredType::Int64 => as_int(value)
                    .map(Value::Int64)
                    .unwrap_or_else(|| value.clone()),
                InferredType::Float64 => as_float(value)
                    .map(Value::Float64)
                    .unwrap_or_else(|| value.clone()),
                InferredType::Bool => as_bool(value)
                    .map(Value::Bool)
                    .unwrap_or_else(|| value.clone()),
                InferredType::Text => Value::Text(render_text(value)),
            };
        }
    }
}
