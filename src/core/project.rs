//! Projections from a parsed table to JSON shapes
//!
//! Two consumers of [`ParsedTable`]:
//! - records: first row = field names, every body row becomes one object,
//! - mapping: two-column body becomes one flat key/value object.
//!
//! Cell text is coerced with a strict JSON parse that falls back to the
//! raw string, so `42` becomes a number and `hello` stays a string.

use indexmap::IndexMap;
use serde_json::Value;

use super::grid::ParsedTable;
use crate::utils::error::{ExtractError, ExtractResult};

/// One output row: field name to coerced value, in column order.
/// Duplicate keys resolve to the last occurrence.
pub type Record = IndexMap<String, Value>;

/// Result of best-effort coercion of a cell's text.
///
/// Coercion never fails: text that is not a JSON literal degrades to
/// [`CoercedValue::RawText`] rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum CoercedValue {
    /// The text parsed as a JSON value
    Scalar(Value),
    /// The text as-is, kept as a plain string
    RawText(String),
}

impl CoercedValue {
    /// Coerce trimmed cell text via a strict JSON parse.
    pub fn coerce(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) => CoercedValue::Scalar(value),
            Err(_) => CoercedValue::RawText(text.to_string()),
        }
    }

    /// Convert into the JSON value to emit.
    pub fn into_json(self) -> Value {
        match self {
            CoercedValue::Scalar(value) => value,
            CoercedValue::RawText(text) => Value::String(text),
        }
    }
}

/// Project a table into one record per body row, keyed by the header.
///
/// Every body row must have exactly as many cells as the header has
/// fields; any mismatch is a [`ExtractError::ShapeMismatch`]. No rows are
/// filtered - a row with an empty first cell still yields a record.
pub fn records_from_table(table: &ParsedTable) -> ExtractResult<Vec<Record>> {
    let fields = table.field_names();
    let mut records = Vec::with_capacity(table.body.len());

    for (index, row) in table.body.iter().enumerate() {
        if row.len() != fields.len() {
            return Err(ExtractError::shape_at(
                format!(
                    "expected {} cells to match the header, found {}",
                    fields.len(),
                    row.len()
                ),
                index,
            ));
        }
        let mut record = Record::with_capacity(fields.len());
        for (field, cell) in fields.iter().zip(row) {
            record.insert(
                field.to_string(),
                CoercedValue::coerce(&cell.content).into_json(),
            );
        }
        records.push(record);
    }

    Ok(records)
}

/// Project a two-column table into one flat key/value record.
///
/// Cell 0 of each body row is the key, cell 1 the coerced value. Rows
/// whose key is empty after trimming are skipped; duplicate keys resolve
/// to the last occurrence. Any row without exactly two cells is a
/// [`ExtractError::ShapeMismatch`].
pub fn mapping_from_table(table: &ParsedTable) -> ExtractResult<Record> {
    let mut record = Record::new();

    for (index, row) in table.body.iter().enumerate() {
        if row.len() != 2 {
            return Err(ExtractError::shape_at(
                format!("expected exactly 2 cells (key, value), found {}", row.len()),
                index,
            ));
        }
        let key = row[0].content.trim();
        if key.is_empty() {
            continue;
        }
        record.insert(
            key.to_string(),
            CoercedValue::coerce(&row[1].content).into_json(),
        );
    }

    Ok(record)
}
