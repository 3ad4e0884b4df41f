//! Cursor value extraction
//!
//! Reads the cursor column off a record and turns it into a numeric token.

use crate::access::{FieldAccessor, FieldValue};
use crate::error::{Error, Result};
use crate::pagination::OptionCollection;

/// Read the cursor token off a record
///
/// The cursor column is mapped through the record's naming convention.
/// A missing field or a record that is not a single structured value is
/// reported as `NonNumericCursor`.
pub fn extract_cursor_value<R: FieldAccessor + ?Sized>(
    collection: &OptionCollection,
    record: &R,
) -> Result<f64> {
    let column = &collection.option.cursor_column;
    let field = record.field_name(column);

    let value = match record.field(&field) {
        Ok(Some(value)) => value,
        Ok(None) => {
            return Err(Error::non_numeric(
                column,
                format!("field '{field}' does not exist on the record"),
            ))
        }
        Err(Error::NotAStruct { found }) => {
            return Err(Error::non_numeric(
                column,
                format!("record is not a struct (found {found})"),
            ))
        }
        Err(e) => return Err(e),
    };

    cursor_token(column, &value)
}

/// Convert a field value to a cursor token
///
/// Integers convert directly and floats widen exactly, so an `f32` token
/// compares equal to the stored column (`1.1f32` becomes
/// `1.100000023841858`). Strings are parsed as decimal numbers, untrimmed.
pub fn cursor_token(column: &str, value: &FieldValue) -> Result<f64> {
    match value {
        FieldValue::Int(v) => Ok(*v as f64),
        FieldValue::UInt(v) => Ok(*v as f64),
        FieldValue::Float64(v) => Ok(*v),
        FieldValue::Float32(v) => Ok(f64::from(*v)),
        FieldValue::Str(s) => s.parse::<f64>().map_err(|e| {
            Error::conversion(column, format!("string '{s}' convert to f64 failed: {e}"))
        }),
        other => Err(Error::non_numeric(
            column,
            format!("value of type {} is not numeric", other.kind()),
        )),
    }
}
