//! Result interpretation
//!
//! Undo the sort-order inversion of backward cursor jumps and derive the
//! cursor token for the next request.

use super::extract::extract_cursor_value;
use super::types::SliceInfo;
use crate::access::FieldAccessor;
use crate::error::Result;
use crate::pagination::OptionCollection;
use tracing::debug;

/// Strategy interpreting the rows a query executor fetched
///
/// Both methods have default implementations; custom interpreters override
/// the one they need.
pub trait ResultInterpreter: Send + Sync {
    /// Put `records` in user-facing order and read the next cursor token off
    /// the last one.
    ///
    /// Reversal happens in place and before anything else reads the slice,
    /// since it decides which record is last.
    fn calc_result_slice<R: FieldAccessor>(
        &self,
        collection: &OptionCollection,
        records: &mut [R],
    ) -> Result<SliceInfo> {
        let mut info = SliceInfo {
            slice_len: records.len(),
            cursor_value: 0.0,
        };

        if records.is_empty() {
            return Ok(info);
        }

        if collection.is_reverse {
            debug!(len = records.len(), "Reversing fetched records");
            reverse_records(records);
        }

        if let Some(last) = records.last() {
            info.cursor_value = self.cursor_value(collection, last)?;
        }
        Ok(info)
    }

    /// Read the cursor token off a record
    fn cursor_value<R: FieldAccessor + ?Sized>(
        &self,
        collection: &OptionCollection,
        record: &R,
    ) -> Result<f64> {
        extract_cursor_value(collection, record)
    }
}

/// Default result interpreter
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInterpreter;

impl ResultInterpreter for DefaultInterpreter {}

/// Reverse records in place; a no-op for fewer than two
pub fn reverse_records<R>(records: &mut [R]) {
    if records.len() > 1 {
        records.reverse();
    }
}
