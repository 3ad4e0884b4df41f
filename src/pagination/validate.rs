//! Cursor column validation

use crate::access::FieldAccessor;
use crate::error::{Error, Result};
use crate::option::PagingOption;

/// Check that the cursor column exists on a sample record.
///
/// Without a sample the check is skipped and left to the caller.
pub fn validate_cursor_column<R: FieldAccessor + ?Sized>(
    option: &PagingOption,
    sample: Option<&R>,
) -> Result<()> {
    let Some(sample) = sample else {
        return Ok(());
    };

    let field = sample.field_name(&option.cursor_column);
    if sample.has_field(&field)? {
        Ok(())
    } else {
        Err(Error::column_not_found(&option.cursor_column, field))
    }
}
