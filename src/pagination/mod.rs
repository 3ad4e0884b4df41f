//! Pagination module
//!
//! Supports: Page Number, Cursor (keyset)
//!
//! # Overview
//!
//! The pagination module turns a normalized `PagingOption` into the
//! parameters a query executor applies: limit, offset, predicates, sort
//! terms, and whether the fetched rows come back reversed.
//!
//! Cursor mode is pluggable through the `CursorBuilder` trait; the default
//! `BoundedScanBuilder` seeks relative to the cursor value in both
//! directions.

mod cursor;
mod number;
mod types;
mod validate;

pub use cursor::{AbsoluteOffsetBuilder, BoundedScanBuilder, CursorBuilder};
pub use number::{build_page_number, page_number_order};
pub use types::{OptionCollection, PositionClass};
pub use validate::validate_cursor_column;
