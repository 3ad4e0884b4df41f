//! Result module
//!
//! Interprets what a query executor returned for an `OptionCollection`.
//!
//! # Overview
//!
//! Given the total row count and the fetched rows, the interpreter computes
//! the last page and the visible range, restores user-facing order after a
//! backward cursor jump, and reads the cursor token the next request is
//! anchored on.

mod extract;
mod interpreter;
mod types;

pub use extract::{cursor_token, extract_cursor_value};
pub use interpreter::{reverse_records, DefaultInterpreter, ResultInterpreter};
pub use types::{
    last_page, records_from_json, PagingResult, PagingResultCollection, SliceInfo,
};

#[cfg(test)]
mod tests;
