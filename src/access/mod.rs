//! Field access module
//!
//! Reads a named field off a fetched record.
//!
//! # Overview
//!
//! Paging needs two things from a record: whether the cursor column exists
//! on it, and the column's value on the last visible record. Both go through
//! the `FieldAccessor` trait:
//!
//! - `serde_json::Value` objects are supported out of the box
//! - Rust structs implement it with a static match over field names, usually
//!   generated by the [`field_accessor!`](crate::field_accessor) macro
//!
//! The accessor also declares its naming convention, which maps a column name
//! (`user_id`) to the field name the record uses (`userId`, `UserId`, ...).

mod accessor;
mod types;

pub use accessor::{json_kind, FieldAccessor};
pub use types::{FieldNaming, FieldValue};
