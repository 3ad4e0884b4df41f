//! Paging option module
//!
//! The caller's paging intent and its normalizer.
//!
//! # Overview
//!
//! A `PagingOption` describes which page to fetch and how pages are
//! addressed. Raw options coming from configuration or a request are
//! normalized before any query parameters are derived: invalid values are
//! replaced by defaults rather than rejected.

mod normalize;
mod types;

pub use normalize::{is_safe_identifier, normalize_column, normalize_option};
pub use types::PagingOption;
