#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::float_cmp)]

//! # Solidafy Pager
//!
//! Pagination parameter calculation for query executors.
//!
//! ## Features
//!
//! - **Page Number Paging**: `LIMIT`/`OFFSET` from a page number and size
//! - **Cursor Paging**: keyset predicates with multi-page jumps in either
//!   direction, built by a pluggable `CursorBuilder`
//! - **Result Interpretation**: visible range, last page, and the cursor
//!   token for the next request
//! - **Any Record Type**: JSON objects or structs via `FieldAccessor`
//!
//! ## Quick Start
//!
//! ```rust
//! use solidafy_pager::{
//!     get_option_collection, set_paging_result, Direction, PagingOption,
//!     PagingResultCollection,
//! };
//! use serde_json::json;
//!
//! // Jump from page 1 to page 3, newest first
//! let option = PagingOption::cursor("id", Direction::Desc, 2).jump(1, 3, 100.0);
//! let collection = get_option_collection(Some(option));
//! assert_eq!(collection.where_clause().as_deref(), Some("id < ?"));
//! assert_eq!(collection.offset, 2);
//!
//! // ... run the query, then interpret what came back
//! let mut result = PagingResultCollection::new(100, vec![json!({"id": 96}), json!({"id": 95})]);
//! let paging = set_paging_result(&collection, &mut result).unwrap();
//! assert_eq!(paging.show_from, 5);
//! assert_eq!(paging.cursor_value, 95.0);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   normalize   ┌──────────────────┐   run query   ┌──────────────┐
//! │ PagingOption │ ────────────► │ OptionCollection │ ────────────► │   executor   │
//! └──────────────┘  page number  │ limit / offset   │               └──────┬───────┘
//!                   or cursor    │ where / order    │                      │
//!                   builder      │ is_reverse       │    total + records   │
//!                                └────────┬─────────┘ ◄────────────────────┘
//!                                         │ interpreter
//!                                         ▼
//!                                ┌──────────────────┐
//!                                │   PagingResult   │
//!                                │ range / cursor   │
//!                                └──────────────────┘
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types: modes, directions, predicates, sort terms
pub mod types;

/// Paging options and their normalizer
pub mod option;

/// Reading named fields off records
pub mod access;

/// Query parameter builders
pub mod pagination;

/// Result interpretation
pub mod result;

/// Paging entry point
pub mod pager;

/// YAML/JSON loaders for options and executor output
pub mod loader;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use access::{FieldAccessor, FieldNaming, FieldValue};
pub use loader::{load_option, load_option_from_str};
pub use option::PagingOption;
pub use pager::{get_option_collection, set_paging_result, Pager};
pub use pagination::{AbsoluteOffsetBuilder, BoundedScanBuilder, CursorBuilder, OptionCollection};
pub use result::{DefaultInterpreter, PagingResult, PagingResultCollection, ResultInterpreter};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
