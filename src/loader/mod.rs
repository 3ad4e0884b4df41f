//! Loader module
//!
//! Read paging options and executor output from files.
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_option` - paging option from a YAML or JSON file
//! - `load_results` - executor output (`total_records` + `records`) from JSON
//!
//! Options are normalized on load, so a loaded option is always valid.

mod parser;

pub use parser::{load_option, load_option_from_str, load_results, load_results_from_str};
