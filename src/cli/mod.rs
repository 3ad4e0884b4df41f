//! CLI module
//!
//! Command-line interface for the pager.
//!
//! # Commands
//!
//! - `plan` - Build query parameters for a paging option
//! - `interpret` - Turn executor output into a result descriptor
//! - `defaults` - Show the default paging option

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{format_plan, format_result, Runner};
