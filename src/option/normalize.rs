//! Option normalization
//!
//! Clamps and defaults raw paging options. Never fails.

use super::types::PagingOption;
use crate::types::{DEFAULT_CURSOR_COLUMN, DEFAULT_GOTO_PAGE, DEFAULT_PAGE_SIZE};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Allow-list for column names handed to a query executor
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());

/// Check that a column name only contains ASCII letters, digits and underscores
pub fn is_safe_identifier(column: &str) -> bool {
    IDENTIFIER_REGEX.is_match(column)
}

/// Trim a column name, substituting the default column when it is blank or
/// fails the identifier allow-list
pub fn normalize_column(column: &str) -> String {
    let trimmed = column.trim();

    if trimmed.is_empty() {
        return DEFAULT_CURSOR_COLUMN.to_string();
    }

    if !is_safe_identifier(trimmed) {
        warn!(
            column = trimmed,
            "Unsafe column name replaced with '{DEFAULT_CURSOR_COLUMN}'"
        );
        return DEFAULT_CURSOR_COLUMN.to_string();
    }

    trimmed.to_string()
}

/// Normalize an optional option; a missing option becomes the default one
pub fn normalize_option(option: Option<PagingOption>) -> PagingOption {
    match option {
        Some(option) => option.normalize(),
        None => {
            debug!("No paging option given, using defaults");
            PagingOption::default()
        }
    }
}

impl PagingOption {
    /// Return the normalized option
    pub fn normalize(mut self) -> Self {
        self.normalize_in_place();
        self
    }

    /// Normalize in place
    ///
    /// The sort direction is already normalized by its type; `order_by` terms
    /// are normalized by the page number builder that consumes them.
    pub fn normalize_in_place(&mut self) {
        if self.current_page_number < 0 {
            debug!(
                current_page = self.current_page_number,
                "Negative current page clamped to 0"
            );
            self.current_page_number = 0;
        }

        if self.goto_page_number < 1 {
            debug!(
                goto_page = self.goto_page_number,
                "Goto page clamped to {DEFAULT_GOTO_PAGE}"
            );
            self.goto_page_number = DEFAULT_GOTO_PAGE;
        }

        if self.page_size < 1 {
            debug!(
                page_size = self.page_size,
                "Page size replaced with default {DEFAULT_PAGE_SIZE}"
            );
            self.page_size = DEFAULT_PAGE_SIZE;
        }

        self.cursor_column = normalize_column(&self.cursor_column);
    }
}
