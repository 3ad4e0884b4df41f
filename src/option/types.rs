//! Paging option types

use crate::types::{
    Direction, PagingMode, PagingOrder, DEFAULT_CURRENT_PAGE, DEFAULT_CURSOR_COLUMN,
    DEFAULT_CURSOR_VALUE, DEFAULT_GOTO_PAGE, DEFAULT_PAGE_SIZE,
};
use serde::{Deserialize, Serialize};

/// The paging intent of one request
///
/// Every field has a default, so partial YAML/JSON documents deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingOption {
    /// Page number or cursor mode
    pub paging_mode: PagingMode,

    /// Page the cursor was captured on (0 = first request)
    pub current_page_number: i64,

    /// Page to fetch
    pub goto_page_number: i64,

    /// Records per page
    pub page_size: i64,

    /// Sort terms (page number mode only)
    pub order_by: Vec<PagingOrder>,

    /// Column the keyset is anchored on
    pub cursor_column: String,

    /// User-facing order of the cursor column
    pub cursor_direction: Direction,

    /// Last-seen cursor token (0 = none)
    pub cursor_value: f64,
}

impl Default for PagingOption {
    fn default() -> Self {
        Self {
            paging_mode: PagingMode::PageNumber,
            current_page_number: DEFAULT_CURRENT_PAGE,
            goto_page_number: DEFAULT_GOTO_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            order_by: Vec::new(),
            cursor_column: DEFAULT_CURSOR_COLUMN.to_string(),
            cursor_direction: Direction::Desc,
            cursor_value: DEFAULT_CURSOR_VALUE,
        }
    }
}

impl PagingOption {
    /// Create a page number mode option
    pub fn page_number(goto_page: i64, page_size: i64) -> Self {
        Self {
            goto_page_number: goto_page,
            page_size,
            ..Default::default()
        }
    }

    /// Create a cursor mode option for a first request
    pub fn cursor(column: impl Into<String>, direction: Direction, page_size: i64) -> Self {
        Self {
            paging_mode: PagingMode::Cursor,
            page_size,
            cursor_column: column.into(),
            cursor_direction: direction,
            ..Default::default()
        }
    }

    /// Jump from `current` to `goto`, anchored on `cursor_value`
    pub fn jump(mut self, current: i64, goto: i64, cursor_value: f64) -> Self {
        self.current_page_number = current;
        self.goto_page_number = goto;
        self.cursor_value = cursor_value;
        self
    }

    /// Set the page to fetch
    pub fn with_goto_page(mut self, goto: i64) -> Self {
        self.goto_page_number = goto;
        self
    }

    /// Append a sort term
    pub fn with_order(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order_by.push(PagingOrder::new(column, direction));
        self
    }

    /// Signed page distance from the anchored page to the requested one
    pub fn page_jump(&self) -> i64 {
        self.goto_page_number
            .saturating_sub(self.current_page_number)
    }

    /// Check if this option uses keyset pagination
    pub fn is_cursor_mode(&self) -> bool {
        self.paging_mode == PagingMode::Cursor
    }
}
