//! Result descriptor types

use crate::access::json_kind;
use crate::error::{Error, Result};
use crate::option::PagingOption;
use crate::types::{Direction, PagingMode, PagingOrder};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a query executor returned for one plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingResultCollection<R> {
    /// Total matching rows, ignoring limit and offset
    pub total_records: i64,
    /// Fetched rows, in the order the query returned them
    pub records: Vec<R>,
}

impl<R> PagingResultCollection<R> {
    /// Create a result collection
    pub fn new(total_records: i64, records: Vec<R>) -> Self {
        Self {
            total_records,
            records,
        }
    }
}

impl PagingResultCollection<Value> {
    /// Parse untyped executor output.
    ///
    /// Accepts `{"total_records": n, "records": [...]}` or a bare array (the
    /// total is then the array length).
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Array(records) => {
                let total = records.len() as i64;
                Ok(Self::new(total, records))
            }
            Value::Object(mut map) => {
                let total_records = match map.remove("total_records") {
                    Some(Value::Number(n)) => n
                        .as_i64()
                        .ok_or_else(|| Error::config("total_records must be an integer"))?,
                    Some(other) => {
                        return Err(Error::config(format!(
                            "total_records must be an integer, found {}",
                            json_kind(&other)
                        )))
                    }
                    None => return Err(Error::config("Missing total_records")),
                };
                let records = records_from_json(map.remove("records").unwrap_or(Value::Null))?;
                Ok(Self::new(total_records, records))
            }
            other => Err(Error::not_a_sequence(json_kind(&other))),
        }
    }
}

/// Unwrap a JSON array of records
pub fn records_from_json(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(records) => Ok(records),
        other => Err(Error::not_a_sequence(json_kind(&other))),
    }
}

/// Length of the fetched slice and the cursor token read off its last row
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliceInfo {
    /// Number of fetched records
    pub slice_len: usize,
    /// Token read off the last record in user-facing order (0 = none)
    pub cursor_value: f64,
}

/// Result descriptor returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingResult {
    /// Mode the page was fetched with
    pub paging_mode: PagingMode,

    /// Total matching rows
    pub total_size: i64,

    /// Rows per page
    pub page_size: i64,

    /// Page that was fetched
    pub current_page: i64,

    /// 1-based index of the first visible row (0 when nothing is shown)
    pub show_from: i64,

    /// 1-based index of the last visible row (0 when nothing is shown)
    pub show_to: i64,

    /// Number of the last page
    pub last_page: i64,

    /// Echo of the option's sort terms
    pub order_by: Vec<PagingOrder>,

    /// Echo of the cursor column
    pub cursor_column: String,

    /// Echo of the cursor direction
    pub cursor_direction: Direction,

    /// Cursor token for the next request (0 = none)
    pub cursor_value: f64,
}

impl PagingResult {
    /// Descriptor with echoed option fields and every range field zeroed
    pub fn from_option(option: &PagingOption, total_size: i64) -> Self {
        Self {
            paging_mode: option.paging_mode,
            total_size,
            page_size: option.page_size,
            current_page: option.goto_page_number,
            show_from: 0,
            show_to: 0,
            last_page: 0,
            order_by: option.order_by.clone(),
            cursor_column: option.cursor_column.clone(),
            cursor_direction: option.cursor_direction,
            cursor_value: 0.0,
        }
    }

    /// Set the visible range for `len` fetched rows
    pub fn set_range(&mut self, len: usize) {
        if len == 0 {
            self.show_from = 0;
            self.show_to = 0;
            return;
        }
        self.show_from = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .saturating_add(1);
        self.show_to = self.show_from.saturating_add(len as i64 - 1);
    }

    /// Check if a page follows this one
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    /// Check if a page precedes this one
    pub fn has_previous(&self) -> bool {
        self.current_page > 1 && self.last_page > 0
    }

    /// Option requesting `goto` from this page, anchored on this page's cursor
    pub fn goto_option(&self, goto: i64) -> PagingOption {
        PagingOption {
            paging_mode: self.paging_mode,
            current_page_number: self.current_page,
            goto_page_number: goto,
            page_size: self.page_size,
            order_by: self.order_by.clone(),
            cursor_column: self.cursor_column.clone(),
            cursor_direction: self.cursor_direction,
            cursor_value: self.cursor_value,
        }
    }

    /// Option requesting the following page
    pub fn next_option(&self) -> PagingOption {
        self.goto_option(self.current_page.saturating_add(1))
    }
}

/// `ceil(total / page_size)`, 0 when either is not positive
pub fn last_page(total: i64, page_size: i64) -> i64 {
    if total <= 0 || page_size <= 0 {
        return 0;
    }
    if total % page_size == 0 {
        total / page_size
    } else {
        total / page_size + 1
    }
}
