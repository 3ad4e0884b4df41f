//! Query plan types
//!
//! The parameters a query executor applies for one page.

use crate::option::PagingOption;
use crate::types::{PagingOrder, PagingWhere};
use serde::{Deserialize, Serialize};

/// Query parameters derived from a paging option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionCollection {
    /// The normalized option this plan was built from
    pub option: PagingOption,

    /// Maximum rows to fetch
    pub limit: i64,

    /// Rows to skip
    pub offset: i64,

    /// Predicates, conjoined with any the caller adds
    #[serde(rename = "where")]
    pub predicates: Vec<PagingWhere>,

    /// Sort terms
    pub order: Vec<PagingOrder>,

    /// The query runs opposite to the user-facing cursor direction; fetched
    /// rows must be reversed before use
    pub is_reverse: bool,
}

impl OptionCollection {
    /// Create an empty plan for an option: `limit = page_size`, nothing else
    pub fn new(option: PagingOption) -> Self {
        Self {
            limit: option.page_size,
            offset: 0,
            predicates: Vec::new(),
            order: Vec::new(),
            is_reverse: false,
            option,
        }
    }

    /// Render predicates as `a > ? AND b < ?`, `None` if there are none
    pub fn where_clause(&self) -> Option<String> {
        if self.predicates.is_empty() {
            return None;
        }
        Some(
            self.predicates
                .iter()
                .map(PagingWhere::clause)
                .collect::<Vec<_>>()
                .join(" AND "),
        )
    }

    /// Values bound to the predicate placeholders, in order
    pub fn bind_values(&self) -> Vec<f64> {
        self.predicates.iter().map(|p| p.data).collect()
    }

    /// Render sort terms as `a DESC, b ASC`, `None` if there are none
    pub fn order_clause(&self) -> Option<String> {
        if self.order.is_empty() {
            return None;
        }
        Some(
            self.order
                .iter()
                .map(PagingOrder::clause)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

/// Where the requested page lies relative to the anchored one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionClass {
    /// No prior page (`current_page_number == 0`)
    FirstPage,
    /// The requested page precedes the anchored one
    PrecedingPage,
    /// The requested page follows the anchored one, or is the same page
    NextPage,
}

impl PositionClass {
    /// Classify a normalized option
    pub fn classify(option: &PagingOption) -> Self {
        if option.current_page_number == 0 {
            Self::FirstPage
        } else if option.page_jump() < 0 {
            Self::PrecedingPage
        } else {
            Self::NextPage
        }
    }
}
