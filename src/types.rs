//! Common types used throughout Solidafy Pager
//!
//! This module contains the paging mode and sort direction enums, the
//! predicate and sort terms handed to a query executor, and the defaults
//! shared by the normalizer and the builders.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Defaults
// ============================================================================

/// Page size used when the requested one is below 1
pub const DEFAULT_PAGE_SIZE: i64 = 15;

/// Current page of a first request (no prior page)
pub const DEFAULT_CURRENT_PAGE: i64 = 0;

/// Page requested when none (or an invalid one) is given
pub const DEFAULT_GOTO_PAGE: i64 = 1;

/// Cursor column used when the configured one is blank or unsafe
pub const DEFAULT_CURSOR_COLUMN: &str = "id";

/// Cursor token meaning "no cursor yet"
pub const DEFAULT_CURSOR_VALUE: f64 = 0.0;

/// Bind-parameter marker placed in every predicate
pub const WHERE_PLACEHOLDER: &str = "?";

// ============================================================================
// Paging Mode
// ============================================================================

/// How pages are addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PagingMode {
    /// Absolute offset computed from the page index
    #[default]
    PageNumber,
    /// Keyset pagination anchored on the cursor column
    Cursor,
}

impl PagingMode {
    /// Map a numeric mode code (`1` page number, `2` cursor)
    pub fn from_code(code: i64) -> Self {
        match code {
            2 => Self::Cursor,
            _ => Self::PageNumber,
        }
    }

    /// Numeric mode code
    pub fn code(self) -> i64 {
        match self {
            Self::PageNumber => 1,
            Self::Cursor => 2,
        }
    }

    /// Parse a mode name, falling back to page number mode
    pub fn parse_lossy(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "cursor" | "keyset" | "2" => Self::Cursor,
            _ => Self::PageNumber,
        }
    }
}

impl<'de> Deserialize<'de> for PagingMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawMode {
            Code(i64),
            Name(String),
            Other(IgnoredAny),
        }

        Ok(match RawMode::deserialize(deserializer)? {
            RawMode::Code(code) => Self::from_code(code),
            RawMode::Name(name) => Self::parse_lossy(&name),
            RawMode::Other(_) => Self::PageNumber,
        })
    }
}

// ============================================================================
// Direction
// ============================================================================

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending
    Asc,
    /// Descending
    #[default]
    Desc,
}

impl Direction {
    /// Normalize a raw direction: only an exact `"asc"` (after trimming) is
    /// ascending, everything else is descending.
    pub fn normalize(raw: &str) -> Self {
        if raw.trim() == "asc" {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    /// The opposite direction
    pub fn flip(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawDirection {
            Name(String),
            Other(IgnoredAny),
        }

        Ok(match RawDirection::deserialize(deserializer)? {
            RawDirection::Name(name) => Self::normalize(&name),
            RawDirection::Other(_) => Self::Desc,
        })
    }
}

// ============================================================================
// Comparison Symbol
// ============================================================================

/// Comparison operator of a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    /// `>`
    #[serde(rename = ">")]
    Gt,
    /// `<`
    #[serde(rename = "<")]
    Lt,
    /// `>=`
    #[serde(rename = ">=")]
    Ge,
    /// `<=`
    #[serde(rename = "<=")]
    Le,
    /// `=`
    #[serde(rename = "=")]
    Eq,
}

impl Symbol {
    /// Operator text
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Eq => "=",
        }
    }

    /// Evaluate `left <op> right`
    pub fn matches(self, left: f64, right: f64) -> bool {
        match self {
            Self::Gt => left > right,
            Self::Lt => left < right,
            Self::Ge => left >= right,
            Self::Le => left <= right,
            Self::Eq => (left - right).abs() < f64::EPSILON,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Query Terms
// ============================================================================

/// One sort term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingOrder {
    /// Column to sort by
    #[serde(default)]
    pub column: String,
    /// Sort direction
    #[serde(default)]
    pub direction: Direction,
}

impl PagingOrder {
    /// Create a sort term
    pub fn new(column: impl Into<String>, direction: Direction) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Render as `column ASC|DESC`
    pub fn clause(&self) -> String {
        format!(
            "{} {}",
            self.column,
            self.direction.as_str().to_ascii_uppercase()
        )
    }
}

/// One predicate, applied as `column symbol placeholder` bound to `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagingWhere {
    /// Column compared against the bound value
    pub column: String,
    /// Comparison operator
    pub symbol: Symbol,
    /// Bind-parameter marker
    pub placeholder: String,
    /// Bound value
    pub data: f64,
}

impl PagingWhere {
    /// Create a predicate using the standard placeholder
    pub fn new(column: impl Into<String>, symbol: Symbol, data: f64) -> Self {
        Self {
            column: column.into(),
            symbol,
            placeholder: WHERE_PLACEHOLDER.to_string(),
            data,
        }
    }

    /// Render as `column symbol placeholder`
    pub fn clause(&self) -> String {
        format!("{} {} {}", self.column, self.symbol, self.placeholder)
    }

    /// Check a value of the column against this predicate
    pub fn accepts(&self, value: f64) -> bool {
        self.symbol.matches(value, self.data)
    }
}
