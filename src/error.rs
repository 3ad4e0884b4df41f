//! Error types for Solidafy Pager
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Option normalization never fails: bad configuration is absorbed by
//! defaults. The schema errors below indicate a mismatch between the caller's
//! records and the paging option, so they are never retried.

use crate::result::PagingResult;
use thiserror::Error;

/// The main error type for Solidafy Pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Paging option or executor output could not be used
    #[error("Invalid paging config: {message}")]
    InvalidConfig {
        /// What was wrong
        message: String,
    },

    /// YAML document failed to parse
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON document failed to parse
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Schema Errors
    // ============================================================================
    /// The cursor column does not exist on the sample record
    #[error("cursorColumn({column}) not exist in model (field '{field}')")]
    ColumnNotFound {
        /// Configured cursor column
        column: String,
        /// Field name the column mapped to
        field: String,
    },

    /// A record is not a single structured value
    #[error("Record is not a struct (found {found})")]
    NotAStruct {
        /// Type name of what was found instead
        found: String,
    },

    /// Executor records are not a sequence
    #[error("Records are not a sequence (found {found})")]
    NotASequence {
        /// Type name of what was found instead
        found: String,
    },

    // ============================================================================
    // Cursor Errors
    // ============================================================================
    /// The cursor field is missing or has no numeric reading
    #[error("Cursor column '{column}' is not numeric: {reason}")]
    NonNumericCursor {
        /// Configured cursor column
        column: String,
        /// Why no token could be read
        reason: String,
    },

    /// The cursor field failed numeric conversion
    #[error("Cursor column '{column}' conversion failed: {message}")]
    ConversionFailure {
        /// Configured cursor column
        column: String,
        /// Conversion error text
        message: String,
    },

    /// A failure after the page bounds were already computed. The descriptor
    /// holds everything populated before `source` occurred.
    #[error("Paging result incomplete: {source}")]
    Partial {
        /// Descriptor with the cursor value left at 0
        result: Box<PagingResult>,
        /// The failure
        source: Box<Error>,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Reading a file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A file does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was looked up
        path: String,
    },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Any other error, usually with context prepended
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a column-not-found error
    pub fn column_not_found(column: impl Into<String>, field: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
            field: field.into(),
        }
    }

    /// Create a not-a-struct error
    pub fn not_a_struct(found: impl Into<String>) -> Self {
        Self::NotAStruct {
            found: found.into(),
        }
    }

    /// Create a not-a-sequence error
    pub fn not_a_sequence(found: impl Into<String>) -> Self {
        Self::NotASequence {
            found: found.into(),
        }
    }

    /// Create a non-numeric cursor error
    pub fn non_numeric(column: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NonNumericCursor {
            column: column.into(),
            reason: reason.into(),
        }
    }

    /// Create a conversion error
    pub fn conversion(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConversionFailure {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Wrap an error together with the partially populated result
    pub fn partial(result: PagingResult, source: Error) -> Self {
        Self::Partial {
            result: Box::new(result),
            source: Box::new(source),
        }
    }

    /// The partially populated result, if this error carries one
    pub fn partial_result(&self) -> Option<&PagingResult> {
        match self {
            Error::Partial { result, .. } => Some(result),
            _ => None,
        }
    }

    /// The innermost error, looking through `Partial`
    pub fn root(&self) -> &Error {
        match self {
            Error::Partial { source, .. } => source.root(),
            other => other,
        }
    }

    /// Check if this error is a caller/schema mismatch
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(
            self.root(),
            Error::ColumnNotFound { .. }
                | Error::NotAStruct { .. }
                | Error::NotASequence { .. }
                | Error::NonNumericCursor { .. }
                | Error::ConversionFailure { .. }
        )
    }
}

/// Result type alias for Solidafy Pager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::PagingOption;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Invalid paging config: test message");

        let err = Error::column_not_found("user_id", "user_id");
        assert_eq!(
            err.to_string(),
            "cursorColumn(user_id) not exist in model (field 'user_id')"
        );

        let err = Error::non_numeric("id", "value of type bool is not numeric");
        assert_eq!(
            err.to_string(),
            "Cursor column 'id' is not numeric: value of type bool is not numeric"
        );
    }

    #[test]
    fn test_is_schema_mismatch() {
        assert!(Error::column_not_found("id", "id").is_schema_mismatch());
        assert!(Error::not_a_struct("array").is_schema_mismatch());
        assert!(Error::not_a_sequence("object").is_schema_mismatch());
        assert!(Error::non_numeric("id", "missing").is_schema_mismatch());
        assert!(Error::conversion("id", "bad").is_schema_mismatch());

        assert!(!Error::config("test").is_schema_mismatch());
        assert!(!Error::Other("x".to_string()).is_schema_mismatch());
    }

    #[test]
    fn test_partial_result() {
        let result = PagingResult::from_option(&PagingOption::default(), 42);
        let err = Error::partial(result.clone(), Error::non_numeric("id", "missing"));

        assert_eq!(err.partial_result(), Some(&result));
        assert!(matches!(err.root(), Error::NonNumericCursor { .. }));
        assert!(err.is_schema_mismatch());
        assert!(err.to_string().starts_with("Paging result incomplete:"));

        assert!(Error::config("x").partial_result().is_none());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Invalid paging config: inner"));
    }
}
