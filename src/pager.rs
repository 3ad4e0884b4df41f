//! Pager - the two-step paging entry point
//!
//! 1. `option_collection` turns a paging option into query parameters
//! 2. the caller runs the query
//! 3. `paging_result` turns the executor's output into a `PagingResult`
//!
//! The cursor builder and the result interpreter are injected strategies, so
//! an alternate algorithm is a type parameter rather than a global override.

use crate::access::FieldAccessor;
use crate::error::{Error, Result};
use crate::option::{normalize_option, PagingOption};
use crate::pagination::{
    build_page_number, validate_cursor_column, BoundedScanBuilder, CursorBuilder,
    OptionCollection,
};
use crate::result::{
    last_page, DefaultInterpreter, PagingResult, PagingResultCollection, ResultInterpreter,
};
use crate::types::PagingMode;
use tracing::debug;

/// Paging entry point with injected strategies
#[derive(Debug, Clone, Default)]
pub struct Pager<B = BoundedScanBuilder, I = DefaultInterpreter> {
    builder: B,
    interpreter: I,
}

impl Pager {
    /// Create a pager with the default strategies
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: CursorBuilder, I: ResultInterpreter> Pager<B, I> {
    /// Create a pager with custom strategies
    pub fn with_strategies(builder: B, interpreter: I) -> Self {
        Self {
            builder,
            interpreter,
        }
    }

    /// The cursor builder
    pub fn builder(&self) -> &B {
        &self.builder
    }

    /// The result interpreter
    pub fn interpreter(&self) -> &I {
        &self.interpreter
    }

    /// Build query parameters without validating the cursor column
    ///
    /// A missing option is replaced by the default one.
    pub fn option_collection(&self, option: Option<PagingOption>) -> OptionCollection {
        let option = normalize_option(option);
        match option.paging_mode {
            PagingMode::Cursor => self.builder.build(option),
            PagingMode::PageNumber => build_page_number(option),
        }
    }

    /// Build query parameters, checking in cursor mode that the cursor column
    /// exists on `sample`
    pub fn option_collection_checked<R: FieldAccessor + ?Sized>(
        &self,
        option: Option<PagingOption>,
        sample: &R,
    ) -> Result<OptionCollection> {
        let option = normalize_option(option);
        match option.paging_mode {
            PagingMode::Cursor => {
                validate_cursor_column(&option, Some(sample))?;
                Ok(self.builder.build(option))
            }
            PagingMode::PageNumber => Ok(build_page_number(option)),
        }
    }

    /// Interpret the executor's output for `collection`
    ///
    /// Records are put in user-facing order in place. If reading the cursor
    /// token fails, the error is `Error::Partial` carrying the descriptor with
    /// everything but the cursor value filled in.
    pub fn paging_result<R: FieldAccessor>(
        &self,
        collection: &OptionCollection,
        result: &mut PagingResultCollection<R>,
    ) -> Result<PagingResult> {
        let option = &collection.option;
        let mut paging = PagingResult::from_option(option, result.total_records);

        if result.total_records <= 0 {
            return Ok(paging);
        }

        paging.last_page = last_page(result.total_records, option.page_size);

        if result.records.is_empty() {
            return Ok(paging);
        }

        match self
            .interpreter
            .calc_result_slice(collection, &mut result.records)
        {
            Ok(info) => {
                paging.set_range(info.slice_len);
                paging.cursor_value = info.cursor_value;
                debug!(
                    show_from = paging.show_from,
                    show_to = paging.show_to,
                    last_page = paging.last_page,
                    cursor = paging.cursor_value,
                    "Interpreted page"
                );
                Ok(paging)
            }
            Err(source) => {
                paging.set_range(result.records.len());
                Err(Error::partial(paging, source))
            }
        }
    }
}

/// Build query parameters with the default pager
pub fn get_option_collection(option: Option<PagingOption>) -> OptionCollection {
    Pager::new().option_collection(option)
}

/// Interpret executor output with the default pager
pub fn set_paging_result<R: FieldAccessor>(
    collection: &OptionCollection,
    result: &mut PagingResultCollection<R>,
) -> Result<PagingResult> {
    Pager::new().paging_result(collection, result)
}
