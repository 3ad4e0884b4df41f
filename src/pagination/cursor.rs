//! Cursor (keyset) mode
//!
//! Translates "jump from the anchored page to the requested page" into a
//! bounded scan relative to the cursor value.
//!
//! Take a table of 200 rows with `auto_id` 1..=200 and 10 rows per page.
//!
//! Ascending, anchored on page 10 (cursor = 100):
//!
//! | request        | query                                                    |
//! |----------------|----------------------------------------------------------|
//! | first → 10     | `ORDER BY auto_id ASC LIMIT 10 OFFSET 90`                |
//! | 10 → 11        | `WHERE auto_id > 100 ORDER BY auto_id ASC OFFSET 0`      |
//! | 10 → 12        | `WHERE auto_id > 100 ORDER BY auto_id ASC OFFSET 10`     |
//! | 10 → 9         | `WHERE auto_id <= 100 ORDER BY auto_id DESC OFFSET 10`   |
//! | 10 → 8         | `WHERE auto_id <= 100 ORDER BY auto_id DESC OFFSET 20`   |
//!
//! Descending, anchored on page 10 (cursor = 101):
//!
//! | request        | query                                                    |
//! |----------------|----------------------------------------------------------|
//! | first → 10     | `ORDER BY auto_id DESC LIMIT 10 OFFSET 90`               |
//! | 10 → 11        | `WHERE auto_id < 101 ORDER BY auto_id DESC OFFSET 0`     |
//! | 10 → 9         | `WHERE auto_id >= 101 ORDER BY auto_id ASC OFFSET 10`    |
//!
//! Backward jumps run in the flipped order so the rows nearest the anchor come
//! first; the fetched page is then reversed by the result interpreter.

use super::types::{OptionCollection, PositionClass};
use crate::option::{normalize_column, PagingOption};
use crate::types::{Direction, PagingOrder, PagingWhere, Symbol};
use tracing::debug;

/// Strategy turning a normalized cursor mode option into a query plan
pub trait CursorBuilder: Send + Sync {
    /// Build the plan. Must be total over normalized options.
    fn build(&self, option: PagingOption) -> OptionCollection;
}

/// Default cursor builder
///
/// Backward jumps skip `-jump * page_size` rows from the anchor in flipped
/// order and mark the plan as reversed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundedScanBuilder;

impl CursorBuilder for BoundedScanBuilder {
    fn build(&self, option: PagingOption) -> OptionCollection {
        build_cursor_plan(option, PrecedingOffset::FromAnchor)
    }
}

/// Alternate cursor builder
///
/// Backward jumps keep the stated order and skip `(goto - 1) * page_size`
/// rows counted from the start of the bounded range, so no reversal is
/// needed. Only equivalent to [`BoundedScanBuilder`] when every row up to
/// the anchor is still present.
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsoluteOffsetBuilder;

impl CursorBuilder for AbsoluteOffsetBuilder {
    fn build(&self, option: PagingOption) -> OptionCollection {
        build_cursor_plan(option, PrecedingOffset::FromStart)
    }
}

#[derive(Debug, Clone, Copy)]
enum PrecedingOffset {
    FromAnchor,
    FromStart,
}

fn build_cursor_plan(option: PagingOption, preceding: PrecedingOffset) -> OptionCollection {
    let page_size = option.page_size;
    let goto_page = option.goto_page_number;
    let jump = option.page_jump();
    let direction = option.cursor_direction;
    let anchor = option.cursor_value;
    let column = normalize_column(&option.cursor_column);
    let position = PositionClass::classify(&option);

    let mut collection = OptionCollection::new(option);

    match position {
        PositionClass::FirstPage => {
            collection.offset = page_offset(goto_page.saturating_sub(1), page_size);
            collection.order.push(PagingOrder::new(column, direction));
        }
        PositionClass::PrecedingPage => {
            collection
                .predicates
                .push(PagingWhere::new(column.clone(), inclusive_before(direction), anchor));

            match preceding {
                PrecedingOffset::FromAnchor => {
                    collection.order.push(PagingOrder::new(column, direction.flip()));
                    collection.offset = page_offset(jump.saturating_neg(), page_size);
                    collection.is_reverse = true;
                }
                PrecedingOffset::FromStart => {
                    collection.order.push(PagingOrder::new(column, direction));
                    collection.offset = page_offset(goto_page.saturating_sub(1), page_size);
                }
            }
        }
        PositionClass::NextPage => {
            collection
                .predicates
                .push(PagingWhere::new(column.clone(), exclusive_after(direction), anchor));
            collection.order.push(PagingOrder::new(column, direction));
            collection.offset = page_offset(jump.saturating_sub(1), page_size);
        }
    }

    debug!(
        ?position,
        %direction,
        jump,
        offset = collection.offset,
        reverse = collection.is_reverse,
        "Built cursor plan"
    );
    collection
}

/// `pages * page_size`, never negative
fn page_offset(pages: i64, page_size: i64) -> i64 {
    pages.saturating_mul(page_size).max(0)
}

/// Rows strictly past the anchor in the user-facing direction
fn exclusive_after(direction: Direction) -> Symbol {
    match direction {
        Direction::Asc => Symbol::Gt,
        Direction::Desc => Symbol::Lt,
    }
}

/// The anchor row and everything before it in the user-facing direction
fn inclusive_before(direction: Direction) -> Symbol {
    match direction {
        Direction::Asc => Symbol::Le,
        Direction::Desc => Symbol::Ge,
    }
}
