//! Page number mode
//!
//! With 200 rows and 10 rows per page, jumping to page 10 becomes
//! `ORDER BY ... LIMIT 10 OFFSET 90` regardless of the page it came from.

use super::types::OptionCollection;
use crate::option::{normalize_column, PagingOption};
use crate::types::PagingOrder;
use tracing::debug;

/// Build the plan for a normalized page number mode option
pub fn build_page_number(option: PagingOption) -> OptionCollection {
    let offset = option
        .page_size
        .saturating_mul(option.goto_page_number.saturating_sub(1))
        .max(0);
    let order = page_number_order(&option.order_by);

    let mut collection = OptionCollection::new(option);
    collection.offset = offset;
    collection.order = order;

    debug!(
        limit = collection.limit,
        offset = collection.offset,
        "Built page number plan"
    );
    collection
}

/// Normalize caller-supplied sort terms
pub fn page_number_order(order_by: &[PagingOrder]) -> Vec<PagingOrder> {
    order_by
        .iter()
        .map(|order| PagingOrder::new(normalize_column(&order.column), order.direction))
        .collect()
}
