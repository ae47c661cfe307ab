//! Row ordering by the active sort column.

use std::cmp::Ordering;

use super::state::{ActiveSort, SortOrder};
use super::value::compare_values;
use super::TableSchema;

/// Sorts rows in place by the active sort, if any.
///
/// Stable: rows comparing equal keep their relative order. Descending is the
/// mirrored comparator, so nulls end up last.
pub fn sort_rows<T>(rows: &mut [&T], schema: &TableSchema<T>, sort: Option<ActiveSort>) {
    let Some(ActiveSort { column, order }) = sort else {
        return;
    };
    let Some(col) = schema.column(column) else {
        return;
    };

    rows.sort_by(|a, b| {
        let ord = compare_values(&col.value(*a), &col.value(*b));
        apply_order(ord, order)
    });
}

#[inline]
fn apply_order(ord: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => ord,
        SortOrder::Descending => ord.reverse(),
    }
}
