//! Search and per-column filter predicates.
//!
//! Both stages are case-insensitive substring matches on the raw value's
//! natural string form, and combine conjunctively.

use super::{TableSchema, TableViewState};

/// Global search: true if any searchable column contains `term`.
///
/// An empty term matches every row.
pub fn matches_search<T>(row: &T, schema: &TableSchema<T>, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    schema
        .columns()
        .iter()
        .filter(|col| col.is_searchable())
        .any(|col| col.value(row).search_text().contains(&needle))
}

/// Column filters: true if every non-empty filter matches its column.
///
/// Filters naming a column that is not part of the schema impose no constraint.
pub fn matches_column_filters<T>(row: &T, schema: &TableSchema<T>, state: &TableViewState) -> bool {
    state.active_column_filters().all(|(key, filter)| {
        let Some(col) = schema.column(key) else {
            return true;
        };
        col.value(row)
            .search_text()
            .contains(&filter.to_lowercase())
    })
}

/// Applies search (when enabled) then column filters, keeping input order.
pub fn apply_filters<'a, T>(
    rows: &'a [T],
    schema: &TableSchema<T>,
    state: &TableViewState,
    enable_search: bool,
) -> Vec<&'a T> {
    let term = if enable_search { state.search() } else { "" };

    rows.iter()
        .filter(|row| matches_search(*row, schema, term))
        .filter(|row| matches_column_filters(*row, schema, state))
        .collect()
}
