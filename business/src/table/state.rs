//! Table view state and the reducer that evolves it.
//!
//! The state is a plain value: every user action produces a new state via
//! [`TableViewState::reduce`] instead of mutating shared fields in place.

use std::collections::{BTreeMap, BTreeSet};

use ustr::Ustr;

/// Order of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Externally visible sort direction, including "no sort".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

/// The single column currently sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSort {
    pub column: Ustr,
    pub order: SortOrder,
}

/// A user action against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    SetSearch(String),
    ClearSearch,
    SetColumnFilter { column: Ustr, value: String },
    ClearColumnFilter(Ustr),
    /// Clears every column filter and the search term.
    ClearFilters,
    /// Cycles none -> ascending -> descending -> none on the same column.
    ToggleSort(Ustr),
    ToggleColumn(Ustr),
    SetPage(usize),
    NextPage { total_pages: usize },
    PreviousPage,
}

/// Ephemeral display configuration of one table instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewState {
    search: String,
    column_filters: BTreeMap<Ustr, String>,
    sort: Option<ActiveSort>,
    hidden_columns: BTreeSet<Ustr>,
    page: usize,
}

impl Default for TableViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            column_filters: BTreeMap::new(),
            sort: None,
            hidden_columns: BTreeSet::new(),
            page: 1,
        }
    }
}

impl TableViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn column_filters(&self) -> &BTreeMap<Ustr, String> {
        &self.column_filters
    }

    /// Filter string for a column, empty when none is set.
    pub fn column_filter(&self, column: Ustr) -> &str {
        self.column_filters
            .get(&column)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Non-empty column filters only.
    pub fn active_column_filters(&self) -> impl Iterator<Item = (Ustr, &str)> + '_ {
        self.column_filters
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (*key, value.as_str()))
    }

    pub fn sort(&self) -> Option<ActiveSort> {
        self.sort
    }

    pub fn sort_column(&self) -> Option<Ustr> {
        self.sort.map(|s| s.column)
    }

    pub fn sort_direction(&self) -> SortDirection {
        match self.sort.map(|s| s.order) {
            None => SortDirection::None,
            Some(SortOrder::Ascending) => SortDirection::Ascending,
            Some(SortOrder::Descending) => SortDirection::Descending,
        }
    }

    /// Sort direction as seen from one column's header.
    pub fn sort_direction_of(&self, column: Ustr) -> SortDirection {
        if self.sort_column() == Some(column) {
            self.sort_direction()
        } else {
            SortDirection::None
        }
    }

    pub fn is_visible(&self, column: Ustr) -> bool {
        !self.hidden_columns.contains(&column)
    }

    pub fn hidden_columns(&self) -> &BTreeSet<Ustr> {
        &self.hidden_columns
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of active constraints: non-empty column filters plus one for a
    /// non-empty search term.
    pub fn active_filter_count(&self) -> usize {
        self.active_column_filters().count() + usize::from(!self.search.is_empty())
    }

    pub fn is_filtered(&self) -> bool {
        self.active_filter_count() > 0
    }

    /// Applies an action and returns the resulting state.
    #[must_use]
    pub fn reduce(mut self, action: TableAction) -> Self {
        log::debug!("table action: {action:?}");

        match action {
            TableAction::SetSearch(term) => {
                self.search = term;
                self.page = 1;
            }
            TableAction::ClearSearch => {
                self.search.clear();
                self.page = 1;
            }
            TableAction::SetColumnFilter { column, value } => {
                if value.is_empty() {
                    self.column_filters.remove(&column);
                } else {
                    self.column_filters.insert(column, value);
                }
                self.page = 1;
            }
            TableAction::ClearColumnFilter(column) => {
                self.column_filters.remove(&column);
                self.page = 1;
            }
            TableAction::ClearFilters => {
                self.column_filters.clear();
                self.search.clear();
                self.page = 1;
            }
            TableAction::ToggleSort(column) => {
                self.sort = next_sort(self.sort, column);
                self.page = 1;
            }
            TableAction::ToggleColumn(column) => {
                if !self.hidden_columns.remove(&column) {
                    self.hidden_columns.insert(column);
                }
            }
            TableAction::SetPage(page) => {
                self.page = page.max(1);
            }
            TableAction::NextPage { total_pages } => {
                self.page = self.page.saturating_add(1).min(total_pages.max(1));
            }
            TableAction::PreviousPage => {
                self.page = self.page.saturating_sub(1).max(1);
            }
        }

        self
    }
}

fn next_sort(current: Option<ActiveSort>, column: Ustr) -> Option<ActiveSort> {
    match current {
        Some(ActiveSort {
            column: active,
            order,
        }) if active == column => match order {
            SortOrder::Ascending => Some(ActiveSort {
                column,
                order: SortOrder::Descending,
            }),
            SortOrder::Descending => None,
        },
        _ => Some(ActiveSort {
            column,
            order: SortOrder::Ascending,
        }),
    }
}
