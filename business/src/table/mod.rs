//! Schema-driven data table engine.
//!
//! Given a row slice, a [`TableSchema`] and a [`TableViewState`], the engine
//! derives the rows to display: global search, then per-column filters, then
//! the active sort, then the current page. It never mutates or fetches rows.
//!
//! ```text
//! rows ──search──▶ ──column filters──▶ ──sort──▶ ──page slice──▶ TableView
//! ```

pub mod column;
pub mod filter;
pub mod humanize;
pub mod paginate;
pub mod sort;
pub mod state;
pub mod value;

use std::num::NonZeroUsize;

use ustr::Ustr;

use crate::error::TableError;

pub use column::{CellDisplay, CellTone, ColumnDef, RowId, TableRow};
pub use humanize::{CellFormat, humanize};
pub use state::{ActiveSort, SortDirection, SortOrder, TableAction, TableViewState};
pub use value::{CellValue, compare_values};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// Which row/table actions the caller handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableActions {
    pub edit: bool,
    pub delete: bool,
    pub add: bool,
}

impl TableActions {
    pub const fn all() -> Self {
        Self {
            edit: true,
            delete: true,
            add: true,
        }
    }

    /// Whether a trailing per-row actions column is needed.
    pub fn has_row_actions(&self) -> bool {
        self.edit || self.delete
    }
}

/// Per-instance table options.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct TableConfig {
    #[builder(default = DEFAULT_PAGE_SIZE)]
    pub page_size: NonZeroUsize,
    #[builder(default = true)]
    pub enable_search: bool,
    #[builder(default = true)]
    pub enable_column_toggle: bool,
    /// Show filter inputs for hidden columns too.
    #[builder(default)]
    pub filter_hidden_columns: bool,
    #[builder(into, default = "List".to_owned())]
    pub title: String,
    #[builder(into, default = "Add".to_owned())]
    pub add_label: String,
    #[builder(default)]
    pub actions: TableActions,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Ordered column definitions for rows of type `T`.
///
/// Keys are unique and fixed for the lifetime of the schema.
#[derive(Debug)]
pub struct TableSchema<T> {
    columns: Vec<ColumnDef<T>>,
}

impl<T> Clone for TableSchema<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<T> TableSchema<T> {
    pub fn new(columns: Vec<ColumnDef<T>>) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::EmptySchema);
        }
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|other| other.key() == col.key()) {
                return Err(TableError::DuplicateColumn(col.key().to_string()));
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[ColumnDef<T>] {
        &self.columns
    }

    pub fn column(&self, key: Ustr) -> Option<&ColumnDef<T>> {
        self.columns.iter().find(|col| col.key() == key)
    }

    /// Visible columns, always in definition order.
    pub fn visible_columns(&self, state: &TableViewState) -> Vec<&ColumnDef<T>> {
        self.columns
            .iter()
            .filter(|col| state.is_visible(col.key()))
            .collect()
    }

    /// Columns that get a filter input.
    pub fn filter_columns(&self, state: &TableViewState, config: &TableConfig) -> Vec<&ColumnDef<T>> {
        self.columns
            .iter()
            .filter(|col| col.is_filterable())
            .filter(|col| config.filter_hidden_columns || state.is_visible(col.key()))
            .collect()
    }

    /// Filtered and sorted rows, before pagination.
    pub fn process<'r>(
        &self,
        rows: &'r [T],
        state: &TableViewState,
        enable_search: bool,
    ) -> Vec<&'r T> {
        let mut processed = filter::apply_filters(rows, self, state, enable_search);
        sort::sort_rows(&mut processed, self, state.sort());
        processed
    }

    /// Derives everything needed to render the current page.
    pub fn derive<'r>(
        &self,
        rows: &'r [T],
        state: &TableViewState,
        config: &TableConfig,
    ) -> TableView<'r, T> {
        let processed = self.process(rows, state, config.enable_search);
        let total_pages = paginate::total_pages(processed.len(), config.page_size);
        let page = state.page().max(1);
        let page_rows = paginate::page_slice(&processed, page, config.page_size).to_vec();

        let search_active = config.enable_search && !state.search().is_empty();

        TableView {
            rows: page_rows,
            filtered_count: processed.len(),
            total_count: rows.len(),
            page,
            total_pages,
            active_filter_count: state.active_column_filters().count() + usize::from(search_active),
        }
    }
}

/// Result of one derivation: the current page plus counts for the footer.
#[derive(Debug)]
pub struct TableView<'r, T> {
    pub rows: Vec<&'r T>,
    pub filtered_count: usize,
    pub total_count: usize,
    pub page: usize,
    pub total_pages: usize,
    pub active_filter_count: usize,
}

impl<T> TableView<'_, T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_filtered(&self) -> bool {
        self.active_filter_count > 0
    }

    /// Message shown in place of rows when the page is empty.
    pub fn empty_message(&self) -> &'static str {
        if self.is_filtered() {
            "No results match the active filters."
        } else {
            "No data found."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Item {
        id: RowId,
        name: &'static str,
        stock: Option<i64>,
    }

    impl TableRow for Item {
        fn row_id(&self) -> RowId {
            self.id
        }
    }

    fn schema() -> TableSchema<Item> {
        TableSchema::new(vec![
            ColumnDef::new("id", "ID", |i: &Item| i.id.into()),
            ColumnDef::new("name", "Name", |i: &Item| i.name.into()),
            ColumnDef::new("stock", "Stock", |i: &Item| i.stock.into()).format(CellFormat::Count),
        ])
        .expect("valid schema")
    }

    #[test]
    fn test_duplicate_keys_are_rejected() {
        let result = TableSchema::<Item>::new(vec![
            ColumnDef::new("id", "ID", |i: &Item| i.id.into()),
            ColumnDef::new("id", "Again", |i: &Item| i.id.into()),
        ]);
        assert!(matches!(result, Err(TableError::DuplicateColumn(key)) if key == "id"));
    }

    #[test]
    fn test_empty_schema_is_rejected() {
        assert!(matches!(
            TableSchema::<Item>::new(Vec::new()),
            Err(TableError::EmptySchema)
        ));
    }

    #[test]
    fn test_config_builder_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.page_size.get(), 10);
        assert!(config.enable_search);
        assert!(config.enable_column_toggle);
        assert!(!config.filter_hidden_columns);
        assert_eq!(config.title, "List");
        assert_eq!(config.add_label, "Add");
        assert!(!config.actions.has_row_actions());
    }

    #[test]
    fn test_derive_reports_counts() {
        let rows: Vec<Item> = (1..=7)
            .map(|id| Item {
                id,
                name: if id % 2 == 0 { "even" } else { "odd" },
                stock: Some(id * 10),
            })
            .collect();
        let config = TableConfig::builder()
            .page_size(NonZeroUsize::new(3).expect("non-zero"))
            .build();
        let state = TableViewState::new().reduce(TableAction::SetSearch("odd".into()));

        let view = schema().derive(&rows, &state, &config);
        assert_eq!(view.total_count, 7);
        assert_eq!(view.filtered_count, 4);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.rows.len(), 3);
        assert!(view.has_next());
        assert!(!view.has_previous());
        assert_eq!(view.active_filter_count, 1);
        assert_eq!(view.empty_message(), "No results match the active filters.");
    }

    #[test]
    fn test_disabled_search_is_ignored() {
        let rows = vec![
            Item {
                id: 1,
                name: "alpha",
                stock: None,
            },
            Item {
                id: 2,
                name: "beta",
                stock: None,
            },
        ];
        let config = TableConfig::builder().enable_search(false).build();
        let state = TableViewState::new().reduce(TableAction::SetSearch("alpha".into()));

        let view = schema().derive(&rows, &state, &config);
        assert_eq!(view.filtered_count, 2);
        assert_eq!(view.active_filter_count, 0);
        assert_eq!(view.empty_message(), "No data found.");
    }

    #[test]
    fn test_hidden_columns_lose_filter_inputs_unless_configured() {
        let state = TableViewState::new().reduce(TableAction::ToggleColumn(Ustr::from("name")));
        let schema = schema();

        let keys = |cols: Vec<&ColumnDef<Item>>| cols.iter().map(|c| c.key().to_string()).collect::<Vec<_>>();

        assert_eq!(keys(schema.filter_columns(&state, &TableConfig::default())), ["id", "stock"]);
        let config = TableConfig::builder().filter_hidden_columns(true).build();
        assert_eq!(keys(schema.filter_columns(&state, &config)), ["id", "name", "stock"]);
    }
}
