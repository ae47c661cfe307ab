//! Column definitions: how a table reads, displays, sorts and filters one field.

use std::fmt;
use std::sync::Arc;

use ustr::Ustr;

use super::humanize::{CellFormat, humanize};
use super::CellValue;

/// Row identifier used for keys and edit/delete events.
pub type RowId = i64;

/// A record that can be displayed by the table engine.
///
/// The identifier is mandatory: callers must supply a unique key per row.
pub trait TableRow {
    fn row_id(&self) -> RowId;
}

/// Visual emphasis a custom renderer can attach to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellTone {
    #[default]
    Plain,
    Positive,
    Warning,
    Critical,
    Muted,
}

/// Display representation of a cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellDisplay {
    pub text: String,
    pub tone: CellTone,
}

impl CellDisplay {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: CellTone::Plain,
        }
    }

    pub fn toned(text: impl Into<String>, tone: CellTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
type Renderer<T> = Arc<dyn Fn(&CellValue, &T) -> CellDisplay + Send + Sync>;

/// Describes one displayable, sortable, filterable and searchable field of `T`.
pub struct ColumnDef<T> {
    key: Ustr,
    label: String,
    accessor: Accessor<T>,
    sortable: bool,
    filterable: bool,
    searchable: bool,
    format: CellFormat,
    render: Option<Renderer<T>>,
}

impl<T> ColumnDef<T> {
    /// Creates a column that is sortable, filterable and searchable, with
    /// plain formatting.
    ///
    /// The accessor should return one [`CellValue`] variant (or `Null`) for
    /// every row; mixed kinds sort by kind before value.
    pub fn new(
        key: &str,
        label: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: Ustr::from(key),
            label: label.into(),
            accessor: Arc::new(accessor),
            sortable: true,
            filterable: true,
            searchable: true,
            format: CellFormat::Plain,
            render: None,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    /// Overrides the default formatting with a pure render function.
    pub fn render(
        mut self,
        render: impl Fn(&CellValue, &T) -> CellDisplay + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn key(&self) -> Ustr {
        self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    pub fn cell_format(&self) -> CellFormat {
        self.format
    }

    /// Reads the raw value of this column from a row.
    #[inline]
    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    /// Display representation: the custom renderer if present, otherwise
    /// the humanized raw value.
    pub fn display(&self, row: &T) -> CellDisplay {
        let value = self.value(row);
        match &self.render {
            Some(render) => render(&value, row),
            None => CellDisplay::plain(humanize(&value, self.format)),
        }
    }
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label.clone(),
            accessor: Arc::clone(&self.accessor),
            sortable: self.sortable,
            filterable: self.filterable,
            searchable: self.searchable,
            format: self.format,
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("searchable", &self.searchable)
            .field("format", &self.format)
            .field("render", &self.render.is_some())
            .finish_non_exhaustive()
    }
}
