//! Per-instance state of an entity table.

use stockroom_business::table::{RowId, TableAction, TableViewState};

/// Event raised by the table for its owner to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEvent {
    Add,
    Edit(RowId),
    Delete(RowId),
}

/// View state plus which toolbar panels are expanded.
///
/// The view state only changes through [`EntityTableState::dispatch`].
#[derive(Debug, Clone, Default)]
pub struct EntityTableState {
    view: TableViewState,
    pub(crate) filters_open: bool,
    pub(crate) columns_open: bool,
}

impl EntityTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &TableViewState {
        &self.view
    }

    pub fn dispatch(&mut self, action: TableAction) {
        self.view = std::mem::take(&mut self.view).reduce(action);
    }

    pub fn filters_open(&self) -> bool {
        self.filters_open
    }

    pub fn columns_open(&self) -> bool {
        self.columns_open
    }

    pub fn toggle_filters(&mut self) {
        self.filters_open = !self.filters_open;
    }

    pub fn toggle_columns(&mut self) {
        self.columns_open = !self.columns_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ustr::Ustr;

    #[test]
    fn test_dispatch_runs_reducer() {
        let mut state = EntityTableState::new();
        state.dispatch(TableAction::SetPage(3));
        state.dispatch(TableAction::SetColumnFilter {
            column: Ustr::from("code"),
            value: "OF".to_owned(),
        });

        assert_eq!(state.view().page(), 1);
        assert_eq!(state.view().column_filter(Ustr::from("code")), "OF");
    }

    #[test]
    fn test_panels_toggle_independently() {
        let mut state = EntityTableState::new();
        state.toggle_filters();
        assert!(state.filters_open());
        assert!(!state.columns_open());
    }
}
