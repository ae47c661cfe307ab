//! Search box, filter and column panels, and active-filter chips.

use egui::{Button, RichText, TextEdit, Ui};
use stockroom_business::table::{TableAction, TableConfig, TableSchema};

use super::{EntityTableState, TableEvent};

/// Label of the filters toggle, with the active count when non-zero.
pub fn filters_label(active: usize) -> String {
    if active == 0 {
        "Filters".to_owned()
    } else {
        format!("Filters ({active})")
    }
}

/// Title row: search, panel toggles, clear and add.
pub(super) fn render_toolbar(
    ui: &mut Ui,
    state: &mut EntityTableState,
    config: &TableConfig,
    active_filters: usize,
    actions: &mut Vec<TableAction>,
) -> Option<TableEvent> {
    let mut event = None;

    ui.horizontal(|ui| {
        ui.heading(&config.title);
        ui.add_space(12.0);

        if config.enable_search {
            let mut search = state.view().search().to_owned();
            let response = ui.add(
                TextEdit::singleline(&mut search)
                    .hint_text("Search...")
                    .desired_width(180.0),
            );
            if response.changed() {
                actions.push(TableAction::SetSearch(search));
            }
        }

        if ui
            .add(Button::new(filters_label(active_filters)).selected(state.filters_open))
            .clicked()
        {
            state.toggle_filters();
        }

        if active_filters > 0 && ui.button("Clear").on_hover_text("Clear all filters").clicked() {
            actions.push(TableAction::ClearFilters);
        }

        if config.enable_column_toggle
            && ui
                .add(Button::new("Columns").selected(state.columns_open))
                .clicked()
        {
            state.toggle_columns();
        }

        if config.actions.add && ui.button(&config.add_label).clicked() {
            event = Some(TableEvent::Add);
        }
    });

    event
}

/// One text input per filterable column.
pub(super) fn render_filter_panel<T>(
    ui: &mut Ui,
    state: &EntityTableState,
    schema: &TableSchema<T>,
    config: &TableConfig,
    actions: &mut Vec<TableAction>,
) {
    ui.horizontal_wrapped(|ui| {
        for col in schema.filter_columns(state.view(), config) {
            ui.vertical(|ui| {
                ui.label(RichText::new(col.label()).small());
                let mut value = state.view().column_filter(col.key()).to_owned();
                let response = ui.add(
                    TextEdit::singleline(&mut value)
                        .hint_text(format!("Filter {}", col.label()))
                        .desired_width(120.0),
                );
                if response.changed() {
                    actions.push(TableAction::SetColumnFilter {
                        column: col.key(),
                        value,
                    });
                }
            });
        }
    });
}

/// One checkbox per column, in definition order.
pub(super) fn render_column_panel<T>(
    ui: &mut Ui,
    state: &EntityTableState,
    schema: &TableSchema<T>,
    actions: &mut Vec<TableAction>,
) {
    ui.horizontal_wrapped(|ui| {
        for col in schema.columns() {
            let mut visible = state.view().is_visible(col.key());
            if ui.checkbox(&mut visible, col.label()).changed() {
                actions.push(TableAction::ToggleColumn(col.key()));
            }
        }
    });
}

/// Removable chips for the search term and each active column filter.
pub(super) fn render_filter_chips<T>(
    ui: &mut Ui,
    state: &EntityTableState,
    schema: &TableSchema<T>,
    config: &TableConfig,
    actions: &mut Vec<TableAction>,
) {
    let view = state.view();
    let search = config.enable_search && !view.search().is_empty();
    if !search && view.active_column_filters().next().is_none() {
        return;
    }

    ui.horizontal_wrapped(|ui| {
        if search
            && ui
                .small_button(format!("Search: {} ✕", view.search()))
                .clicked()
        {
            actions.push(TableAction::ClearSearch);
        }
        for (key, value) in view.active_column_filters() {
            let label = schema.column(key).map_or(key.as_str(), |col| col.label());
            if ui.small_button(format!("{label}: {value} ✕")).clicked() {
                actions.push(TableAction::ClearColumnFilter(key));
            }
        }
    });
}
