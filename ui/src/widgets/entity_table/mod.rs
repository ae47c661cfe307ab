//! Generic, schema-driven table widget.
//!
//! Split into:
//! - `state`: per-instance state and the events the widget raises
//! - `toolbar`: search, filter and column panels, chips
//! - `header`: sortable header row
//! - `cells`: cell frames and tone colors
//! - `pagination`: result summary and page navigation
//!
//! Uses `egui::Grid` rather than `egui_extras::TableBuilder` so button
//! clicks inside rows reach the widget under `egui_kittest`.

mod cells;
pub mod header;
pub mod pagination;
mod state;
pub mod toolbar;

use egui::{Color32, Frame, Margin, ScrollArea, Stroke, Ui};
use stockroom_business::table::{TableAction, TableConfig, TableRow, TableSchema};

pub use cells::tone_color;
pub use state::{EntityTableState, TableEvent};

/// Border color for the table frame (subtle gray).
const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Renders `rows` through `schema` and returns the row/table event, if any.
///
/// View-state changes are collected while drawing and applied through the
/// reducer afterwards, so they show up on the next frame.
pub fn entity_table<T: TableRow>(
    ui: &mut Ui,
    state: &mut EntityTableState,
    schema: &TableSchema<T>,
    rows: &[T],
    config: &TableConfig,
) -> Option<TableEvent> {
    let mut actions: Vec<TableAction> = Vec::new();
    let mut event = None;

    let mut view = schema.derive(rows, state.view(), config);
    if view.page > view.total_pages {
        // Rows were removed under a later page.
        state.dispatch(TableAction::SetPage(view.total_pages));
        view = schema.derive(rows, state.view(), config);
    }

    ui.vertical(|ui| {
        if let Some(e) = toolbar::render_toolbar(ui, state, config, view.active_filter_count, &mut actions) {
            event = Some(e);
        }
        if state.filters_open {
            toolbar::render_filter_panel(ui, state, schema, config, &mut actions);
        }
        if config.enable_column_toggle && state.columns_open {
            toolbar::render_column_panel(ui, state, schema, &mut actions);
        }
        toolbar::render_filter_chips(ui, state, schema, config, &mut actions);

        ui.add_space(8.0);

        let columns = schema.visible_columns(state.view());
        let row_actions = config.actions.has_row_actions();

        Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::ZERO)
            .show(ui, |ui| {
                ScrollArea::horizontal()
                    .id_salt(("entity_table_scroll", &config.title))
                    .show(ui, |ui| {
                        egui::Grid::new(("entity_table", &config.title))
                            .num_columns(columns.len() + usize::from(row_actions))
                            .striped(true)
                            .spacing([16.0, 0.0])
                            .min_col_width(60.0)
                            .show(ui, |ui| {
                                header::render_header(ui, &columns, state.view(), row_actions, &mut actions);

                                for row in &view.rows {
                                    for col in &columns {
                                        cells::render_value_cell(ui, &col.display(row));
                                    }
                                    if row_actions
                                        && let Some(e) = cells::render_row_actions(
                                            ui,
                                            row.row_id(),
                                            config.actions.edit,
                                            config.actions.delete,
                                        )
                                    {
                                        event = Some(e);
                                    }
                                    ui.end_row();
                                }
                            });
                    });
            });

        if view.rows.is_empty() {
            ui.add_space(8.0);
            ui.weak(view.empty_message());
        }

        ui.add_space(8.0);
        pagination::render_footer(ui, &view, &mut actions);
    });

    for action in actions {
        state.dispatch(action);
    }

    event
}
