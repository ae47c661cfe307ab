use egui::{Response, Ui};
use stockroom_business::inventory::stock_rows;

use crate::state::State;
use crate::widgets::entity_table;

/// Stock levels per warehouse. Read-only; rows are rebuilt every frame.
pub fn stock_page(state: &mut State, ui: &mut Ui) -> Response {
    let rows = stock_rows(
        state.store.products(),
        state.store.warehouses(),
        state.store.warehouse_stock(),
    );
    let config = state.stock_table_config();

    ui.vertical(|ui| {
        ui.label(format!("{} warehouses", state.store.warehouses().len()));
        ui.add_space(4.0);
        if let Some(event) = entity_table(ui, &mut state.stock_table, &state.stock_schema, &rows, &config) {
            log::warn!("Stock table has no actions, ignoring {event:?}");
        }
    })
    .response
}
