//! Table header with sort toggles.

use egui::Ui;
use stockroom_business::table::{ColumnDef, SortDirection, TableAction, TableViewState};

use super::cells::header_cell;

/// Arrow shown next to a sortable column label.
#[inline]
pub fn sort_indicator(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::None => "↕",
        SortDirection::Ascending => "▲",
        SortDirection::Descending => "▼",
    }
}

/// Renders one header row. Clicking a sortable label cycles its sort.
pub(super) fn render_header<T>(
    ui: &mut Ui,
    columns: &[&ColumnDef<T>],
    view: &TableViewState,
    with_actions: bool,
    actions: &mut Vec<TableAction>,
) {
    for col in columns {
        header_cell(ui, |ui| {
            if col.is_sortable() {
                let arrow = sort_indicator(view.sort_direction_of(col.key()));
                let label = format!("{} {arrow}", col.label());
                if ui
                    .button(egui::RichText::new(label).strong())
                    .on_hover_text("Sort")
                    .clicked()
                {
                    actions.push(TableAction::ToggleSort(col.key()));
                }
            } else {
                ui.strong(col.label());
            }
        });
    }
    if with_actions {
        header_cell(ui, |ui| {
            ui.strong("Actions");
        });
    }
    ui.end_row();
}
