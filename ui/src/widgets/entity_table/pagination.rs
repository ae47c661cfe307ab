//! Result summary and page navigation below the grid.

use egui::Ui;
use stockroom_business::table::{TableAction, TableView};

/// `Showing N of M results`, with the unfiltered total when filters apply.
pub fn summary_text<T>(view: &TableView<'_, T>) -> String {
    let mut text = format!(
        "Showing {} of {} results",
        view.rows.len(),
        view.filtered_count
    );
    if view.is_filtered() {
        text.push_str(&format!(" ({} total)", view.total_count));
    }
    text
}

pub(super) fn render_footer<T>(ui: &mut Ui, view: &TableView<'_, T>, actions: &mut Vec<TableAction>) {
    ui.horizontal(|ui| {
        ui.label(summary_text(view));

        if view.total_pages <= 1 {
            return;
        }

        ui.separator();
        if ui
            .add_enabled(view.has_previous(), egui::Button::new("Previous"))
            .clicked()
        {
            actions.push(TableAction::PreviousPage);
        }
        ui.label(format!("Page {} of {}", view.page, view.total_pages));
        if ui
            .add_enabled(view.has_next(), egui::Button::new("Next"))
            .clicked()
        {
            actions.push(TableAction::NextPage {
                total_pages: view.total_pages,
            });
        }
    });
}
