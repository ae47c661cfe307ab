//! Cell rendering for the entity table.

use egui::{Color32, Frame, InnerResponse, Margin, RichText, Ui};
use stockroom_business::table::{CellDisplay, CellTone, RowId};

use super::TableEvent;

/// Header background (light gray).
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Header cell with background.
pub(super) fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Data cell with padding.
pub(super) fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Text color for a tone; `None` keeps the default.
#[inline]
pub fn tone_color(ui: &Ui, tone: CellTone) -> Option<Color32> {
    match tone {
        CellTone::Plain => None,
        CellTone::Positive => Some(Color32::from_rgb(34, 139, 34)),
        CellTone::Warning => Some(Color32::from_rgb(255, 165, 0)),
        CellTone::Critical => Some(Color32::RED),
        CellTone::Muted => Some(ui.visuals().weak_text_color()),
    }
}

#[inline]
pub(super) fn render_value_cell(ui: &mut Ui, display: &CellDisplay) {
    let mut text = RichText::new(&display.text);
    if let Some(color) = tone_color(ui, display.tone) {
        text = text.color(color);
    }
    data_cell(ui, |ui| {
        ui.label(text);
    });
}

/// Edit/Delete buttons for one row.
#[inline]
pub(super) fn render_row_actions(ui: &mut Ui, id: RowId, edit: bool, delete: bool) -> Option<TableEvent> {
    let mut event = None;

    data_cell(ui, |ui| {
        ui.horizontal(|ui| {
            if edit && ui.button("Edit").on_hover_text("Edit this row").clicked() {
                event = Some(TableEvent::Edit(id));
            }
            if delete
                && ui
                    .button(RichText::new("Delete").color(Color32::RED))
                    .on_hover_text("Delete this row")
                    .clicked()
            {
                event = Some(TableEvent::Delete(id));
            }
        });
    });

    event
}
