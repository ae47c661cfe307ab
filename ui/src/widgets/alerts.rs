use egui::{Color32, Frame, Margin, RichText, Ui};
use stockroom_business::inventory::{AlertKind, InventoryAlert};

fn alert_color(kind: AlertKind) -> Color32 {
    match kind {
        AlertKind::Info => Color32::from_rgb(30, 120, 200),
        AlertKind::Success => Color32::from_rgb(34, 139, 34),
        AlertKind::Warning => Color32::from_rgb(255, 165, 0),
        AlertKind::Error => Color32::RED,
    }
}

pub fn alert_list(ui: &mut Ui, alerts: &[InventoryAlert]) {
    for alert in alerts {
        let color = alert_color(alert.kind);
        Frame::NONE
            .fill(color.gamma_multiply(0.12))
            .corner_radius(4.0)
            .inner_margin(Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(alert.title).strong().color(color));
                    ui.label(&alert.message);
                });
            });
        ui.add_space(4.0);
    }
}
