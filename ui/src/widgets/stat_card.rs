use egui::{Color32, Frame, Margin, RichText, Stroke, Ui};

/// A framed figure with a caption, as shown on the dashboard.
pub fn stat_card(ui: &mut Ui, title: &str, value: &str, accent: Option<Color32>) {
    Frame::NONE
        .stroke(Stroke::new(1.0, Color32::from_rgb(200, 200, 200)))
        .corner_radius(4.0)
        .inner_margin(Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_min_width(140.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(title).small().weak());
                let mut text = RichText::new(value).heading().strong();
                if let Some(color) = accent {
                    text = text.color(color);
                }
                ui.label(text);
            });
        });
}
