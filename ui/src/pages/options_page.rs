//! Options page: add and remove categories, units and statuses.

use egui::{Color32, Response, RichText, TextEdit, Ui};
use stockroom_business::inventory::{DynamicOptions, OptionField};

use crate::state::State;

pub fn options_page(state: &mut State, ui: &mut Ui) -> Response {
    let mut add: Option<OptionField> = None;
    let mut remove: Option<(OptionField, String)> = None;

    let response = ui.vertical(|ui| {
        ui.heading("Options");
        ui.label("Built-in options are fixed; entries you add can be removed again.");
        ui.add_space(4.0);

        match &state.options_page.message {
            Some(Ok(message)) => {
                ui.colored_label(Color32::from_rgb(34, 139, 34), message);
            }
            Some(Err(message)) => {
                ui.colored_label(Color32::RED, message);
            }
            None => {}
        }

        ui.add_space(8.0);
        ui.columns(OptionField::ALL.len(), |columns| {
            for (ui, field) in columns.iter_mut().zip(OptionField::ALL) {
                ui.strong(field.label());
                ui.add_space(4.0);

                for option in state.options.get(field) {
                    ui.horizontal(|ui| {
                        ui.label(&option.label);
                        if DynamicOptions::is_default(field, &option.value) {
                            ui.label(RichText::new("built-in").small().weak());
                        } else if ui.small_button("Remove").clicked() {
                            remove = Some((field, option.value.clone()));
                        }
                    });
                }

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let input = state.options_page.input_mut(field);
                    let edit = ui.add(
                        TextEdit::singleline(input)
                            .hint_text(format!("New {}", field.label().to_lowercase()))
                            .desired_width(120.0),
                    );
                    let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Add").clicked() || submitted {
                        add = Some(field);
                    }
                });
            }
        });
    });

    if let Some(field) = add {
        state.add_option(field);
    }
    if let Some((field, value)) = remove {
        state.remove_option(field, &value);
    }

    response.response
}
