//! Renders a [`FormSchema`] on a 12-unit grid.

use egui::{Color32, ComboBox, RichText, TextEdit, Ui, vec2};
use stockroom_business::form::GRID_UNITS;
use stockroom_business::inventory::DynamicOptions;
use stockroom_business::{FieldKind, FormError, FormField, FormSchema, FormValues};

/// Button pressed below the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Save,
    Cancel,
}

/// Draws every field row plus Save/Cancel.
pub fn form_grid(
    ui: &mut Ui,
    schema: &FormSchema,
    values: &mut FormValues,
    options: &DynamicOptions,
    errors: Option<&FormError>,
) -> Option<FormAction> {
    let spacing = ui.spacing().item_spacing.x;
    let unit = (ui.available_width() + spacing) / f32::from(GRID_UNITS);

    for row in schema.rows() {
        ui.horizontal_top(|ui| {
            for field in row {
                let width = unit * f32::from(field.col_span) - spacing;
                ui.allocate_ui(vec2(width, 0.0), |ui| {
                    ui.set_width(width);
                    ui.vertical(|ui| {
                        render_field(ui, field, values, options, width);
                        if let Some(message) = errors.and_then(|e| e.field(field.name)) {
                            ui.label(RichText::new(message).small().color(Color32::RED));
                        }
                    });
                });
            }
        });
        ui.add_space(4.0);
    }

    ui.add_space(8.0);
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            action = Some(FormAction::Save);
        }
        if ui.button("Cancel").clicked() {
            action = Some(FormAction::Cancel);
        }
    });
    action
}

fn field_label(field: &FormField) -> String {
    if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_owned()
    }
}

fn render_field(ui: &mut Ui, field: &FormField, values: &mut FormValues, options: &DynamicOptions, width: f32) {
    ui.label(RichText::new(field_label(field)).small());

    let value = values.get_mut(field.name);
    match field.kind {
        FieldKind::Select(option_field) => {
            let selected = if value.is_empty() { "None" } else { value.as_str() }.to_owned();
            ComboBox::from_id_salt(("form_select", field.name))
                .selected_text(selected)
                .width(width)
                .show_ui(ui, |ui| {
                    ui.selectable_value(value, String::new(), "None");
                    for option in options.get(option_field) {
                        ui.selectable_value(value, option.value.clone(), &option.label);
                    }
                });
        }
        FieldKind::Text | FieldKind::Number | FieldKind::Integer | FieldKind::Date => {
            let hint = match (field.placeholder, field.kind) {
                (Some(placeholder), _) => placeholder,
                (None, FieldKind::Date) => "YYYY-MM-DD",
                (None, _) => "",
            };
            ui.add(TextEdit::singleline(value).hint_text(hint).desired_width(width));
        }
    }
}
