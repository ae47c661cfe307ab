//! Products page: the product table plus create/edit and delete dialogs.

use egui::{Color32, Response, RichText, Ui, Window};

use crate::state::{FormMode, State};
use crate::widgets::{FormAction, TableEvent, entity_table, form_grid};

pub fn products_page(state: &mut State, ui: &mut Ui) -> Response {
    let response = ui.vertical(|ui| {
        if let Some(error) = &state.error {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
            ui.add_space(4.0);
        }

        let config = state.products_table_config();
        let event = entity_table(
            ui,
            &mut state.products_table,
            &state.product_schema,
            state.store.products(),
            &config,
        );

        match event {
            Some(TableEvent::Add) => state.open_create_form(),
            Some(TableEvent::Edit(id)) => state.open_edit_form(id),
            Some(TableEvent::Delete(id)) => state.pending_delete = Some(id),
            None => {}
        }
    });

    show_product_form(state, ui);
    show_delete_confirmation(state, ui);

    response.response
}

fn show_product_form(state: &mut State, ui: &mut Ui) {
    let Some(form) = state.product_form.as_mut() else {
        return;
    };

    let title = match form.mode {
        FormMode::Create => "New product".to_owned(),
        FormMode::Edit(id) => format!("Edit product #{id}"),
    };

    let mut open = true;
    let mut action = None;
    Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(560.0)
        .show(ui.ctx(), |ui| {
            action = form_grid(
                ui,
                &state.form_schema,
                &mut form.values,
                &state.options,
                form.errors.as_ref(),
            );
        });

    match action {
        Some(FormAction::Save) => state.submit_form(),
        Some(FormAction::Cancel) => state.close_form(),
        None if !open => state.close_form(),
        None => {}
    }
}

fn show_delete_confirmation(state: &mut State, ui: &mut Ui) {
    let Some(id) = state.pending_delete else {
        return;
    };
    let name = state
        .store
        .products()
        .iter()
        .find(|p| p.id == id)
        .map_or_else(|| format!("#{id}"), |p| p.description.clone());

    let mut open = true;
    let mut confirmed = false;
    let mut cancelled = false;
    Window::new("Delete product")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ui.ctx(), |ui| {
            ui.label(format!("Are you sure you want to delete '{name}'?"));
            ui.label("This action cannot be undone.");
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("Confirm delete").color(Color32::RED))
                    .clicked()
                {
                    confirmed = true;
                }
                if ui.button("Keep").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        state.confirm_delete();
    } else if cancelled || !open {
        state.pending_delete = None;
    }
}
