//! Dashboard: headline figures, alerts and breakdowns of the product list.

use egui::{Color32, ProgressBar, Response, Ui};
use stockroom_business::inventory::{InventoryStats, ProductStats, inventory_alerts};
use stockroom_business::table::humanize::format_count;

use crate::state::State;
use crate::widgets::{alert_list, stat_card};

pub fn dashboard_page(state: &mut State, ui: &mut Ui) -> Response {
    let products = state.store.products();
    let stats = InventoryStats::from_products(products);
    let breakdown = ProductStats::from_products(products);

    ui.vertical(|ui| {
        ui.heading("Dashboard");
        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            stat_card(ui, "Total products", &stats.total_products.to_string(), None);
            stat_card(ui, "Active", &stats.active_products.to_string(), None);
            let low_accent = (stats.low_stock > 0).then_some(Color32::from_rgb(255, 165, 0));
            stat_card(ui, "Low stock", &stats.low_stock.to_string(), low_accent);
            let units = format_count(stats.total_units as f64);
            stat_card(ui, "Units in stock", &units, None);
        });

        ui.add_space(12.0);
        alert_list(ui, &inventory_alerts(&stats));

        ui.add_space(12.0);
        ui.columns(2, |columns| {
            columns[0].strong("By status");
            egui::Grid::new("status_breakdown")
                .num_columns(2)
                .show(&mut columns[0], |ui| {
                    for (label, count) in [
                        ("Active", breakdown.active),
                        ("Inactive", breakdown.inactive),
                        ("Discontinued", breakdown.discontinued),
                    ] {
                        ui.label(label);
                        ui.label(count.to_string());
                        ui.end_row();
                    }
                });

            columns[1].strong("By category");
            let max = breakdown.by_category.values().copied().max().unwrap_or(1).max(1);
            egui::Grid::new("category_breakdown")
                .num_columns(2)
                .show(&mut columns[1], |ui| {
                    for (category, count) in &breakdown.by_category {
                        ui.label(category);
                        let fraction = *count as f32 / max as f32;
                        ui.add(
                            ProgressBar::new(fraction)
                                .desired_width(160.0)
                                .text(count.to_string()),
                        );
                        ui.end_row();
                    }
                });
        });
    })
    .response
}

#[cfg(test)]
mod dashboard_page_test {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use crate::pages::Page;
    use crate::state::State;

    #[test]
    fn test_dashboard_shows_demo_figures() {
        let harness = Harness::new_ui_state(
            |ui, state| {
                super::dashboard_page(state, ui);
            },
            State::test(Page::Dashboard),
        );

        assert!(harness.query_by_label("Total products").is_some());
        assert!(harness.query_by_label("12").is_some());
        assert!(harness.query_by_label("Units in stock").is_some());
        assert!(harness.query_by_label("2,736").is_some());
        assert!(harness.query_by_label("Electronics").is_some());
    }

    #[test]
    fn test_empty_inventory_alert() {
        let mut state = State::new(stockroom_business::Config::default());
        state.store = Box::new(stockroom_business::inventory::MemoryStore::new());

        let harness = Harness::new_ui_state(
            |ui, state| {
                super::dashboard_page(state, ui);
            },
            state,
        );

        assert!(harness.query_by_label("Empty inventory").is_some());
    }
}
