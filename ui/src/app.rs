use crate::pages::{self, Page};
use crate::state::State;

pub struct StockroomApp {
    state: State,
}

impl StockroomApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Top bar and the selected page.
    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Stockroom");
                ui.separator();
                for page in Page::ALL {
                    if ui
                        .add(egui::Button::new(page.label()).selected(self.state.page == page))
                        .clicked()
                        && self.state.page != page
                    {
                        log::debug!("Navigating to {}", page.label());
                        self.state.page = page;
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.state.page {
                Page::Dashboard => pages::dashboard_page(&mut self.state, ui),
                Page::Products => pages::products_page(&mut self.state, ui),
                Page::Stock => pages::stock_page(&mut self.state, ui),
                Page::Options => pages::options_page(&mut self.state, ui),
            });
        });
    }
}

impl eframe::App for StockroomApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
