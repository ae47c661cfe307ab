#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use stockroom_business::Config;
use stockroom_ui::StockroomApp;
use stockroom_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = Config::init()?;
    log::info!("Starting with {config:?}");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Stockroom",
        native_options,
        Box::new(move |_cc| Ok(Box::new(StockroomApp::new(State::new(config))))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start the UI: {err}"))
}
