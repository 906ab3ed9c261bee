#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use space_configurator::ConfiguratorApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Space Configurator v{} starting", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("Space Configurator"),
        ..Default::default()
    };

    eframe::run_native(
        "Space Configurator",
        options,
        Box::new(|cc| Ok(Box::new(ConfiguratorApp::new(cc)))),
    )
}
