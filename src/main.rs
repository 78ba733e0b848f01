mod app;
mod boundaries;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use app::FraudAtlasApp;
use clap::Parser;
use config::DataConfig;
use data::loader::Datasets;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DataConfig::parse();
    log::info!("Loading data from {}", config.data_dir.display());

    let datasets = match Datasets::load(&config) {
        Ok(datasets) => datasets,
        Err(e) => {
            log::error!("Failed to load data: {e:#}");
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title(ui::panels::APP_TITLE)
                .set_description(format!("Cannot start without its input files:\n\n{e:#}"))
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        ui::panels::APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(FraudAtlasApp::new(datasets)))),
    )
}
