mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::DashboardApp;
use config::DashboardConfig;
use data::loader::DataLoader;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::default();

    // Load failures abort before any window opens.
    let loader = DataLoader::new(config.files.clone());
    let data = loader.load().context("loading dashboard data")?;
    log::debug!("{} data files read", loader.files_read());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(ui::shell::PAGE_TITLE)
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        ui::shell::PAGE_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(data)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
