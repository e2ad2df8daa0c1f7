//! Global Economic Indicators Dashboard
//!
//! A native dashboard over the Gapminder dataset: pick a metric and a year
//! and four coordinated charts plus summary figures follow the selection.

mod charts;
mod config;
mod data;
mod gui;
mod stats;

use clap::Parser;
use config::AppConfig;
use eframe::egui;
use gui::DashboardApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

const APP_NAME: &str = "Global Economic Indicators Dashboard";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::parse();
    info!(source = %config.data_source().describe(), reset = config.reset, "starting dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1500.0, 950.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title(APP_NAME),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run dashboard window: {}", e))
}
