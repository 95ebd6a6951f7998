//! Climate Charts - Temperature Anomaly Chart Viewer
//!
//! Builds the requested chart from a CSV or spreadsheet file, then opens it in a window.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use climate_charts::cli::Cli;
use climate_charts::config::AppConfig;
use climate_charts::gui::{ChartViewer, ClimateApp};
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    cli.apply_overrides(&mut config);

    let file = match &cli.file {
        Some(path) => path.clone(),
        None => rfd::FileDialog::new()
            .add_filter("Data Files", &["csv", "xlsx", "xls", "ods"])
            .pick_file()
            .context("No data file selected")?,
    };

    let description = climate_charts::build_chart(cli.kind, &file, &config)
        .with_context(|| format!("Failed to build {:?} chart from {}", cli.kind, file.display()))?;
    let viewer = ChartViewer::prepare(description, &config.surface)?;
    let title = viewer.description().title().to_string();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.surface.width as f32, config.surface.height as f32])
            .with_min_inner_size([
                config.surface.width.min(800) as f32,
                config.surface.height.min(600) as f32,
            ])
            .with_title(title),
        ..Default::default()
    };

    let surface = config.surface.clone();
    eframe::run_native(
        "Climate Charts",
        options,
        Box::new(move |cc| Ok(Box::new(ClimateApp::new(cc, viewer, &surface)))),
    )
    .map_err(|e| anyhow!("Window error: {}", e))
}
