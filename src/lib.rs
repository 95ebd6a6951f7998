//! Climate Charts - temperature anomaly surface, area, dashboard and overlay charts
//!
//! Loads a CSV or spreadsheet table of yearly or monthly anomalies and turns it into a chart
//! description that the GUI draws.

pub mod charts;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod gui;

use charts::{ChartAssembler, ChartDescription, ChartKind};
use config::AppConfig;
use data::DataLoader;
use error::ChartError;
use std::path::Path;

/// Load `file` and assemble the `kind` layout from it.
///
/// Fails before any chart is assembled if a required column is missing or no
/// row survives cleaning.
pub fn build_chart(
    kind: ChartKind,
    file: &Path,
    config: &AppConfig,
) -> Result<ChartDescription, ChartError> {
    let required = kind.required_columns(&config.schema);
    let table = DataLoader::new(config.skip_rows).load(file, &required)?;
    ChartAssembler::assemble(kind, &table, &config.schema)
}
