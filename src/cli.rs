//! Command Line Module
//! Arguments for choosing the chart, the data file and surface overrides.

use crate::charts::ChartKind;
use crate::config::{AppConfig, Theme};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "climate-charts",
    version,
    about = "Temperature anomaly chart viewer"
)]
pub struct Cli {
    #[arg(value_enum, help = "Chart layout to open")]
    pub kind: ChartKind,
    #[arg(long, help = "CSV or spreadsheet data file (asks with a file dialog when omitted)")]
    pub file: Option<PathBuf>,
    #[arg(long, help = "JSON config file with column names and surface settings")]
    pub config: Option<PathBuf>,
    #[arg(long, help = "Lines to skip before the CSV header")]
    pub skip_rows: Option<usize>,
    #[arg(long, value_enum, help = "Window theme")]
    pub theme: Option<Theme>,
    #[arg(long, help = "License string handed to the rendering surface")]
    pub license: Option<String>,
}

impl Cli {
    /// Command-line values win over the config file.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(skip_rows) = self.skip_rows {
            config.skip_rows = skip_rows;
        }
        if let Some(theme) = self.theme {
            config.surface.theme = theme;
        }
        if let Some(license) = &self.license {
            config.surface.license = Some(license.clone());
        }
    }
}
