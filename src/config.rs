//! Configuration Module
//! JSON config file with column names and rendering-surface settings.

use crate::data::ColumnSchema;
use crate::error::ChartError;
use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    White,
    Dark,
}

impl Theme {
    pub fn visuals(&self) -> egui::Visuals {
        match self {
            Theme::White => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        }
    }

    pub fn background(&self) -> Color32 {
        match self {
            Theme::White => Color32::WHITE,
            Theme::Dark => Color32::from_rgb(27, 27, 27),
        }
    }

    pub fn foreground(&self) -> Color32 {
        match self {
            Theme::White => Color32::BLACK,
            Theme::Dark => Color32::from_rgb(220, 220, 220),
        }
    }
}

/// Settings injected into the rendering surface once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub theme: Theme,
    pub license: Option<String>,
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            theme: Theme::White,
            license: None,
            width: 1400,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub schema: ColumnSchema,
    /// Lines before the CSV header (GISTEMP files carry a one-line title).
    pub skip_rows: usize,
    pub surface: SurfaceConfig,
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self, ChartError> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| ChartError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The surface needs a non-empty pixel area to draw into.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(ChartError::Config(format!(
                "surface size must be non-zero, got {}x{}",
                self.surface.width, self.surface.height
            )));
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ChartError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ChartError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json(&text)?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}
