//! Palette Module
//! Fixed per-category colors, indexed by category ordinal.

use crate::error::ChartError;
use egui::Color32;

/// Month colors used by the 12-panel dashboard.
pub const DASHBOARD_PALETTE: [Color32; 12] = [
    Color32::from_rgb(255, 0, 0),     // Red
    Color32::from_rgb(255, 165, 0),   // Orange
    Color32::from_rgb(255, 255, 0),   // Yellow
    Color32::from_rgb(0, 128, 0),     // Green
    Color32::from_rgb(0, 255, 255),   // Cyan
    Color32::from_rgb(0, 0, 255),     // Blue
    Color32::from_rgb(75, 0, 130),    // Indigo
    Color32::from_rgb(238, 130, 238), // Violet
    Color32::from_rgb(165, 42, 42),   // Brown
    Color32::from_rgb(255, 20, 147),  // Deep Pink
    Color32::from_rgb(128, 0, 128),   // Purple
    Color32::from_rgb(0, 0, 0),       // Black
];

/// Month colors used when all months share one chart.
pub const OVERLAY_PALETTE: [Color32; 12] = [
    Color32::from_rgb(0, 128, 255),   // Azure
    Color32::from_rgb(255, 0, 0),     // Red
    Color32::from_rgb(0, 255, 0),     // Green
    Color32::from_rgb(255, 165, 0),   // Orange
    Color32::from_rgb(75, 0, 130),    // Indigo
    Color32::from_rgb(238, 130, 238), // Violet
    Color32::from_rgb(255, 192, 203), // Pink
    Color32::from_rgb(128, 0, 128),   // Purple
    Color32::from_rgb(255, 215, 0),   // Gold
    Color32::from_rgb(0, 255, 255),   // Cyan
    Color32::from_rgb(255, 20, 147),  // Deep Pink
    Color32::from_rgb(139, 69, 19),   // Saddle Brown
];

/// Ordered list of colors; index 0 goes to the first category.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color32>,
}

impl Palette {
    pub fn new(colors: Vec<Color32>) -> Self {
        Self { colors }
    }

    pub fn dashboard() -> Self {
        Self::new(DASHBOARD_PALETTE.to_vec())
    }

    pub fn overlay() -> Self {
        Self::new(OVERLAY_PALETTE.to_vec())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for category `index`, wrapping around past the last color.
    pub fn color_for(&self, index: usize) -> Result<Color32, ChartError> {
        if self.colors.is_empty() {
            return Err(ChartError::IndexOutOfRange { index });
        }
        Ok(self.colors[index % self.colors.len()])
    }
}
