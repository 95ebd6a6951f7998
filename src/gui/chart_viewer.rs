//! Chart Viewer Widget
//! Draws a finished `ChartDescription`: XY charts and dashboards with
//! egui_plot, the 3D surface as a pre-rendered texture.

use crate::charts::{ChartDescription, ChartPlotter, Dashboard, SurfaceRenderer};
use crate::config::SurfaceConfig;
use crate::error::ChartError;
use egui::{ColorImage, RichText, ScrollArea, TextureHandle, TextureOptions};
use image::RgbImage;
use tracing::debug;

const PANEL_SPACING: f32 = 15.0;
const PANEL_HEIGHT: f32 = 220.0;
const TITLE_HEIGHT: f32 = 40.0;

pub struct ChartViewer {
    description: ChartDescription,
    /// Rasterized surface, present only for surface charts.
    surface_image: Option<RgbImage>,
    texture: Option<TextureHandle>,
}

impl ChartViewer {
    /// Build the viewer, rasterizing the surface up front so a render
    /// failure surfaces before any window opens.
    pub fn prepare(description: ChartDescription, config: &SurfaceConfig) -> Result<Self, ChartError> {
        let surface_image = match &description {
            ChartDescription::Surface(chart) => Some(SurfaceRenderer::render(
                chart,
                config.width,
                config.height,
                config.theme,
            )?),
            _ => None,
        };

        Ok(Self {
            description,
            surface_image,
            texture: None,
        })
    }

    pub fn description(&self) -> &ChartDescription {
        &self.description
    }

    pub fn show(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        if matches!(self.description, ChartDescription::Surface(_)) {
            self.draw_surface(ctx, ui);
            return;
        }

        match &self.description {
            ChartDescription::Xy(chart) => {
                let height = (ui.available_height() - TITLE_HEIGHT).max(PANEL_HEIGHT);
                ChartPlotter::draw_xy_chart(ui, chart, height);
            }
            ChartDescription::Dashboard(dashboard) => Self::draw_dashboard(ui, dashboard),
            ChartDescription::Surface(_) => {}
        }
    }

    fn draw_surface(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        if self.texture.is_none() {
            if let Some(image) = &self.surface_image {
                let size = [image.width() as usize, image.height() as usize];
                let color_image = ColorImage::from_rgb(size, image.as_raw());
                self.texture = Some(ctx.load_texture("surface", color_image, TextureOptions::LINEAR));
                debug!(width = size[0], height = size[1], "Uploaded surface texture");
            }
        }

        match &self.texture {
            Some(texture) => {
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Image::new(texture).shrink_to_fit());
                });
            }
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Data").size(20.0));
                });
            }
        }
    }

    /// Row-major grid of independent panels, one `Plot` each.
    fn draw_dashboard(ui: &mut egui::Ui, dashboard: &Dashboard) {
        let columns = dashboard.columns.max(1);
        let panel_width = (ui.available_width() - PANEL_SPACING * columns as f32) / columns as f32;
        let row_height = PANEL_HEIGHT + TITLE_HEIGHT + PANEL_SPACING;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, row_height, dashboard.rows, |ui, row_range| {
                for row in row_range {
                    ui.horizontal(|ui| {
                        for column in 0..columns {
                            ui.vertical(|ui| {
                                ui.set_width(panel_width);
                                if let Some(panel) = dashboard.panel_at(row, column) {
                                    ChartPlotter::draw_panel(ui, panel, PANEL_HEIGHT);
                                }
                            });
                            ui.add_space(PANEL_SPACING);
                        }
                    });
                    ui.add_space(PANEL_SPACING);
                }
            });
    }
}
