//! Climate Charts Main Application
//! Window that shows one assembled chart.

use crate::config::SurfaceConfig;
use crate::gui::ChartViewer;
use tracing::info;

pub struct ClimateApp {
    chart_viewer: ChartViewer,
}

impl ClimateApp {
    pub fn new(cc: &eframe::CreationContext<'_>, chart_viewer: ChartViewer, config: &SurfaceConfig) -> Self {
        cc.egui_ctx.set_visuals(config.theme.visuals());
        if config.license.is_some() {
            info!("Rendering surface licensed");
        }
        info!(title = chart_viewer.description().title(), "Opening chart window");

        Self { chart_viewer }
    }
}

impl eframe::App for ClimateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ctx, ui);
        });
    }
}
