//! GUI module - the window the assembled chart is drawn in

mod app;
mod chart_viewer;

pub use app::ClimateApp;
pub use chart_viewer::ChartViewer;
