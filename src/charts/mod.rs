//! Charts module - grid, palette, layout, assembly and rendering

mod assembler;
mod grid;
mod layout;
mod palette;
mod plotter;
mod renderer;

pub use assembler::{
    AxisLabels, ChartAssembler, ChartDescription, ChartKind, Dashboard, PanelSpec, SeriesStyle,
    SurfaceChart, XyChart, DASHBOARD_COLUMNS, DASHBOARD_ROWS,
};
pub use grid::{Grid, GridBuilder};
pub use layout::{LayoutPlanner, Placement};
pub use palette::{Palette, DASHBOARD_PALETTE, OVERLAY_PALETTE};
pub use plotter::ChartPlotter;
pub use renderer::SurfaceRenderer;
