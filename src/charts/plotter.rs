//! Chart Plotter Module
//! Draws XY charts and dashboard panels using egui_plot.

use crate::charts::{PanelSpec, SeriesStyle, XyChart};
use crate::data::Series;
use egui::RichText;
use egui_plot::{Legend, Line, Plot, PlotPoints, PlotUi};

/// Creates interactive line and area charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Year ticks are whole numbers; hide the fractional marks between them.
    fn format_year(value: f64) -> String {
        if (value - value.round()).abs() < 1e-9 {
            format!("{:.0}", value)
        } else {
            String::new()
        }
    }

    fn draw_series(
        plot_ui: &mut PlotUi,
        series: &Series,
        style: SeriesStyle,
        width: f32,
        named: bool,
    ) {
        let mut line = Line::new(PlotPoints::from(series.points()))
            .color(series.color)
            .width(width);
        if style == SeriesStyle::Area {
            line = line.fill(0.0_f32);
        }
        if named {
            line = line.name(&series.name);
        }
        plot_ui.line(line);
    }

    /// Draw a chart with every series on one shared pair of axes.
    pub fn draw_xy_chart(ui: &mut egui::Ui, chart: &XyChart, height: f32) {
        ui.label(RichText::new(&chart.title).size(18.0).strong());
        ui.add_space(8.0);

        let mut plot = Plot::new(format!("xy_{}", chart.title))
            .height(height)
            .x_axis_label(chart.axes.x.as_str())
            .y_axis_label(chart.axes.y.as_str())
            .x_axis_formatter(|mark, _range| Self::format_year(mark.value));
        if chart.legend.is_some() {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for series in &chart.series {
                let named = chart
                    .legend
                    .as_ref()
                    .is_some_and(|entries| entries.contains(&series.name));
                Self::draw_series(plot_ui, series, chart.style, chart.line_width, named);
            }
        });
    }

    /// Draw one dashboard panel in its own coordinate system.
    pub fn draw_panel(ui: &mut egui::Ui, panel: &PanelSpec, height: f32) {
        ui.label(RichText::new(&panel.title).size(14.0).strong());

        let mut plot = Plot::new(format!(
            "panel_{}_{}",
            panel.placement.row, panel.placement.column
        ))
        .height(height)
        .allow_scroll(false)
        .x_axis_label(panel.axes.x.as_str())
        .y_axis_label(panel.axes.y.as_str())
        .x_axis_formatter(|mark, _range| Self::format_year(mark.value));
        if panel.legend {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for series in &panel.series {
                Self::draw_series(plot_ui, series, SeriesStyle::Line, panel.line_width, panel.legend);
            }
        });
    }
}
