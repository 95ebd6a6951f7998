//! Chart Assembler Module
//! Composes series, colors, layout and labels into a renderable description.
//!
//! Four layouts are supported:
//! 1. Surface: replicated value grid, blue-to-red color scale
//! 2. Area: single value series filled down to zero
//! 3. Dashboard: one independent line chart per month on a 4x3 grid
//! 4. Overlay: every month on one shared pair of axes with a legend

use crate::charts::{Grid, GridBuilder, LayoutPlanner, Palette, Placement};
use crate::data::{ClimateTable, ColumnSchema, Series, SeriesExtractor};
use crate::error::ChartError;
use egui::Color32;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const DASHBOARD_ROWS: usize = 4;
pub const DASHBOARD_COLUMNS: usize = 3;

const YEAR_LABEL: &str = "Year";
const ANOMALY_LABEL: &str = "Temperature Anomaly (C)";
const DEFAULT_LINE_WIDTH: f32 = 1.5;
const OVERLAY_LINE_WIDTH: f32 = 2.0;

/// Which layout to assemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Surface,
    Area,
    Dashboard,
    Overlay,
}

impl ChartKind {
    /// Columns the table must provide for this layout, x column first.
    pub fn required_columns(&self, schema: &ColumnSchema) -> Vec<String> {
        match self {
            ChartKind::Surface | ChartKind::Area => schema.value_columns(),
            ChartKind::Dashboard | ChartKind::Overlay => schema.monthly_columns(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
}

impl AxisLabels {
    fn anomaly_by_year() -> Self {
        Self {
            x: YEAR_LABEL.to_string(),
            y: ANOMALY_LABEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStyle {
    Line,
    Area,
}

/// Any number of series on one shared pair of axes.
#[derive(Debug, Clone, PartialEq)]
pub struct XyChart {
    pub title: String,
    pub axes: AxisLabels,
    pub series: Vec<Series>,
    pub style: SeriesStyle,
    pub line_width: f32,
    /// One entry per series name, or `None` for no legend.
    pub legend: Option<Vec<String>>,
}

/// One chart cell of a dashboard with its own coordinate system.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub placement: Placement,
    pub title: String,
    pub series: Vec<Series>,
    pub axes: AxisLabels,
    pub legend: bool,
    pub line_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub rows: usize,
    pub columns: usize,
    pub panels: Vec<PanelSpec>,
}

impl Dashboard {
    pub fn panel_at(&self, row: usize, column: usize) -> Option<&PanelSpec> {
        self.panels
            .iter()
            .find(|p| p.placement.row == row && p.placement.column == column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceChart {
    pub title: String,
    pub grid: Grid,
    pub min_color: Color32,
    pub max_color: Color32,
    pub x_label: String,
    pub y_label: String,
    pub z_label: String,
    /// Camera position relative to the chart center.
    pub camera: [f64; 3],
}

/// Finished description handed to the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartDescription {
    Surface(SurfaceChart),
    Xy(XyChart),
    Dashboard(Dashboard),
}

impl ChartDescription {
    pub fn title(&self) -> &str {
        match self {
            ChartDescription::Surface(chart) => &chart.title,
            ChartDescription::Xy(chart) => &chart.title,
            ChartDescription::Dashboard(_) => "Temperature Anomaly Dashboard",
        }
    }
}

pub struct ChartAssembler;

impl ChartAssembler {
    /// Extract what `kind` needs from `table` and assemble it.
    pub fn assemble(
        kind: ChartKind,
        table: &ClimateTable,
        schema: &ColumnSchema,
    ) -> Result<ChartDescription, ChartError> {
        info!(?kind, rows = table.height(), "Assembling chart");
        let monthly = matches!(kind, ChartKind::Dashboard | ChartKind::Overlay);
        if monthly && schema.month_columns.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        match kind {
            ChartKind::Surface => {
                let values = SeriesExtractor::extract(table, &schema.value_column)?;
                let repeat = SeriesExtractor::distinct_x_count(table)?;
                let grid = GridBuilder::replicate(&values.y, repeat)?;
                Ok(Self::surface(grid))
            }
            ChartKind::Area => {
                let series = SeriesExtractor::extract(table, &schema.value_column)?;
                Ok(Self::area(series))
            }
            ChartKind::Dashboard => {
                let series = SeriesExtractor::extract_many(table, &schema.month_columns)?;
                Self::dashboard(series, &Palette::dashboard(), DASHBOARD_ROWS, DASHBOARD_COLUMNS)
            }
            ChartKind::Overlay => {
                let series = SeriesExtractor::extract_many(table, &schema.month_columns)?;
                Self::overlay(series, &Palette::overlay())
            }
        }
    }

    pub fn surface(grid: Grid) -> ChartDescription {
        ChartDescription::Surface(SurfaceChart {
            title: "3D Surface Temperature Chart".to_string(),
            grid,
            min_color: Color32::from_rgb(0, 0, 255),
            max_color: Color32::from_rgb(255, 0, 0),
            x_label: YEAR_LABEL.to_string(),
            y_label: "Temperature Anomaly".to_string(),
            z_label: "Temperature (°C)".to_string(),
            camera: [1.0, 1.0, 2.0],
        })
    }

    pub fn area(series: Series) -> ChartDescription {
        let series = Series {
            name: "Temperature Anomaly".to_string(),
            ..series
        };
        ChartDescription::Xy(XyChart {
            title: "Global Temperature Changes (Area Chart)".to_string(),
            axes: AxisLabels::anomaly_by_year(),
            series: vec![series],
            style: SeriesStyle::Area,
            line_width: DEFAULT_LINE_WIDTH,
            legend: None,
        })
    }

    /// All series on one chart, colored by position, one legend entry each.
    pub fn overlay(series: Vec<Series>, palette: &Palette) -> Result<ChartDescription, ChartError> {
        let series = Self::colorize(series, palette)?;
        let legend = series.iter().map(|s| s.name.clone()).collect();

        Ok(ChartDescription::Xy(XyChart {
            title: "GLOBAL LAND-OCEAN TEMPERATURE INDEX".to_string(),
            axes: AxisLabels::anomaly_by_year(),
            series,
            style: SeriesStyle::Line,
            line_width: OVERLAY_LINE_WIDTH,
            legend: Some(legend),
        }))
    }

    /// One panel per series on a `rows` x `columns` dashboard.
    pub fn dashboard(
        series: Vec<Series>,
        palette: &Palette,
        rows: usize,
        columns: usize,
    ) -> Result<ChartDescription, ChartError> {
        let placements = LayoutPlanner::plan(series.len(), rows, columns)?;
        let series = Self::colorize(series, palette)?;

        let panels = series
            .into_iter()
            .zip(placements)
            .map(|(series, placement)| {
                debug!(name = %series.name, row = placement.row, column = placement.column, "Placed panel");
                PanelSpec {
                    placement,
                    title: format!("Temperature Anomaly ({})", series.name),
                    series: vec![series],
                    axes: AxisLabels::anomaly_by_year(),
                    legend: true,
                    line_width: DEFAULT_LINE_WIDTH,
                }
            })
            .collect();

        Ok(ChartDescription::Dashboard(Dashboard {
            rows,
            columns,
            panels,
        }))
    }

    fn colorize(series: Vec<Series>, palette: &Palette) -> Result<Vec<Series>, ChartError> {
        series
            .into_iter()
            .enumerate()
            .map(|(i, s)| Ok(s.with_color(palette.color_for(i)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Series, MONTH_COLUMNS};
    use polars::df;
    use polars::prelude::{Column, DataFrame};

    fn monthly_table() -> (ClimateTable, ColumnSchema) {
        let schema = ColumnSchema::default();
        let years = [1880i64, 1881, 1882];
        let mut columns = vec![Column::new("Year".into(), years)];
        for (i, month) in MONTH_COLUMNS.iter().enumerate() {
            let base = i as f64 / 100.0;
            columns.push(Column::new((*month).into(), [base, base + 0.1, base - 0.1]));
        }
        let df = DataFrame::new(columns).unwrap();
        let table = ClimateTable::from_frame(df, &ChartKind::Overlay.required_columns(&schema)).unwrap();
        (table, schema)
    }

    fn yearly_table() -> (ClimateTable, ColumnSchema) {
        let schema = ColumnSchema::default();
        let df = df!(
            "Year" => [2000i64, 2001, 2002],
            "No_Smoothing" => [0.1, 0.2, 0.15],
        )
        .unwrap();
        let table = ClimateTable::from_frame(df, &ChartKind::Area.required_columns(&schema)).unwrap();
        (table, schema)
    }

    #[test]
    fn surface_replicates_values_per_year() {
        let (table, schema) = yearly_table();
        let ChartDescription::Surface(chart) =
            ChartAssembler::assemble(ChartKind::Surface, &table, &schema).unwrap()
        else {
            panic!("expected surface");
        };

        assert_eq!(chart.grid.row_count(), 3);
        assert!(chart.grid.rows().iter().all(|r| r == &vec![0.1, 0.2, 0.15]));
        assert_eq!(chart.grid.min_value, 0.1);
        assert_eq!(chart.grid.max_value, 0.2);
        assert_eq!(chart.camera, [1.0, 1.0, 2.0]);
    }

    #[test]
    fn area_has_single_filled_series() {
        let (table, schema) = yearly_table();
        let ChartDescription::Xy(chart) =
            ChartAssembler::assemble(ChartKind::Area, &table, &schema).unwrap()
        else {
            panic!("expected xy chart");
        };

        assert_eq!(chart.style, SeriesStyle::Area);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].name, "Temperature Anomaly");
        assert_eq!(chart.series[0].x, vec![2000.0, 2001.0, 2002.0]);
        assert_eq!(chart.axes.y, "Temperature Anomaly (C)");
    }

    #[test]
    fn overlay_legend_lists_every_month_once() {
        let (table, schema) = monthly_table();
        let ChartDescription::Xy(chart) =
            ChartAssembler::assemble(ChartKind::Overlay, &table, &schema).unwrap()
        else {
            panic!("expected xy chart");
        };

        let legend = chart.legend.expect("overlay has a legend");
        assert_eq!(legend, MONTH_COLUMNS.map(String::from).to_vec());
        assert_eq!(chart.series.len(), 12);
        assert_eq!(chart.line_width, 2.0);

        let palette = Palette::overlay();
        for (i, s) in chart.series.iter().enumerate() {
            assert_eq!(s.color, palette.color_for(i).unwrap());
        }
    }

    #[test]
    fn dashboard_places_months_row_major() {
        let (table, schema) = monthly_table();
        let ChartDescription::Dashboard(dashboard) =
            ChartAssembler::assemble(ChartKind::Dashboard, &table, &schema).unwrap()
        else {
            panic!("expected dashboard");
        };

        assert_eq!((dashboard.rows, dashboard.columns), (4, 3));
        assert_eq!(dashboard.panels.len(), 12);

        let june = dashboard.panel_at(1, 2).unwrap();
        assert_eq!(june.title, "Temperature Anomaly (Jun)");
        assert_eq!(june.series[0].color, Palette::dashboard().color_for(5).unwrap());

        let december = dashboard.panel_at(3, 2).unwrap();
        assert_eq!(december.series[0].name, "Dec");
        assert!(december.legend);
    }

    #[test]
    fn dashboard_too_small_fails_before_coloring() {
        let series = vec![
            Series {
                name: "Jan".to_string(),
                x: vec![2000.0],
                y: vec![0.1],
                color: Color32::GRAY,
            };
            7
        ];
        let err = ChartAssembler::dashboard(series, &Palette::new(Vec::new()), 2, 3).unwrap_err();
        assert!(matches!(err, ChartError::LayoutOverflow { panels: 7, .. }));
    }

    #[test]
    fn overlay_with_empty_palette_fails() {
        let series = vec![Series {
            name: "Jan".to_string(),
            x: vec![2000.0],
            y: vec![0.1],
            color: Color32::GRAY,
        }];
        let err = ChartAssembler::overlay(series, &Palette::new(Vec::new())).unwrap_err();
        assert!(matches!(err, ChartError::IndexOutOfRange { index: 0 }));
    }

    #[test]
    fn monthly_kinds_need_at_least_one_month() {
        let (table, schema) = monthly_table();
        let schema = ColumnSchema {
            month_columns: Vec::new(),
            ..schema
        };
        for kind in [ChartKind::Dashboard, ChartKind::Overlay] {
            let err = ChartAssembler::assemble(kind, &table, &schema).unwrap_err();
            assert!(matches!(err, ChartError::EmptyDataset));
        }
    }

    #[test]
    fn missing_value_column_aborts_assembly() {
        let (table, _) = yearly_table();
        let schema = ColumnSchema {
            value_column: "Foo".to_string(),
            ..ColumnSchema::default()
        };
        let err = ChartAssembler::assemble(ChartKind::Area, &table, &schema).unwrap_err();
        assert!(matches!(err, ChartError::MissingColumn { column } if column == "Foo"));
    }
}
