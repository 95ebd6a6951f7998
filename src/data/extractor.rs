//! Series Extractor Module
//! Pulls aligned (x, y) sequences out of a `ClimateTable`.

use crate::data::ClimateTable;
use crate::error::ChartError;
use egui::Color32;
use polars::prelude::*;

/// A named pair of aligned x/y sequences plus its assigned color.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Color32,
}

impl Series {
    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = color;
        self
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Points in the `[x, y]` form the plotting layer consumes.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.x.iter().zip(self.y.iter()).map(|(&x, &y)| [x, y]).collect()
    }
}

/// Extracts series from a table, all sharing the table's x column.
pub struct SeriesExtractor;

impl SeriesExtractor {
    fn float_column(table: &ClimateTable, name: &str) -> Result<Column, ChartError> {
        let column = table
            .frame()
            .column(name)
            .map_err(|_| ChartError::missing_column(name))?;
        Ok(column.cast(&DataType::Float64)?)
    }

    /// One series for `column`, aligned row-for-row with the x column.
    ///
    /// Rows where either side is null are skipped together.
    pub fn extract(table: &ClimateTable, column: &str) -> Result<Series, ChartError> {
        let x_col = Self::float_column(table, table.x_column())?;
        let y_col = Self::float_column(table, column)?;
        let x_ca = x_col.f64()?;
        let y_ca = y_col.f64()?;

        let (x, y): (Vec<f64>, Vec<f64>) = x_ca
            .into_iter()
            .zip(y_ca.into_iter())
            .filter_map(|pair| match pair {
                (Some(x), Some(y)) => Some((x, y)),
                _ => None,
            })
            .unzip();

        Ok(Series {
            name: column.to_string(),
            x,
            y,
            color: Color32::GRAY,
        })
    }

    /// One series per name, in the order requested.
    pub fn extract_many(table: &ClimateTable, columns: &[String]) -> Result<Vec<Series>, ChartError> {
        columns
            .iter()
            .map(|column| Self::extract(table, column))
            .collect()
    }

    /// Number of distinct values in the x column.
    pub fn distinct_x_count(table: &ClimateTable) -> Result<usize, ChartError> {
        let x_col = Self::float_column(table, table.x_column())?;
        Ok(x_col.as_materialized_series().n_unique()?)
    }
}
