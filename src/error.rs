//! Error Module
//! Failure kinds shared by loading, extraction, layout and assembly.

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Missing column: {column}")]
    MissingColumn { column: String },
    #[error("No usable rows in dataset")]
    EmptyDataset,
    #[error("Dashboard of {rows}x{columns} cannot hold {panels} panels")]
    LayoutOverflow {
        panels: usize,
        rows: usize,
        columns: usize,
    },
    #[error("Palette has no color for index {index}")]
    IndexOutOfRange { index: usize },
    #[error("Grid row {row} has {found} values, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Failed to load data: {0}")]
    Polars(#[from] PolarsError),
    #[error("Failed to read spreadsheet: {0}")]
    Spreadsheet(String),
    #[error("Invalid config: {0}")]
    Config(String),
    #[error("Failed to render chart: {0}")]
    Render(String),
}

impl ChartError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        ChartError::MissingColumn {
            column: column.into(),
        }
    }
}
