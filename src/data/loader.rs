//! Data Loader Module
//! Loads CSV files with Polars, or spreadsheets with calamine, and cleans
//! them into a `ClimateTable`.

use crate::error::ChartError;
use calamine::{open_workbook_auto, Data, Range, Reader};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

/// A loaded table: only the required columns, all `Float64`, no missing values.
#[derive(Debug, Clone)]
pub struct ClimateTable {
    df: DataFrame,
    x_column: String,
}

impl ClimateTable {
    /// Validate, cast and clean a raw DataFrame.
    ///
    /// `required[0]` is the shared x column. Non-numeric cells become null and
    /// any row with a null or NaN in a required column is dropped.
    pub fn from_frame(df: DataFrame, required: &[String]) -> Result<Self, ChartError> {
        let x_column = required.first().cloned().ok_or(ChartError::EmptyDataset)?;

        let available = df.get_column_names();
        crate::data::ColumnSchema::validate(required, &available)?;

        let mut names: Vec<&str> = Vec::with_capacity(required.len());
        let mut columns: Vec<Column> = Vec::with_capacity(required.len());
        for name in required {
            if names.contains(&name.as_str()) {
                continue;
            }
            names.push(name.as_str());
            columns.push(df.column(name)?.cast(&DataType::Float64)?);
        }
        let selected = DataFrame::new(columns)?;
        let raw_rows = selected.height();

        let mut keep = vec![true; raw_rows];
        for column in selected.get_columns() {
            let values = column.f64()?;
            for (flag, value) in keep.iter_mut().zip(values.into_iter()) {
                if !matches!(value, Some(v) if !v.is_nan()) {
                    *flag = false;
                }
            }
        }
        let mask = BooleanChunked::from_slice("keep".into(), &keep);
        let cleaned = selected.filter(&mask)?;

        let dropped = raw_rows - cleaned.height();
        if dropped > 0 {
            warn!(dropped, "Dropped rows with missing values");
        }
        if cleaned.height() == 0 {
            return Err(ChartError::EmptyDataset);
        }

        debug!(rows = cleaned.height(), columns = cleaned.width(), "Table ready");
        Ok(Self {
            df: cleaned,
            x_column,
        })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn x_column(&self) -> &str {
        &self.x_column
    }

    /// Number of rows (observations) in the table.
    pub fn height(&self) -> usize {
        self.df.height()
    }
}

/// Extensions read as spreadsheets; anything else is read as CSV.
const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

fn spreadsheet_error<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Spreadsheet(e.to_string())
}

/// Handles CSV and spreadsheet loading.
pub struct DataLoader {
    skip_rows: usize,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DataLoader {
    /// `skip_rows` preamble lines are skipped before the header line.
    pub fn new(skip_rows: usize) -> Self {
        Self { skip_rows }
    }

    /// Whether `file_path` is read as a spreadsheet, by extension.
    pub fn is_spreadsheet(file_path: &Path) -> bool {
        file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                SPREADSHEET_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false)
    }

    /// Load `file_path` with the reader its extension calls for.
    pub fn load(&self, file_path: &Path, required: &[String]) -> Result<ClimateTable, ChartError> {
        if Self::is_spreadsheet(file_path) {
            self.load_xlsx(file_path, required)
        } else {
            self.load_csv(file_path, required)
        }
    }

    /// Load a CSV file and keep only the `required` columns (x column first).
    pub fn load_csv(&self, file_path: &Path, required: &[String]) -> Result<ClimateTable, ChartError> {
        info!(path = %file_path.display(), skip_rows = self.skip_rows, "Loading CSV");

        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_skip_rows(self.skip_rows)
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        info!(rows = df.height(), columns = df.width(), "CSV loaded");
        ClimateTable::from_frame(df, required)
    }

    /// Load the first sheet of a workbook; its first row (after skipped
    /// rows) holds the column names.
    pub fn load_xlsx(&self, file_path: &Path, required: &[String]) -> Result<ClimateTable, ChartError> {
        info!(path = %file_path.display(), skip_rows = self.skip_rows, "Loading spreadsheet");

        let mut workbook = open_workbook_auto(file_path).map_err(spreadsheet_error)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| spreadsheet_error("workbook has no sheets"))?
            .map_err(spreadsheet_error)?;

        let df = Self::sheet_to_frame(&range, self.skip_rows)?;
        info!(rows = df.height(), columns = df.width(), "Spreadsheet loaded");
        ClimateTable::from_frame(df, required)
    }

    /// One `Float64` column per named header cell. Text cells are parsed as
    /// numbers where possible; everything else becomes null.
    fn sheet_to_frame(range: &Range<Data>, skip_rows: usize) -> Result<DataFrame, ChartError> {
        let mut rows = range.rows().skip(skip_rows);
        let header = rows.next().ok_or(ChartError::EmptyDataset)?;
        let names: Vec<String> = header.iter().map(Self::header_name).collect();

        let mut values: Vec<Vec<Option<f64>>> = vec![Vec::new(); names.len()];
        for row in rows {
            for (i, column) in values.iter_mut().enumerate() {
                column.push(row.get(i).and_then(Self::cell_value));
            }
        }

        let mut seen: Vec<String> = Vec::with_capacity(names.len());
        let mut columns: Vec<Column> = Vec::with_capacity(names.len());
        for (name, data) in names.into_iter().zip(values) {
            if name.is_empty() || seen.contains(&name) {
                continue;
            }
            columns.push(Column::new(name.as_str().into(), data));
            seen.push(name);
        }
        Ok(DataFrame::new(columns)?)
    }

    fn header_name(cell: &Data) -> String {
        match cell {
            Data::String(s) => s.trim().to_string(),
            Data::Int(i) => i.to_string(),
            Data::Float(f) => f.to_string(),
            _ => String::new(),
        }
    }

    fn cell_value(cell: &Data) -> Option<f64> {
        match cell {
            Data::Float(f) => Some(*f),
            Data::Int(i) => Some(*i as f64),
            Data::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}
