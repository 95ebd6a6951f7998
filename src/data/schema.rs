//! Column Schema Module
//! Required column names, validated once when a table is loaded.

use crate::error::ChartError;
use serde::{Deserialize, Serialize};

pub const YEAR_COLUMN: &str = "Year";
pub const NO_SMOOTHING_COLUMN: &str = "No_Smoothing";
pub const MONTH_COLUMNS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Names of the columns the charts read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSchema {
    /// Shared x axis, one distinct value per observation.
    pub x_column: String,
    /// Single value column for the area and surface charts.
    pub value_column: String,
    /// Per-month value columns for the dashboard and overlay charts.
    pub month_columns: Vec<String>,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            x_column: YEAR_COLUMN.to_string(),
            value_column: NO_SMOOTHING_COLUMN.to_string(),
            month_columns: MONTH_COLUMNS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl ColumnSchema {
    /// Columns needed for single-value charts: x first, then the value column.
    pub fn value_columns(&self) -> Vec<String> {
        vec![self.x_column.clone(), self.value_column.clone()]
    }

    /// Columns needed for per-month charts: x first, then every month.
    pub fn monthly_columns(&self) -> Vec<String> {
        let mut cols = Vec::with_capacity(self.month_columns.len() + 1);
        cols.push(self.x_column.clone());
        cols.extend(self.month_columns.iter().cloned());
        cols
    }

    /// Check that every name in `required` is among `available`.
    ///
    /// Matching is exact and case-sensitive. The first absent name is reported.
    pub fn validate<S: AsRef<str>>(required: &[String], available: &[S]) -> Result<(), ChartError> {
        for name in required {
            if !available.iter().any(|a| a.as_ref() == name) {
                return Err(ChartError::missing_column(name.as_str()));
            }
        }
        Ok(())
    }
}
