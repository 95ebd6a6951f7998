//! Grid Module
//! Builds the 2-D value grid consumed by the surface chart.

use crate::error::ChartError;
use tracing::debug;

/// Rectangular grid of values plus the value range used for color mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<f64>>,
    pub min_value: f64,
    pub max_value: f64,
}

impl Grid {
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }
}

pub struct GridBuilder;

impl GridBuilder {
    /// Replicate `values` into `repeat` identical rows.
    ///
    /// The rows are copies, not independent measurements; the surface treats
    /// each as its own slice.
    pub fn replicate(values: &[f64], repeat: usize) -> Result<Grid, ChartError> {
        if values.is_empty() || repeat == 0 {
            return Err(ChartError::EmptyDataset);
        }

        let (min_value, max_value) = Self::value_range(values.iter().copied())?;
        debug!(rows = repeat, columns = values.len(), min_value, max_value, "Replicated grid");

        Ok(Grid {
            rows: vec![values.to_vec(); repeat],
            min_value,
            max_value,
        })
    }

    /// Use a caller-supplied 2-D field as-is.
    pub fn from_field(rows: Vec<Vec<f64>>) -> Result<Grid, ChartError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(ChartError::EmptyDataset);
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != expected)
        {
            return Err(ChartError::RaggedGrid {
                row,
                expected,
                found,
            });
        }

        let (min_value, max_value) = Self::value_range(rows.iter().flatten().copied())?;
        Ok(Grid {
            rows,
            min_value,
            max_value,
        })
    }

    /// Min and max ignoring NaN; all-NaN input has no usable values.
    fn value_range(values: impl Iterator<Item = f64>) -> Result<(f64, f64), ChartError> {
        let (min, max) = values
            .filter(|v| !v.is_nan())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if min > max {
            return Err(ChartError::EmptyDataset);
        }
        Ok((min, max))
    }
}
