//! Layout Module
//! Row-major placement of dashboard panels.

use crate::error::ChartError;

/// Grid cell a panel is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
}

pub struct LayoutPlanner;

impl LayoutPlanner {
    /// Rows needed to hold `panels` panels at `columns` per row.
    pub fn rows_required(panels: usize, columns: usize) -> usize {
        if columns == 0 {
            return 0;
        }
        panels.div_ceil(columns)
    }

    /// Place `panels` panels on a `rows` x `columns` dashboard, reading order.
    pub fn plan(panels: usize, rows: usize, columns: usize) -> Result<Vec<Placement>, ChartError> {
        let overflow = ChartError::LayoutOverflow {
            panels,
            rows,
            columns,
        };
        if panels == 0 {
            return Ok(Vec::new());
        }
        if columns == 0 || rows < Self::rows_required(panels, columns) {
            return Err(overflow);
        }

        Ok((0..panels)
            .map(|i| Placement {
                row: i / columns,
                column: i % columns,
            })
            .collect())
    }
}
