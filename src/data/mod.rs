//! Data module - CSV loading, schema validation and series extraction

mod extractor;
mod loader;
mod schema;

pub use extractor::{Series, SeriesExtractor};
pub use loader::{ClimateTable, DataLoader};
pub use schema::{ColumnSchema, MONTH_COLUMNS, NO_SMOOTHING_COLUMN, YEAR_COLUMN};
