//! Export functionality for simulation data.
//!
//! Provides CSV time-series export of tissue signaling metrics.

mod csv_export;

pub use csv_export::{CsvExporter, TimeSeriesRecord};
