//! Data module - dataset loading and derived views

mod loader;
mod metric;
mod processor;

#[cfg(test)]
pub mod fixtures;

pub use loader::{DataLoader, DataSource, Dataset, LoaderError};
pub use metric::Metric;
pub use processor::{DataProcessor, ProcessorError, YearRange, TOP_N, TREND_COUNTRIES};
