//! Stats module - summary statistics

mod calculator;

pub use calculator::{format_whole, StatsCalculator, StatsError, SummaryStats};
