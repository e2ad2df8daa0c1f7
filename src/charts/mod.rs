//! Charts module - chart series and rendering

mod geo;
mod palette;
mod plotter;
mod series;

pub use palette::ContinentPalette;
pub use plotter::ChartPlotter;
pub use series::{BarSeries, MapSeries, ScatterSeries, TrendSeries};
