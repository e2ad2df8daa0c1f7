//! Configuration: command line / environment options and the widget state
//! persisted between sessions.

use crate::data::{DataSource, Metric, YearRange};
use clap::{Parser, ValueHint};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Storage key for the persisted widget state.
pub const SETTINGS_KEY: &str = "dashboard_settings";

/// Every option is optional: with none given the dashboard opens on the
/// bundled dataset.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about = "Global Economic Indicators Dashboard", long_about = None)]
pub struct AppConfig {
    /// CSV with the Gapminder columns to use instead of the bundled dataset
    #[arg(long, env = "GAPMINDER_DATA", value_hint = ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Ignore the metric and year remembered from the last session
    #[arg(long)]
    pub reset: bool,
}

impl AppConfig {
    pub fn data_source(&self) -> DataSource {
        DataSource::from_path(self.data.clone())
    }
}

/// Widget values remembered across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub metric: Metric,
    pub year: Option<i32>,
}

impl DashboardSettings {
    /// Turn stored values into a valid selection for `range`.
    pub fn resolve(&self, range: YearRange) -> Selection {
        Selection {
            metric: self.metric,
            year: self
                .year
                .map(|y| range.clamp(y))
                .unwrap_or_else(|| range.default_year()),
        }
    }
}

/// The metric and year the page is currently drawn for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub metric: Metric,
    pub year: i32,
}

impl From<Selection> for DashboardSettings {
    fn from(selection: Selection) -> Self {
        Self {
            metric: selection.metric,
            year: Some(selection.year),
        }
    }
}
