//! Selectable metrics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three numeric columns the dashboard can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    LifeExp,
    GdpPercap,
    Pop,
}

impl Metric {
    /// Selector order. The first entry is the initial selection.
    pub const ALL: [Metric; 3] = [Metric::LifeExp, Metric::GdpPercap, Metric::Pop];

    /// Label shown in the selector and chart titles.
    pub fn label(self) -> &'static str {
        match self {
            Metric::LifeExp => "Life Expectancy (years)",
            Metric::GdpPercap => "GDP per Capita (USD)",
            Metric::Pop => "Population",
        }
    }

    /// Dataset column holding this metric.
    pub fn column(self) -> &'static str {
        match self {
            Metric::LifeExp => "lifeExp",
            Metric::GdpPercap => "gdpPercap",
            Metric::Pop => "pop",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_in_selector() {
        assert_eq!(Metric::default(), Metric::ALL[0]);
        assert_eq!(Metric::default().label(), "Life Expectancy (years)");
    }

    #[test]
    fn test_columns_match_dataset_schema() {
        let cols: Vec<&str> = Metric::ALL.iter().map(|m| m.column()).collect();
        assert_eq!(cols, vec!["lifeExp", "gdpPercap", "pop"]);
    }
}
