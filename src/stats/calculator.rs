//! Statistics Calculator Module
//! Summary figures for the year-filtered subset.

use crate::data::{DataProcessor, Metric, ProcessorError};
use polars::prelude::*;
use statrs::statistics::Statistics;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("No rows to summarize")]
    EmptySubset,
    #[error(transparent)]
    Processor(#[from] ProcessorError),
}

/// An extreme value and the first country reaching it.
#[derive(Debug, Clone, PartialEq)]
pub struct Extreme {
    pub value: f64,
    pub country: String,
}

/// The four summary panels.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub highest: Extreme,
    pub lowest: Extreme,
    pub mean: f64,
}

/// Format a value with zero decimal places.
pub fn format_whole(value: f64) -> String {
    format!("{:.0}", value)
}

pub struct StatsCalculator;

impl StatsCalculator {
    /// Summarize `metric` over an already year-filtered frame.
    pub fn summarize(df: &DataFrame, metric: Metric) -> Result<SummaryStats, StatsError> {
        let values = DataProcessor::f64_values(df, metric.column())?;
        let countries = DataProcessor::str_values(df, "country")?;
        Self::summarize_values(&values, &countries)
    }

    pub fn summarize_values(values: &[f64], countries: &[String]) -> Result<SummaryStats, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptySubset);
        }

        let max = Statistics::max(values);
        let min = Statistics::min(values);
        let mean = Statistics::mean(values);

        Ok(SummaryStats {
            count: values.len(),
            highest: Extreme {
                value: max,
                country: Self::first_country_at(values, countries, max),
            },
            lowest: Extreme {
                value: min,
                country: Self::first_country_at(values, countries, min),
            },
            mean,
        })
    }

    fn first_country_at(values: &[f64], countries: &[String], target: f64) -> String {
        values
            .iter()
            .position(|v| *v == target)
            .and_then(|i| countries.get(i))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::fixture_dataset;
    use crate::data::{DataLoader, DataSource};

    #[test]
    fn test_summary_over_fixture_year() {
        let ds = fixture_dataset();
        let subset = DataProcessor::filter_by_year(ds.frame(), 1952).unwrap();
        let summary = StatsCalculator::summarize(&subset, Metric::Pop).unwrap();

        assert_eq!(summary.count, 4);
        assert_eq!(summary.highest.value, 5000.0);
        assert_eq!(summary.highest.country, "Gamma");
        assert_eq!(summary.lowest.value, 300.0);
        assert_eq!(summary.lowest.country, "Beta");
        assert!((summary.mean - 1750.0).abs() < 1e-9);
    }

    #[test]
    fn test_ties_pick_first_country() {
        let ds = fixture_dataset();
        let subset = DataProcessor::filter_by_year(ds.frame(), 1952).unwrap();
        let summary = StatsCalculator::summarize(&subset, Metric::LifeExp).unwrap();
        assert_eq!(summary.highest.value, 60.0);
        assert_eq!(summary.highest.country, "Beta");
    }

    #[test]
    fn test_empty_subset_is_error() {
        let ds = fixture_dataset();
        let subset = DataProcessor::filter_by_year(ds.frame(), 1900).unwrap();
        assert!(matches!(
            StatsCalculator::summarize(&subset, Metric::GdpPercap),
            Err(StatsError::EmptySubset)
        ));
    }

    #[test]
    fn test_summary_matches_column_extremes_every_year() {
        let ds = DataLoader::load(&DataSource::Embedded).unwrap();
        for &year in ds.years() {
            let subset = DataProcessor::filter_by_year(ds.frame(), year).unwrap();
            for metric in Metric::ALL {
                let summary = StatsCalculator::summarize(&subset, metric).unwrap();
                let values = DataProcessor::f64_values(&subset, metric.column()).unwrap();

                let max = values.iter().copied().fold(f64::MIN, f64::max);
                let min = values.iter().copied().fold(f64::MAX, f64::min);
                let mean = values.iter().sum::<f64>() / values.len() as f64;

                assert_eq!(summary.count, subset.height());
                assert_eq!(summary.highest.value, max);
                assert_eq!(summary.lowest.value, min);
                assert!((summary.mean - mean).abs() <= mean.abs() * 1e-9);
            }
        }
    }

    #[test]
    fn test_population_2007_led_by_china() {
        let ds = DataLoader::load(&DataSource::Embedded).unwrap();
        let subset = DataProcessor::filter_by_year(ds.frame(), 2007).unwrap();
        let summary = StatsCalculator::summarize(&subset, Metric::Pop).unwrap();
        assert_eq!(summary.highest.country, "China");
        assert_eq!(format_whole(summary.highest.value), "1318683096");
    }

    fn embedded_summary(year: i32, metric: Metric) -> SummaryStats {
        let ds = DataLoader::base_dataset(&DataSource::Embedded).unwrap();
        let subset = DataProcessor::filter_by_year(ds.frame(), year).unwrap();
        StatsCalculator::summarize(&subset, metric).unwrap()
    }

    #[test]
    fn test_rwanda_1992_lowest_life_expectancy() {
        let summary = embedded_summary(1992, Metric::LifeExp);
        assert_eq!(summary.lowest.country, "Rwanda");
        assert_eq!(summary.lowest.value, 23.599);
        assert_eq!(summary.highest.country, "Japan");
    }

    #[test]
    fn test_cambodia_1977_lowest_life_expectancy() {
        let summary = embedded_summary(1977, Metric::LifeExp);
        assert_eq!(summary.lowest.country, "Cambodia");
        assert_eq!(summary.lowest.value, 31.22);
    }

    #[test]
    fn test_kuwait_1957_highest_gdp_per_capita() {
        let summary = embedded_summary(1957, Metric::GdpPercap);
        assert_eq!(summary.highest.country, "Kuwait");
        assert_eq!(summary.highest.value, 113523.1329);
        assert_eq!(format_whole(summary.highest.value), "113523");
    }

    #[test]
    fn test_kuwait_gdp_falls_after_1957() {
        // Falls from 1957 to 1967, then recovers by 1972.
        let ds = DataLoader::base_dataset(&DataSource::Embedded).unwrap();
        let kuwait = DataProcessor::countries_subset(ds.frame(), &["Kuwait"]).unwrap();
        let gdp = DataProcessor::f64_values(&kuwait, "gdpPercap").unwrap();
        assert_eq!(gdp.len(), 12);
        assert!(gdp[1] > gdp[0]);
        assert!(gdp[3] < gdp[2]);
        assert!(gdp[4] > gdp[3]);
    }

    #[test]
    fn test_earliest_year_summarizes() {
        let ds = DataLoader::load(&DataSource::Embedded).unwrap();
        let year = ds.year_range().clamp(1900);
        assert_eq!(year, 1952);
        let subset = DataProcessor::filter_by_year(ds.frame(), year).unwrap();
        assert!(StatsCalculator::summarize(&subset, Metric::LifeExp).is_ok());
    }

    #[test]
    fn test_format_whole() {
        assert_eq!(format_whole(76.4234), "76");
        assert_eq!(format_whole(49357.19), "49357");
        assert_eq!(format_whole(0.0), "0");
    }
}
