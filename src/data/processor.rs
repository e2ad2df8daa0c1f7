//! Data Processor Module
//! Derives the read-only views the dashboard draws from the base dataset.

use crate::data::metric::Metric;
use polars::prelude::*;
use thiserror::Error;

/// Number of rows in the ranking view.
pub const TOP_N: usize = 10;

/// Countries shown in the historical trends chart.
pub const TREND_COUNTRIES: [&str; 6] = [
    "China",
    "United States",
    "India",
    "Germany",
    "Brazil",
    "Japan",
];

/// Distance between two year slider stops.
pub const YEAR_STEP: i32 = 5;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Bounds of the year slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

impl YearRange {
    /// Range spanning `years`, or `None` when there are none.
    pub fn from_years(years: &[i32]) -> Option<Self> {
        let min = years.iter().copied().min()?;
        let max = years.iter().copied().max()?;
        Some(Self {
            min,
            max,
            step: YEAR_STEP,
        })
    }

    /// The year the dashboard opens on.
    pub fn default_year(&self) -> i32 {
        self.max
    }

    /// Clamp into `[min, max]` and snap to the nearest slider stop.
    pub fn clamp(&self, year: i32) -> i32 {
        let year = year.clamp(self.min, self.max);
        if self.step <= 0 {
            return year;
        }
        let steps = ((year - self.min) as f64 / self.step as f64).round() as i32;
        (self.min + steps * self.step).min(self.max)
    }

    /// Every value the slider can take.
    pub fn stops(&self) -> Vec<i32> {
        let step = self.step.max(1) as usize;
        (self.min..=self.max).step_by(step).collect()
    }
}

/// Filters and rankings over the base dataset. All views are new frames;
/// the input is never modified.
pub struct DataProcessor;

impl DataProcessor {
    /// Rows whose year equals `year`, in base order.
    pub fn filter_by_year(df: &DataFrame, year: i32) -> Result<DataFrame, ProcessorError> {
        let filtered = df
            .clone()
            .lazy()
            .filter(col("year").eq(lit(year)))
            .collect()?;
        Ok(filtered)
    }

    /// The `n` rows with the largest `metric`, descending. Ties keep their
    /// underlying row order.
    pub fn top_n(df: &DataFrame, metric: Metric, n: usize) -> Result<DataFrame, ProcessorError> {
        let top = df
            .clone()
            .lazy()
            .sort(
                [metric.column()],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_nulls_last(true)
                    .with_maintain_order(true),
            )
            .limit(n as IdxSize)
            .collect()?;
        Ok(top)
    }

    /// Rows for the fixed trend countries across every year, in base order.
    pub fn trend_subset(df: &DataFrame) -> Result<DataFrame, ProcessorError> {
        Self::countries_subset(df, &TREND_COUNTRIES)
    }

    pub fn countries_subset(df: &DataFrame, countries: &[&str]) -> Result<DataFrame, ProcessorError> {
        let wanted = Series::new("countries".into(), countries);
        let subset = df
            .clone()
            .lazy()
            .filter(col("country").is_in(lit(wanted)))
            .collect()?;
        Ok(subset)
    }

    /// String column values of a view, in row order.
    pub fn str_values(df: &DataFrame, column: &str) -> Result<Vec<String>, ProcessorError> {
        let values = df
            .column(column)?
            .str()?
            .into_iter()
            .map(|v| v.unwrap_or_default().to_string())
            .collect();
        Ok(values)
    }

    /// Numeric column values of a view as `f64`, in row order.
    pub fn f64_values(df: &DataFrame, column: &str) -> Result<Vec<f64>, ProcessorError> {
        let cast = df.column(column)?.cast(&DataType::Float64)?;
        let values = cast
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect();
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::fixture_dataset;
    use crate::data::{DataLoader, DataSource};
    use std::collections::HashSet;

    fn year_range() -> YearRange {
        YearRange {
            min: 1952,
            max: 2007,
            step: 5,
        }
    }

    #[test]
    fn test_clamp_within_range_snaps_to_stop() {
        let range = year_range();
        assert_eq!(range.clamp(1952), 1952);
        assert_eq!(range.clamp(1970), 1972);
        assert_eq!(range.clamp(1969), 1967);
        assert_eq!(range.clamp(2007), 2007);
    }

    #[test]
    fn test_clamp_out_of_range() {
        let range = year_range();
        assert_eq!(range.clamp(1800), 1952);
        assert_eq!(range.clamp(2050), 2007);
        assert_eq!(range.clamp(i32::MIN), 1952);
        assert_eq!(range.clamp(i32::MAX), 2007);
    }

    #[test]
    fn test_stops_and_default() {
        let range = year_range();
        let stops = range.stops();
        assert_eq!(stops.len(), 12);
        assert_eq!(stops.first(), Some(&1952));
        assert_eq!(stops.last(), Some(&2007));
        assert_eq!(range.default_year(), 2007);
    }

    #[test]
    fn test_from_years_empty() {
        assert_eq!(YearRange::from_years(&[]), None);
    }

    #[test]
    fn test_filter_by_year_only_matching_rows() {
        let ds = fixture_dataset();
        let subset = DataProcessor::filter_by_year(ds.frame(), 1952).unwrap();
        assert_eq!(subset.height(), 4);
        let years = subset.column("year").unwrap().i32().unwrap();
        assert!(years.into_iter().all(|y| y == Some(1952)));
        assert_eq!(
            DataProcessor::str_values(&subset, "country").unwrap(),
            vec!["Alpha", "Beta", "Gamma", "Delta"]
        );
    }

    #[test]
    fn test_filter_by_missing_year_is_empty() {
        let ds = fixture_dataset();
        let subset = DataProcessor::filter_by_year(ds.frame(), 1962).unwrap();
        assert_eq!(subset.height(), 0);
    }

    #[test]
    fn test_year_partitions_reconstruct_dataset() {
        let ds = DataLoader::load(&DataSource::Embedded).unwrap();
        let mut seen: HashSet<(String, i32)> = HashSet::new();
        let mut total = 0;
        for &year in ds.years() {
            let subset = DataProcessor::filter_by_year(ds.frame(), year).unwrap();
            total += subset.height();
            for country in DataProcessor::str_values(&subset, "country").unwrap() {
                assert!(seen.insert((country, year)), "row seen twice");
            }
        }
        assert_eq!(total, ds.row_count());
        assert_eq!(seen.len(), ds.row_count());
    }

    #[test]
    fn test_top_n_sorted_descending_and_bounded() {
        let ds = fixture_dataset();
        let subset = DataProcessor::filter_by_year(ds.frame(), 1952).unwrap();
        let top = DataProcessor::top_n(&subset, Metric::Pop, 2).unwrap();
        assert_eq!(top.height(), 2);
        assert_eq!(
            DataProcessor::str_values(&top, "country").unwrap(),
            vec!["Gamma", "Alpha"]
        );

        let all = DataProcessor::top_n(&subset, Metric::Pop, TOP_N).unwrap();
        assert_eq!(all.height(), 4);
    }

    #[test]
    fn test_top_n_ties_keep_row_order() {
        let ds = fixture_dataset();
        let subset = DataProcessor::filter_by_year(ds.frame(), 1952).unwrap();
        let top = DataProcessor::top_n(&subset, Metric::LifeExp, 3).unwrap();
        assert_eq!(
            DataProcessor::str_values(&top, "country").unwrap(),
            vec!["Beta", "Delta", "Alpha"]
        );
    }

    #[test]
    fn test_top_10_every_year_of_embedded_dataset() {
        let ds = DataLoader::load(&DataSource::Embedded).unwrap();
        for &year in ds.years() {
            let subset = DataProcessor::filter_by_year(ds.frame(), year).unwrap();
            for metric in Metric::ALL {
                let top = DataProcessor::top_n(&subset, metric, TOP_N).unwrap();
                assert!(top.height() <= TOP_N);
                let values = DataProcessor::f64_values(&top, metric.column()).unwrap();
                assert!(values.windows(2).all(|w| w[0] >= w[1]));

                let years = DataProcessor::f64_values(&top, "year").unwrap();
                assert!(years.iter().all(|y| *y as i32 == year));
            }
        }
    }

    #[test]
    fn test_trend_subset_only_fixed_countries_all_years() {
        let ds = DataLoader::load(&DataSource::Embedded).unwrap();
        let trend = DataProcessor::trend_subset(ds.frame()).unwrap();
        let countries = DataProcessor::str_values(&trend, "country").unwrap();
        assert!(countries.iter().all(|c| TREND_COUNTRIES.contains(&c.as_str())));

        for country in TREND_COUNTRIES {
            let years: Vec<i32> = countries
                .iter()
                .zip(DataProcessor::f64_values(&trend, "year").unwrap())
                .filter(|(c, _)| c.as_str() == country)
                .map(|(_, y)| y as i32)
                .collect();
            assert_eq!(years, ds.years(), "{country} is missing years");
        }
    }

    #[test]
    fn test_countries_subset_unknown_country_is_empty() {
        let ds = fixture_dataset();
        let subset = DataProcessor::countries_subset(ds.frame(), &["Nowhere"]).unwrap();
        assert_eq!(subset.height(), 0);
    }

    #[test]
    fn test_views_do_not_modify_base() {
        let ds = fixture_dataset();
        let before = ds.frame().clone();
        let _ = DataProcessor::filter_by_year(ds.frame(), 1957).unwrap();
        let _ = DataProcessor::top_n(ds.frame(), Metric::GdpPercap, 1).unwrap();
        assert!(ds.frame().equals(&before));
    }
}
