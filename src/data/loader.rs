//! Dataset Loader Module
//! Loads the Gapminder table with Polars, normalises its schema and keeps a
//! single immutable copy for the lifetime of the process.

use crate::data::metric::Metric;
use crate::data::processor::YearRange;
use once_cell::sync::OnceCell;
use polars::prelude::*;
use std::collections::HashSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Bundled Gapminder table: 142 countries every five years from 1952 to 2007.
const EMBEDDED_CSV: &[u8] = include_bytes!("../../data/gapminder.csv");

/// Columns every dataset must provide, in normalised order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "country",
    "continent",
    "year",
    "lifeExp",
    "pop",
    "gdpPercap",
    "iso_alpha",
];

static BASE_DATASET: OnceCell<Dataset> = OnceCell::new();

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
    #[error("No data loaded")]
    NoData,
    #[error("Null value in column '{column}' at row {row}")]
    NullValue { column: String, row: usize },
    #[error("Duplicate row for {country} in {year}")]
    DuplicateRow { country: String, year: i32 },
    #[error("Negative {column} for {country} in {year}: {value}")]
    NegativeValue {
        column: String,
        country: String,
        year: i32,
        value: f64,
    },
    #[error("Invalid {column} for {country} in {year}: not a number")]
    InvalidValue {
        column: String,
        country: String,
        year: i32,
    },
}

/// Where the base dataset comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// The CSV compiled into the binary.
    #[default]
    Embedded,
    /// A CSV on disk with the same header.
    File(PathBuf),
}

impl DataSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map(DataSource::File).unwrap_or_default()
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Embedded => "bundled Gapminder dataset".to_string(),
            DataSource::File(path) => path.display().to_string(),
        }
    }
}

/// The immutable base dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    df: DataFrame,
    years: Vec<i32>,
    continents: Vec<String>,
    year_range: YearRange,
}

impl Dataset {
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Distinct years, ascending.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Continents in order of first appearance.
    pub fn continents(&self) -> &[String] {
        &self.continents
    }

    pub fn year_range(&self) -> YearRange {
        self.year_range
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }
}

/// Loads and validates Gapminder-shaped CSV data.
pub struct DataLoader;

impl DataLoader {
    /// Return the process-wide base dataset, loading it on first access.
    ///
    /// The first successful call fixes the dataset; `source` is ignored on
    /// every later call. A failed load is not cached.
    pub fn base_dataset(source: &DataSource) -> Result<&'static Dataset, LoaderError> {
        BASE_DATASET.get_or_try_init(|| Self::load(source))
    }

    /// Load, normalise and validate a dataset without memoizing it.
    pub fn load(source: &DataSource) -> Result<Dataset, LoaderError> {
        let raw = match source {
            DataSource::Embedded => Self::read_embedded()?,
            DataSource::File(path) => Self::read_csv_file(path)?,
        };
        let dataset = Self::from_frame(raw)?;

        info!(
            source = %source.describe(),
            rows = dataset.row_count(),
            years = dataset.years().len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    fn read_embedded() -> Result<DataFrame, LoaderError> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .into_reader_with_file_handle(Cursor::new(EMBEDDED_CSV))
            .finish()?;
        Ok(df)
    }

    fn read_csv_file(path: &Path) -> Result<DataFrame, LoaderError> {
        debug!(path = %path.display(), "reading dataset file");
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;
        Ok(df)
    }

    /// Normalise a raw frame to the dashboard schema and check its invariants.
    pub fn from_frame(raw: DataFrame) -> Result<Dataset, LoaderError> {
        let present: HashSet<String> = raw
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !present.contains(**c)) {
            return Err(LoaderError::MissingColumn(missing.to_string()));
        }
        if raw.height() == 0 {
            return Err(LoaderError::NoData);
        }

        let df = raw
            .lazy()
            .select([
                col("country").strict_cast(DataType::String),
                col("continent").strict_cast(DataType::String),
                col("year").strict_cast(DataType::Int32),
                col("lifeExp").strict_cast(DataType::Float64),
                col("pop").strict_cast(DataType::Float64),
                col("gdpPercap").strict_cast(DataType::Float64),
                col("iso_alpha").strict_cast(DataType::String),
            ])
            .collect()?;

        for name in REQUIRED_COLUMNS {
            let column = df.column(name)?;
            if column.null_count() > 0 {
                let row = (0..column.len())
                    .find(|&i| column.get(i).map(|v| v.is_null()).unwrap_or(false))
                    .unwrap_or(0);
                return Err(LoaderError::NullValue {
                    column: name.to_string(),
                    row,
                });
            }
        }

        let countries = df.column("country")?.str()?;
        let continents_ca = df.column("continent")?.str()?;
        let years_ca = df.column("year")?.i32()?;

        let mut seen: HashSet<(String, i32)> = HashSet::with_capacity(df.height());
        let mut years: Vec<i32> = Vec::new();
        let mut continents: Vec<String> = Vec::new();

        for i in 0..df.height() {
            let (Some(country), Some(continent), Some(year)) =
                (countries.get(i), continents_ca.get(i), years_ca.get(i))
            else {
                continue;
            };
            if !seen.insert((country.to_string(), year)) {
                return Err(LoaderError::DuplicateRow {
                    country: country.to_string(),
                    year,
                });
            }
            years.push(year);
            if !continents.iter().any(|c| c == continent) {
                continents.push(continent.to_string());
            }
        }

        for metric in Metric::ALL {
            let values = df.column(metric.column())?.f64()?;
            for (i, value) in values.into_iter().enumerate() {
                let Some(v) = value.filter(|v| v.is_nan() || *v < 0.0) else {
                    continue;
                };
                let column = metric.column().to_string();
                let country = countries.get(i).unwrap_or_default().to_string();
                let year = years_ca.get(i).unwrap_or_default();
                if v.is_nan() {
                    return Err(LoaderError::InvalidValue {
                        column,
                        country,
                        year,
                    });
                }
                return Err(LoaderError::NegativeValue {
                    column,
                    country,
                    year,
                    value: v,
                });
            }
        }

        years.sort_unstable();
        years.dedup();
        let year_range = YearRange::from_years(&years).ok_or(LoaderError::NoData)?;

        Ok(Dataset {
            df,
            years,
            continents,
            year_range,
        })
    }
}
