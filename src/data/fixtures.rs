//! Small in-memory datasets shared by unit tests.

use crate::data::loader::{DataLoader, Dataset, LoaderError};
use polars::prelude::*;
use std::io::Cursor;

/// Two years, four countries. Beta and Delta tie on 1952 life expectancy,
/// Beta appearing first.
pub const FIXTURE_CSV: &str = "\
country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num
Alpha,Asia,1952,40.0,1000,500.0,AAA,1
Alpha,Asia,1957,45.0,1100,550.0,AAA,1
Beta,Europe,1952,60.0,300,2000.0,BBB,2
Beta,Europe,1957,62.0,320,2100.0,BBB,2
Gamma,Africa,1952,35.0,5000,300.0,CCC,3
Gamma,Africa,1957,38.0,5200,320.0,CCC,3
Delta,Europe,1952,60.0,700,1500.0,DDD,4
";

pub fn dataset_from_csv(csv: &str) -> Result<Dataset, LoaderError> {
    let raw = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(csv.as_bytes().to_vec()))
        .finish()?;
    DataLoader::from_frame(raw)
}

pub fn fixture_dataset() -> Dataset {
    dataset_from_csv(FIXTURE_CSV).expect("fixture dataset")
}
