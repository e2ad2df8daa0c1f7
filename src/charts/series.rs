//! Plot-ready series built from the derived frames.
//!
//! Each chart gets its own plain Rust structure so the drawing code never
//! touches Polars and the shaping logic can be tested without a UI.

use crate::charts::geo;
use crate::data::{DataProcessor, Metric, ProcessorError};
use polars::prelude::*;

/// Largest scatter marker diameter, in points.
pub const SIZE_MAX: f32 = 60.0;

/// Smallest scatter marker radius, so tiny populations stay visible.
const MIN_RADIUS: f32 = 1.5;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub country: String,
    pub x: f64,
    pub y: f64,
    pub pop: f64,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGroup {
    pub continent: String,
    pub points: Vec<ScatterPoint>,
}

/// GDP per capita against the selected metric, one group per continent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScatterSeries {
    pub groups: Vec<ScatterGroup>,
}

impl ScatterSeries {
    pub fn from_frame(df: &DataFrame, metric: Metric) -> Result<Self, ProcessorError> {
        let countries = DataProcessor::str_values(df, "country")?;
        let continents = DataProcessor::str_values(df, "continent")?;
        let gdp = DataProcessor::f64_values(df, "gdpPercap")?;
        let values = DataProcessor::f64_values(df, metric.column())?;
        let pops = DataProcessor::f64_values(df, "pop")?;

        let max_pop = pops.iter().copied().fold(0.0_f64, f64::max);
        let mut groups: Vec<ScatterGroup> = Vec::new();

        for i in 0..countries.len() {
            let radius = if max_pop > 0.0 {
                (SIZE_MAX / 2.0 * (pops[i] / max_pop).sqrt() as f32).max(MIN_RADIUS)
            } else {
                MIN_RADIUS
            };
            let point = ScatterPoint {
                country: countries[i].clone(),
                x: gdp[i],
                y: values[i],
                pop: pops[i],
                radius,
            };

            match groups.iter_mut().find(|g| g.continent == continents[i]) {
                Some(group) => group.points.push(point),
                None => groups.push(ScatterGroup {
                    continent: continents[i].clone(),
                    points: vec![point],
                }),
            }
        }

        Ok(Self { groups })
    }

    pub fn group(&self, continent: &str) -> Option<&ScatterGroup> {
        self.groups.iter().find(|g| g.continent == continent)
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendLine {
    pub country: String,
    /// `[year, value]`, ascending by year.
    pub points: Vec<[f64; 2]>,
}

/// One line per trend country across all years.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendSeries {
    pub lines: Vec<TrendLine>,
}

impl TrendSeries {
    pub fn from_frame(df: &DataFrame, metric: Metric) -> Result<Self, ProcessorError> {
        let countries = DataProcessor::str_values(df, "country")?;
        let years = DataProcessor::f64_values(df, "year")?;
        let values = DataProcessor::f64_values(df, metric.column())?;

        let mut lines: Vec<TrendLine> = Vec::new();
        for ((country, year), value) in countries.into_iter().zip(years).zip(values) {
            match lines.iter_mut().find(|l| l.country == country) {
                Some(line) => line.points.push([year, value]),
                None => lines.push(TrendLine {
                    country,
                    points: vec![[year, value]],
                }),
            }
        }
        for line in &mut lines {
            line.points.sort_by(|a, b| a[0].total_cmp(&b[0]));
        }

        Ok(Self { lines })
    }

    /// Largest value on any line, used to place the selected-year label.
    pub fn max_value(&self) -> Option<f64> {
        self.lines
            .iter()
            .flat_map(|l| l.points.iter().map(|p| p[1]))
            .reduce(f64::max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarItem {
    pub country: String,
    pub continent: String,
    pub value: f64,
}

/// Ranked bars, largest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarSeries {
    pub bars: Vec<BarItem>,
}

impl BarSeries {
    /// `df` must already be ranked (see [`DataProcessor::top_n`]).
    pub fn from_frame(df: &DataFrame, metric: Metric) -> Result<Self, ProcessorError> {
        let countries = DataProcessor::str_values(df, "country")?;
        let continents = DataProcessor::str_values(df, "continent")?;
        let values = DataProcessor::f64_values(df, metric.column())?;

        let bars = countries
            .into_iter()
            .zip(continents)
            .zip(values)
            .map(|((country, continent), value)| BarItem {
                country,
                continent,
                value,
            })
            .collect();
        Ok(Self { bars })
    }

    /// Continents in order of first appearance among the bars.
    pub fn continents(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for bar in &self.bars {
            if !seen.contains(&bar.continent.as_str()) {
                seen.push(&bar.continent);
            }
        }
        seen
    }

    /// Category-axis position of the i-th ranked bar; rank 0 sits on top.
    pub fn position(&self, rank: usize) -> f64 {
        let last = self.bars.len().saturating_sub(1);
        (last - rank.min(last)) as f64
    }

    /// Country shown at a category-axis position.
    pub fn label_at(&self, position: f64) -> Option<&str> {
        if position < 0.0 || position.fract() != 0.0 {
            return None;
        }
        let pos = position as usize;
        if pos >= self.bars.len() {
            return None;
        }
        let rank = self.bars.len() - 1 - pos;
        Some(self.bars[rank].country.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapCell {
    pub country: String,
    pub iso_alpha: String,
    pub value: f64,
    pub lon: f64,
    pub lat: f64,
}

/// Per-country values placed at their centroids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSeries {
    pub cells: Vec<MapCell>,
    /// Countries whose ISO code has no known centroid.
    pub unplaced: Vec<String>,
    pub min: f64,
    pub max: f64,
}

impl MapSeries {
    pub fn from_frame(df: &DataFrame, metric: Metric) -> Result<Self, ProcessorError> {
        let countries = DataProcessor::str_values(df, "country")?;
        let isos = DataProcessor::str_values(df, "iso_alpha")?;
        let values = DataProcessor::f64_values(df, metric.column())?;

        let min = values.iter().copied().reduce(f64::min).unwrap_or(0.0);
        let max = values.iter().copied().reduce(f64::max).unwrap_or(0.0);

        let mut cells = Vec::with_capacity(countries.len());
        let mut unplaced = Vec::new();
        for ((country, iso_alpha), value) in countries.into_iter().zip(isos).zip(values) {
            match geo::centroid(&iso_alpha) {
                Some((lon, lat)) => cells.push(MapCell {
                    country,
                    iso_alpha,
                    value,
                    lon,
                    lat,
                }),
                None => unplaced.push(country),
            }
        }

        Ok(Self {
            cells,
            unplaced,
            min,
            max,
        })
    }
}

/// Index of the point closest to `target`, measuring distance relative to
/// the spread of `points` on each axis.
pub fn nearest_index(points: &[[f64; 2]], target: [f64; 2]) -> Option<usize> {
    let span = |axis: usize| {
        let (lo, hi) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p[axis]), hi.max(p[axis]))
            });
        if hi > lo {
            hi - lo
        } else {
            1.0
        }
    };
    let (sx, sy) = (span(0), span(1));

    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let dx = (p[0] - target[0]) / sx;
            let dy = (p[1] - target[1]) / sy;
            (i, dx * dx + dy * dy)
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

/// Short human form of large numbers for axes and colour bars.
pub fn compact_number(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.2}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if abs >= 1e4 {
        format!("{:.0}k", value / 1e3)
    } else if abs >= 100.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::fixture_dataset;
    use crate::data::{DataLoader, DataSource, TOP_N, TREND_COUNTRIES};

    fn year_1952() -> DataFrame {
        let ds = fixture_dataset();
        DataProcessor::filter_by_year(ds.frame(), 1952).unwrap()
    }

    #[test]
    fn test_scatter_groups_by_continent_in_appearance_order() {
        let scatter = ScatterSeries::from_frame(&year_1952(), Metric::LifeExp).unwrap();
        let names: Vec<&str> = scatter.groups.iter().map(|g| g.continent.as_str()).collect();
        assert_eq!(names, vec!["Asia", "Europe", "Africa"]);
        assert_eq!(scatter.len(), 4);
        assert_eq!(scatter.group("Europe").unwrap().points.len(), 2);
    }

    #[test]
    fn test_scatter_marker_sizes() {
        let scatter = ScatterSeries::from_frame(&year_1952(), Metric::LifeExp).unwrap();
        let gamma = &scatter.group("Africa").unwrap().points[0];
        assert_eq!(gamma.radius, SIZE_MAX / 2.0);
        assert_eq!(gamma.x, 300.0);
        assert_eq!(gamma.y, 35.0);

        let radii: Vec<f32> = scatter
            .groups
            .iter()
            .flat_map(|g| g.points.iter().map(|p| p.radius))
            .collect();
        assert!(radii.iter().all(|r| *r >= MIN_RADIUS && *r <= SIZE_MAX / 2.0));
    }

    #[test]
    fn test_trend_lines_one_per_country() {
        let ds = DataLoader::load(&DataSource::Embedded).unwrap();
        let trend = DataProcessor::trend_subset(ds.frame()).unwrap();
        let series = TrendSeries::from_frame(&trend, Metric::GdpPercap).unwrap();

        assert_eq!(series.lines.len(), TREND_COUNTRIES.len());
        for line in &series.lines {
            assert_eq!(line.points.len(), ds.years().len());
            assert!(line.points.windows(2).all(|w| w[0][0] < w[1][0]));
        }
        assert!(series.max_value().unwrap() > 0.0);
    }

    #[test]
    fn test_bar_positions_put_first_rank_on_top() {
        let ranked = DataProcessor::top_n(&year_1952(), Metric::Pop, TOP_N).unwrap();
        let bars = BarSeries::from_frame(&ranked, Metric::Pop).unwrap();

        assert_eq!(bars.bars.len(), 4);
        assert_eq!(bars.bars[0].country, "Gamma");
        assert_eq!(bars.position(0), 3.0);
        assert_eq!(bars.position(3), 0.0);
        assert_eq!(bars.label_at(3.0), Some("Gamma"));
        assert_eq!(bars.label_at(0.0), Some("Beta"));
        assert_eq!(bars.label_at(0.5), None);
        assert_eq!(bars.label_at(4.0), None);
        assert_eq!(bars.continents(), vec!["Africa", "Asia", "Europe"]);
    }

    #[test]
    fn test_map_range_and_unplaced() {
        let map = MapSeries::from_frame(&year_1952(), Metric::GdpPercap).unwrap();
        assert_eq!(map.min, 300.0);
        assert_eq!(map.max, 2000.0);
        // Fixture ISO codes are not real countries.
        assert!(map.cells.is_empty());
        assert_eq!(map.unplaced.len(), 4);
    }

    #[test]
    fn test_map_places_bundled_countries() {
        let ds = DataLoader::load(&DataSource::Embedded).unwrap();
        let subset = DataProcessor::filter_by_year(ds.frame(), 2007).unwrap();
        let map = MapSeries::from_frame(&subset, Metric::LifeExp).unwrap();
        assert_eq!(map.cells.len(), subset.height());
        assert!(map.unplaced.is_empty());
        assert!(map.min < map.max);
    }

    #[test]
    fn test_nearest_index_scales_axes() {
        let points = [[0.0, 0.0], [1000.0, 1.0], [500.0, 0.5]];
        assert_eq!(nearest_index(&points, [990.0, 0.9]), Some(1));
        assert_eq!(nearest_index(&points, [480.0, 0.45]), Some(2));
        assert_eq!(nearest_index(&[], [0.0, 0.0]), None);
    }

    #[test]
    fn test_compact_number() {
        assert_eq!(compact_number(1_318_683_096.0), "1.32B");
        assert_eq!(compact_number(301_139_947.0), "301.1M");
        assert_eq!(compact_number(49_357.0), "49k");
        assert_eq!(compact_number(974.58), "975");
        assert_eq!(compact_number(43.828), "43.8");
    }
}
