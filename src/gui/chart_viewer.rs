//! Chart Viewer Widget
//! Central dashboard page: title, the 2x2 chart grid, summary panels and
//! the informational sections.

use crate::charts::{BarSeries, ChartPlotter, ContinentPalette, MapSeries, ScatterSeries, TrendSeries};
use crate::config::Selection;
use crate::data::{DataProcessor, Dataset, ProcessorError, YearRange, TOP_N};
use crate::stats::{format_whole, StatsCalculator, StatsError, SummaryStats};
use egui::{Color32, RichText};

const SECTION_SPACING: f32 = 15.0;
const DELTA_GREEN: Color32 = Color32::from_rgb(40, 167, 69);
const ERROR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Everything drawn for one (metric, year) selection.
#[derive(Debug)]
pub struct DashboardView {
    pub selection: Selection,
    pub year_range: YearRange,
    pub scatter: ScatterSeries,
    pub trend: TrendSeries,
    pub top: BarSeries,
    pub map: MapSeries,
    pub summary: Result<SummaryStats, StatsError>,
}

impl DashboardView {
    /// Derive all chart series and the summary from the base dataset.
    pub fn build(dataset: &Dataset, selection: Selection) -> Result<Self, ProcessorError> {
        let metric = selection.metric;
        let year_df = DataProcessor::filter_by_year(dataset.frame(), selection.year)?;
        let top_df = DataProcessor::top_n(&year_df, metric, TOP_N)?;
        let trend_df = DataProcessor::trend_subset(dataset.frame())?;

        // An empty year is shown in the summary area; anything else is fatal.
        let summary = match StatsCalculator::summarize(&year_df, metric) {
            Err(StatsError::Processor(e)) => return Err(e),
            other => other,
        };

        Ok(Self {
            selection,
            year_range: dataset.year_range(),
            scatter: ScatterSeries::from_frame(&year_df, metric)?,
            trend: TrendSeries::from_frame(&trend_df, metric)?,
            top: BarSeries::from_frame(&top_df, metric)?,
            map: MapSeries::from_frame(&year_df, metric)?,
            summary,
        })
    }
}

/// A label, a big value and an optional green delta line.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub delta: Option<String>,
}

/// The four summary cards in display order.
pub fn summary_cards(summary: &SummaryStats) -> [MetricCard; 4] {
    [
        MetricCard {
            label: "Countries",
            value: summary.count.to_string(),
            delta: None,
        },
        MetricCard {
            label: "Highest Value",
            value: format_whole(summary.highest.value),
            delta: Some(summary.highest.country.clone()),
        },
        MetricCard {
            label: "Lowest Value",
            value: format_whole(summary.lowest.value),
            delta: Some(summary.lowest.country.clone()),
        },
        MetricCard {
            label: "Global Average",
            value: format_whole(summary.mean),
            delta: None,
        },
    ]
}

/// Scrollable dashboard page.
pub struct ChartViewer {
    view: Option<DashboardView>,
    error: Option<String>,
    colors: ContinentPalette,
}

impl ChartViewer {
    pub fn new(colors: ContinentPalette) -> Self {
        Self {
            view: None,
            error: None,
            colors,
        }
    }

    pub fn set_view(&mut self, view: DashboardView) {
        self.view = Some(view);
        self.error = None;
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.view = None;
        self.error = Some(error.into());
    }

    #[cfg(test)]
    pub(crate) fn view(&self) -> Option<&DashboardView> {
        self.view.as_ref()
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        Self::draw_header(ui);

        if let Some(error) = &self.error {
            ui.add_space(SECTION_SPACING);
            ui.label(
                RichText::new(format!("⚠ {}", error))
                    .size(16.0)
                    .color(ERROR_RED),
            );
            return;
        }
        let Some(view) = &self.view else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ui.add_space(SECTION_SPACING);
        self.draw_chart_grid(ui, view);

        ui.add_space(SECTION_SPACING);
        ui.separator();
        Self::draw_summary(ui, view);

        ui.add_space(SECTION_SPACING);
        ui.separator();
        Self::draw_about(ui);
    }

    fn draw_header(ui: &mut egui::Ui) {
        ui.label(
            RichText::new("🌍 Global Economic Indicators Dashboard")
                .size(28.0)
                .strong(),
        );
        ui.label(
            RichText::new("Interactive Multi-Visualization Analysis Platform")
                .size(15.0)
                .strong(),
        );
    }

    fn subheader(ui: &mut egui::Ui, text: String) {
        ui.add_space(8.0);
        ui.label(RichText::new(text).size(18.0).strong());
        ui.add_space(4.0);
    }

    fn draw_chart_grid(&self, ui: &mut egui::Ui, view: &DashboardView) {
        let Selection { metric, year } = view.selection;
        let label = metric.label();

        ui.columns(2, |cols| {
            Self::subheader(
                &mut cols[0],
                format!("📊 {} vs GDP per Capita ({})", label, year),
            );
            ChartPlotter::draw_scatter_chart(&mut cols[0], &view.scatter, metric, year, &self.colors);
            Self::subheader(&mut cols[0], format!("📈 Historical Trends: {}", label));
            ChartPlotter::draw_trend_chart(&mut cols[0], &view.trend, metric, year, view.year_range);

            Self::subheader(
                &mut cols[1],
                format!("🏆 Top {} Countries by {} ({})", TOP_N, label, year),
            );
            ChartPlotter::draw_bar_chart(&mut cols[1], &view.top, metric, year, &self.colors);
            Self::subheader(
                &mut cols[1],
                format!("🗺️ Global Distribution: {} ({})", label, year),
            );
            ChartPlotter::draw_map_chart(&mut cols[1], &view.map, metric, year);
        });
    }

    fn draw_summary(ui: &mut egui::Ui, view: &DashboardView) {
        Self::subheader(ui, "📊 Summary Statistics".to_string());

        let summary = match &view.summary {
            Ok(summary) => summary,
            Err(e) => {
                ui.label(
                    RichText::new(format!("No summary for {}: {}", view.selection.year, e))
                        .color(ERROR_RED),
                );
                return;
            }
        };

        let cards = summary_cards(summary);
        ui.columns(cards.len(), |cols| {
            for (ui, card) in cols.iter_mut().zip(cards.iter()) {
                Self::draw_metric_card(ui, card);
            }
        });
    }

    fn draw_metric_card(ui: &mut egui::Ui, card: &MetricCard) {
        egui::Frame::none()
            .rounding(8.0)
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(card.label).size(13.0).color(Color32::GRAY));
                ui.label(RichText::new(&card.value).size(28.0));
                if let Some(delta) = &card.delta {
                    ui.label(
                        RichText::new(format!("↑ {}", delta))
                            .size(13.0)
                            .color(DELTA_GREEN),
                    );
                }
            });
    }

    fn draw_about(ui: &mut egui::Ui) {
        Self::subheader(ui, "ℹ️ About This Dashboard".to_string());
        ui.label(
            "This dashboard demonstrates several coordinated visualizations of the \
             Gapminder dataset. Pick a metric and a year in the sidebar and every \
             chart and summary panel updates together.",
        );
        ui.add_space(6.0);
        ui.label(RichText::new("Visualizations:").strong());
        for line in [
            "• Scatter plot: metric against GDP per capita, sized by population",
            "• Line chart: historical trends for selected countries",
            "• Bar chart: top 10 countries for the selected metric",
            "• Map: global distribution of the metric by country",
        ] {
            ui.label(line);
        }

        ui.add_space(8.0);
        egui::CollapsingHeader::new("🔧 Technical Details")
            .default_open(false)
            .show(ui, |ui| {
                for line in [
                    "• Data: Gapminder country indicators, 142 countries, 1952-2007 in 5-year steps",
                    "• UI: egui / eframe native window",
                    "• Charts: egui_plot with pan, zoom and hover labels",
                    "• Data processing: polars lazy queries, statrs summaries",
                    "• Metric and year are remembered between sessions",
                ] {
                    ui.label(line);
                }
            });
    }
}
