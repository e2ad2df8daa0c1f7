//! Chart Plotter Module
//! Creates the four interactive dashboard charts using egui_plot.

use crate::charts::palette::{self, category_color, ContinentPalette, SELECTED_YEAR_COLOR};
use crate::charts::series::{
    compact_number, nearest_index, BarSeries, MapSeries, ScatterSeries, TrendSeries,
};
use crate::data::{Metric, YearRange, TOP_N};
use egui::{Align2, Color32, RichText};
use egui_plot::{
    Bar, BarChart, Corner, GridMark, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoint,
    PlotPoints, Points, Text, VLine,
};

/// Height of every chart area.
pub const CHART_HEIGHT: f32 = 400.0;

const COLOR_BAR_STEPS: usize = 48;

pub fn scatter_title(metric: Metric, year: i32) -> String {
    format!("{} vs GDP per Capita ({})", metric.label(), year)
}

pub fn trend_title(metric: Metric, range: YearRange) -> String {
    format!(
        "{} Trends Over Time ({}-{})",
        metric.label(),
        range.min,
        range.max
    )
}

pub fn bar_title(metric: Metric, year: i32) -> String {
    format!("Top {} Countries by {} ({})", TOP_N, metric.label(), year)
}

pub fn map_title(metric: Metric, year: i32) -> String {
    format!("Global {} Distribution ({})", metric.label(), year)
}

/// Value text for hover labels: whole numbers for population, one decimal
/// otherwise.
fn hover_value(metric: Metric, value: f64) -> String {
    match metric {
        Metric::Pop => format!("{:.0}", value),
        _ => format!("{:.1}", value),
    }
}

/// Draws the dashboard charts.
pub struct ChartPlotter;

impl ChartPlotter {
    fn draw_title(ui: &mut egui::Ui, title: &str) {
        ui.label(RichText::new(title).size(13.0).strong());
    }

    /// Bubble chart: GDP per capita on x, selected metric on y, bubble area
    /// by population, colour by continent.
    pub fn draw_scatter_chart(
        ui: &mut egui::Ui,
        series: &ScatterSeries,
        metric: Metric,
        year: i32,
        colors: &ContinentPalette,
    ) {
        Self::draw_title(ui, &scatter_title(metric, year));
        if series.is_empty() {
            ui.label(RichText::new(format!("No countries for {}", year)).color(Color32::GRAY));
        }

        let y_col = metric.column();
        Plot::new("scatter_chart")
            .height(CHART_HEIGHT)
            .legend(Legend::default().position(Corner::RightBottom))
            .x_axis_label("gdpPercap")
            .y_axis_label(y_col)
            .allow_scroll(false)
            .x_axis_formatter(|mark, _range| compact_number(mark.value))
            .y_axis_formatter(|mark, _range| compact_number(mark.value))
            .label_formatter(move |name, value| {
                let Some(group) = series.group(name) else {
                    return String::new();
                };
                let coords: Vec<[f64; 2]> = group.points.iter().map(|p| [p.x, p.y]).collect();
                nearest_index(&coords, [value.x, value.y])
                    .map(|i| {
                        let p = &group.points[i];
                        format!(
                            "{}\ncontinent={}\ngdpPercap={:.1}\n{}={}\npop={:.0}",
                            p.country,
                            group.continent,
                            p.x,
                            y_col,
                            hover_value(metric, p.y),
                            p.pop
                        )
                    })
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                for group in &series.groups {
                    let color = colors.color(&group.continent);
                    // Marker radius is per item, so every country is its own item
                    // sharing the continent name (and legend entry).
                    for point in &group.points {
                        plot_ui.points(
                            Points::new(PlotPoints::from([point.x, point.y]))
                                .shape(MarkerShape::Circle)
                                .filled(true)
                                .radius(point.radius)
                                .color(color.gamma_multiply(0.7))
                                .name(&group.continent),
                        );
                    }
                }
            });
    }

    /// Line chart of the trend countries with a marker for the selected year.
    pub fn draw_trend_chart(
        ui: &mut egui::Ui,
        series: &TrendSeries,
        metric: Metric,
        year: i32,
        range: YearRange,
    ) {
        Self::draw_title(ui, &trend_title(metric, range));

        let stops = range.stops();
        Plot::new("trend_chart")
            .height(CHART_HEIGHT)
            .legend(Legend::default().position(Corner::LeftTop))
            .x_axis_label("year")
            .y_axis_label(metric.column())
            .allow_scroll(false)
            .x_grid_spacer(move |_input| {
                stops
                    .iter()
                    .map(|year| GridMark {
                        value: *year as f64,
                        step_size: range.step as f64,
                    })
                    .collect()
            })
            .y_axis_formatter(|mark, _range| compact_number(mark.value))
            .label_formatter(move |name, value| {
                if name.is_empty() {
                    return String::new();
                }
                format!(
                    "{}\nyear={:.0}\n{}={}",
                    name,
                    value.x,
                    metric.column(),
                    hover_value(metric, value.y)
                )
            })
            .show(ui, |plot_ui| {
                for (i, line) in series.lines.iter().enumerate() {
                    let color = category_color(i);
                    plot_ui.line(
                        Line::new(PlotPoints::from(line.points.clone()))
                            .color(color)
                            .width(2.0)
                            .name(&line.country),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from(line.points.clone()))
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(3.5)
                            .color(color)
                            .name(&line.country),
                    );
                }

                let label = format!("Selected: {}", year);
                plot_ui.vline(
                    VLine::new(year)
                        .color(SELECTED_YEAR_COLOR)
                        .width(1.5)
                        .style(LineStyle::dashed_loose()),
                );
                if let Some(top) = series.max_value() {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(year as f64, top),
                            RichText::new(label).color(SELECTED_YEAR_COLOR).size(12.0),
                        )
                        .anchor(Align2::LEFT_BOTTOM),
                    );
                }
            });
    }

    /// Horizontal ranking bars, largest on top, coloured by continent.
    pub fn draw_bar_chart(
        ui: &mut egui::Ui,
        series: &BarSeries,
        metric: Metric,
        year: i32,
        colors: &ContinentPalette,
    ) {
        Self::draw_title(ui, &bar_title(metric, year));

        let n = series.bars.len();
        Plot::new("top_bar_chart")
            .height(CHART_HEIGHT)
            .legend(Legend::default().position(Corner::RightBottom))
            .x_axis_label(metric.column())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_x(0.0)
            .y_axis_min_width(110.0)
            .x_axis_formatter(|mark, _range| compact_number(mark.value))
            .y_grid_spacer(move |_input| {
                (0..n)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .y_axis_formatter(move |mark, _range| {
                series.label_at(mark.value).unwrap_or_default().to_string()
            })
            .show(ui, |plot_ui| {
                for continent in series.continents() {
                    let color = colors.color(continent);
                    let bars: Vec<Bar> = series
                        .bars
                        .iter()
                        .enumerate()
                        .filter(|(_, bar)| bar.continent == continent)
                        .map(|(rank, bar)| {
                            Bar::new(series.position(rank), bar.value)
                                .name(&bar.country)
                                .fill(color)
                                .width(0.7)
                        })
                        .collect();
                    plot_ui.bar_chart(BarChart::new(bars).horizontal().color(color).name(continent));
                }
            });
    }

    /// Country markers at their centroids, coloured on the Viridis scale.
    pub fn draw_map_chart(ui: &mut egui::Ui, series: &MapSeries, metric: Metric, year: i32) {
        Self::draw_title(ui, &map_title(metric, year));

        Plot::new("map_chart")
            .height(CHART_HEIGHT - 40.0)
            .data_aspect(1.0)
            .include_x(-180.0)
            .include_x(180.0)
            .include_y(-60.0)
            .include_y(85.0)
            .allow_scroll(false)
            .x_axis_formatter(|mark, _range| format!("{:.0}°", mark.value))
            .y_axis_formatter(|mark, _range| format!("{:.0}°", mark.value))
            .label_formatter(move |name, _value| {
                series
                    .cells
                    .iter()
                    .find(|cell| cell.country == name)
                    .map(|cell| {
                        format!(
                            "{}\niso_alpha={}\n{}={}",
                            cell.country,
                            cell.iso_alpha,
                            metric.column(),
                            hover_value(metric, cell.value)
                        )
                    })
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                for cell in &series.cells {
                    let t = palette::normalize(cell.value, series.min, series.max);
                    plot_ui.points(
                        Points::new(PlotPoints::from([cell.lon, cell.lat]))
                            .shape(MarkerShape::Square)
                            .filled(true)
                            .radius(5.0)
                            .color(palette::viridis(t))
                            .name(&cell.country),
                    );
                }
            });

        Self::draw_color_bar(ui, metric, series.min, series.max);

        if !series.unplaced.is_empty() {
            ui.label(
                RichText::new(format!("Not placed on map: {}", series.unplaced.join(", ")))
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        }
    }

    /// Horizontal Viridis legend from `min` to `max`.
    fn draw_color_bar(ui: &mut egui::Ui, metric: Metric, min: f64, max: f64) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(metric.column()).size(11.0).strong());
            ui.label(RichText::new(compact_number(min)).size(11.0));

            let (rect, _) = ui.allocate_exact_size(egui::vec2(220.0, 12.0), egui::Sense::hover());
            let step_width = rect.width() / COLOR_BAR_STEPS as f32;
            for i in 0..COLOR_BAR_STEPS {
                let t = i as f64 / (COLOR_BAR_STEPS - 1) as f64;
                let cell = egui::Rect::from_min_size(
                    egui::pos2(rect.left() + i as f32 * step_width, rect.top()),
                    egui::vec2(step_width + 0.5, rect.height()),
                );
                ui.painter().rect_filled(cell, 0.0, palette::viridis(t));
            }

            ui.label(RichText::new(compact_number(max)).size(11.0));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(
            scatter_title(Metric::LifeExp, 2007),
            "Life Expectancy (years) vs GDP per Capita (2007)"
        );
        assert_eq!(
            bar_title(Metric::Pop, 1952),
            "Top 10 Countries by Population (1952)"
        );
        assert_eq!(
            map_title(Metric::GdpPercap, 1977),
            "Global GDP per Capita (USD) Distribution (1977)"
        );
        let range = YearRange {
            min: 1952,
            max: 2007,
            step: 5,
        };
        assert_eq!(
            trend_title(Metric::Pop, range),
            "Population Trends Over Time (1952-2007)"
        );
    }

    #[test]
    fn test_hover_value() {
        assert_eq!(hover_value(Metric::Pop, 1318683096.0), "1318683096");
        assert_eq!(hover_value(Metric::LifeExp, 72.961), "73.0");
    }
}
