//! Colours for categorical and continuous encodings.

use egui::Color32;

/// Qualitative palette for categories (continents, trend countries).
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(99, 110, 250),  // Blue
    Color32::from_rgb(239, 85, 59),   // Red
    Color32::from_rgb(0, 204, 150),   // Green
    Color32::from_rgb(171, 99, 250),  // Purple
    Color32::from_rgb(255, 161, 90),  // Orange
    Color32::from_rgb(25, 211, 243),  // Cyan
    Color32::from_rgb(255, 102, 146), // Pink
    Color32::from_rgb(182, 232, 128), // Lime
    Color32::from_rgb(255, 151, 255), // Magenta
    Color32::from_rgb(254, 203, 82),  // Yellow
];

/// Marker for the selected year on the trends chart.
pub const SELECTED_YEAR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

/// Viridis colour stops, evenly spaced from 0 to 1.
const VIRIDIS: [[u8; 3]; 10] = [
    [68, 1, 84],
    [72, 40, 120],
    [62, 74, 137],
    [49, 104, 142],
    [38, 130, 142],
    [31, 158, 137],
    [53, 183, 121],
    [109, 205, 89],
    [180, 222, 44],
    [253, 231, 37],
];

/// Palette colour for the i-th category.
pub fn category_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE.len()]
}

/// Assigns continents stable colours, in base dataset order, so a
/// continent looks the same in every chart.
#[derive(Debug, Clone, Default)]
pub struct ContinentPalette {
    order: Vec<String>,
}

impl ContinentPalette {
    pub fn new(continents: &[String]) -> Self {
        Self {
            order: continents.to_vec(),
        }
    }

    pub fn color(&self, continent: &str) -> Color32 {
        let index = self
            .order
            .iter()
            .position(|c| c == continent)
            .unwrap_or(self.order.len());
        category_color(index)
    }
}

/// Position of `value` within `[min, max]`, clamped to `[0, 1]`.
/// A degenerate range maps everything to the middle of the scale.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if !(max > min) || !value.is_finite() {
        return 0.5;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// Viridis colour at `t` (clamped to `[0, 1]`).
pub fn viridis(t: f64) -> Color32 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    let upper = (lower + 1).min(VIRIDIS.len() - 1);
    let frac = scaled - lower as f64;

    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (a, b) = (VIRIDIS[lower], VIRIDIS[upper]);
    Color32::from_rgb(lerp(a[0], b[0]), lerp(a[1], b[1]), lerp(a[2], b[2]))
}
