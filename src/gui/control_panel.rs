//! Control Panel Widget
//! Left sidebar with the metric selector and year slider.

use crate::config::Selection;
use crate::data::{Metric, YearRange};
use egui::{Color32, ComboBox, RichText};

/// Left side control panel.
pub struct ControlPanel {
    pub source_label: String,
    pub status: String,
}

impl ControlPanel {
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            status: "Ready".to_string(),
        }
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("Dashboard Controls")
                    .size(20.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);
    }

    fn show_source(&self, ui: &mut egui::Ui, rows: Option<usize>) {
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.label(RichText::new(&self.source_label).size(12.0));
                if let Some(rows) = rows {
                    ui.label(
                        RichText::new(format!("{} rows", rows))
                            .size(11.0)
                            .color(Color32::GRAY),
                    );
                }
            });
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.starts_with("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));
    }

    /// Draw the panel and apply widget changes to `selection`.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        selection: &mut Selection,
        range: YearRange,
        rows: usize,
    ) -> ControlPanelAction {
        let before = *selection;

        self.show_header(ui);

        ui.label(RichText::new("Select Metric:").size(14.0).strong());
        ui.add_space(5.0);
        ComboBox::from_id_salt("metric_select")
            .width(220.0)
            .selected_text(selection.metric.label())
            .show_ui(ui, |ui| {
                for metric in Metric::ALL {
                    ui.selectable_value(&mut selection.metric, metric, metric.label());
                }
            });

        ui.add_space(15.0);

        ui.label(RichText::new("Select Year:").size(14.0).strong());
        ui.add_space(5.0);
        ui.add(
            egui::Slider::new(&mut selection.year, range.min..=range.max)
                .step_by(range.step as f64),
        );
        selection.year = range.clamp(selection.year);

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        self.show_source(ui, Some(rows));
        self.show_status(ui);

        if *selection != before {
            ControlPanelAction::SelectionChanged
        } else {
            ControlPanelAction::None
        }
    }

    /// Draw the panel when no dataset could be loaded.
    pub fn show_unavailable(&mut self, ui: &mut egui::Ui) {
        self.show_header(ui);
        self.show_source(ui, None);
        self.show_status(ui);
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SelectionChanged,
}
