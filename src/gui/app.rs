//! Dashboard Main Application
//! Main window with control panel and chart viewer.

use crate::charts::ContinentPalette;
use crate::config::{AppConfig, DashboardSettings, Selection, SETTINGS_KEY};
use crate::data::{DataLoader, DataSource, Dataset, LoaderError};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, DashboardView};
use egui::{CentralPanel, ScrollArea, SidePanel};
use tracing::{debug, error, info, warn};

/// Main application window.
pub struct DashboardApp {
    dataset: Option<&'static Dataset>,
    selection: Selection,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let stored = if config.reset {
            info!("ignoring remembered dashboard settings");
            DashboardSettings::default()
        } else {
            cc.storage
                .and_then(|storage| eframe::get_value::<DashboardSettings>(storage, SETTINGS_KEY))
                .unwrap_or_default()
        };

        Self::with_settings(&config.data_source(), stored)
    }

    /// Load the base dataset and build the first page for `stored`.
    pub fn with_settings(source: &DataSource, stored: DashboardSettings) -> Self {
        Self::from_loaded(source.describe(), DataLoader::base_dataset(source), stored)
    }

    fn from_loaded(
        source_label: String,
        loaded: Result<&'static Dataset, LoaderError>,
        stored: DashboardSettings,
    ) -> Self {
        let mut control_panel = ControlPanel::new(source_label.as_str());

        match loaded {
            Ok(dataset) => {
                let mut app = Self {
                    dataset: Some(dataset),
                    selection: stored.resolve(dataset.year_range()),
                    control_panel,
                    chart_viewer: ChartViewer::new(ContinentPalette::new(dataset.continents())),
                };
                app.refresh_view();
                app
            }
            Err(e) => {
                error!(source = %source_label, error = %e, "failed to load dataset");
                control_panel.set_status(&format!("Error: {}", e));
                let mut chart_viewer = ChartViewer::new(ContinentPalette::new(&[]));
                chart_viewer.set_error(format!("Failed to load data: {}", e));
                Self {
                    dataset: None,
                    selection: Selection {
                        metric: stored.metric,
                        year: stored.year.unwrap_or_default(),
                    },
                    control_panel,
                    chart_viewer,
                }
            }
        }
    }

    /// Recompute every derived view for the current selection.
    fn refresh_view(&mut self) {
        let Some(dataset) = self.dataset else {
            return;
        };

        debug!(
            metric = %self.selection.metric,
            year = self.selection.year,
            "recomputing dashboard views"
        );
        match DashboardView::build(dataset, self.selection) {
            Ok(view) => {
                debug!(countries = view.scatter.len(), "dashboard views rebuilt");
                let status = match &view.summary {
                    Ok(summary) => format!("{} countries in {}", summary.count, self.selection.year),
                    Err(_) => format!("No rows for {}", self.selection.year),
                };
                self.control_panel.set_status(&status);
                self.chart_viewer.set_view(view);
            }
            Err(e) => {
                warn!(error = %e, "failed to build dashboard views");
                self.control_panel.set_status(&format!("Error: {}", e));
                self.chart_viewer.set_error(e.to_string());
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = ControlPanelAction::None;

        SidePanel::left("control_panel")
            .resizable(true)
            .default_width(280.0)
            .min_width(240.0)
            .max_width(360.0)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| match self.dataset {
                    Some(dataset) => {
                        action = self.control_panel.show(
                            ui,
                            &mut self.selection,
                            dataset.year_range(),
                            dataset.row_count(),
                        );
                    }
                    None => self.control_panel.show_unavailable(ui),
                });
            });

        if action == ControlPanelAction::SelectionChanged {
            self.refresh_view();
        }

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.chart_viewer.show(ui));
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &DashboardSettings::from(self.selection));
    }
}
