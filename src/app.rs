use eframe::egui;

use crate::data::filter::FilterState;
use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinDashApp {
    pub state: AppState,
}

impl PenguinDashApp {
    /// Restore the persisted filter selections (if any) and build the state.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut filters: FilterState = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        filters.clamp();

        Self {
            state: AppState::new(filters),
        }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filter controls ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: value boxes, scatter plot, data grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::value_boxes(ui, &self.state);
            ui.add_space(8.0);

            ui.columns(2, |cols: &mut [egui::Ui]| {
                cols[0].group(|ui: &mut egui::Ui| {
                    ui.strong("Bill Length vs Depth");
                    plot::scatter_plot(ui, &self.state);
                });
                cols[1].group(|ui: &mut egui::Ui| {
                    ui.strong("Penguin Data");
                    table::data_table(ui, &mut self.state);
                });
            });
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state.filters);
    }
}
