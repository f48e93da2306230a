use eframe::egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::data::model::Species;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot: bill length × bill depth, coloured by species
// ---------------------------------------------------------------------------

/// Render the bill length vs. depth scatter over the filtered view.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No dataset loaded");
        });
        return;
    }

    Plot::new("bill_scatter")
        .legend(Legend::default())
        .x_axis_label("Bill length (mm)")
        .y_axis_label("Bill depth (mm)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One series per species so the legend and colours stay stable.
            for species in Species::ALL {
                let coords: Vec<[f64; 2]> = state
                    .visible_indices
                    .iter()
                    .map(|&i| &state.dataset.penguins[i])
                    .filter(|p| p.species == species)
                    .map(|p| [p.bill_length_mm, p.bill_depth_mm])
                    .collect();

                if coords.is_empty() {
                    continue;
                }

                let points: PlotPoints = coords.into();
                plot_ui.points(
                    Points::new(points)
                        .name(species.name())
                        .color(state.colors.color_for(species))
                        .shape(MarkerShape::Circle)
                        .radius(3.0),
                );
            }
        });
}
