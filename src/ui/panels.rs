use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{FilterState, MASS_MIN, MASS_MAX};
use crate::data::model::Species;
use crate::data::summary::format_mm;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the sidebar: mass slider, species checkboxes, links.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Controls");
    ui.separator();

    ui.strong("Mass");
    let slider = egui::Slider::new(&mut state.filters.mass_ceiling, MASS_MIN..=MASS_MAX)
        .suffix(" g")
        .integer();
    ui.add(slider);
    ui.add_space(8.0);

    ui.strong("Species");
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    for species in Species::ALL {
        let is_selected = state.filters.selected_species.contains(&species);
        let label = RichText::new(species.name()).color(state.colors.color_for(species));

        let mut checked = is_selected;
        if ui.checkbox(&mut checked, label).changed() {
            state.toggle_species(species);
        }
    }

    ui.separator();
    ui.label(RichText::new("Useful Links").small().strong());
    ui.hyperlink_to(
        "Palmer Penguins dataset",
        "https://allisonhorst.github.io/palmerpenguins/",
    );
    ui.hyperlink_to("egui documentation", "https://docs.rs/egui");
    ui.hyperlink_to("egui on GitHub", "https://github.com/emilk/egui");

    // Recompute the cached view after any slider / checkbox change.
    state.refilter();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar: counts, reset, status message.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Penguins Dashboard");
        ui.separator();

        ui.label(format!(
            "{} of {} penguins shown",
            state.visible_indices.len(),
            state.dataset.len()
        ));

        ui.separator();

        if ui.button("Reset filters").clicked() {
            state.filters = FilterState::default();
            state.table_filters = Default::default();
            state.refilter();
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Value boxes
// ---------------------------------------------------------------------------

/// The three summary readouts across the top of the central panel.
pub fn value_boxes(ui: &mut Ui, state: &AppState) {
    let summary = &state.summary;

    ui.columns(3, |cols: &mut [Ui]| {
        value_box(&mut cols[0], "Total Penguins", &summary.count.to_string());
        value_box(
            &mut cols[1],
            "Average Bill Length",
            &format_mm(summary.mean_bill_length_mm),
        );
        value_box(
            &mut cols[2],
            "Average Bill Depth",
            &format_mm(summary.mean_bill_depth_mm),
        );
    });
}

fn value_box(ui: &mut Ui, title: &str, value: &str) {
    ui.group(|ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new(title).small());
            ui.label(RichText::new(value).heading().strong());
        });
    });
}
