use eframe::egui::{RichText, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Data grid: filtered records, five columns, per-column quick filters
// ---------------------------------------------------------------------------

/// Render the data grid over the filtered view. Each column header carries a
/// quick-filter text box (case-insensitive substring match on the cell text).
pub fn data_table(ui: &mut Ui, state: &mut AppState) {
    // Split the borrows: the header mutates the quick filters while the body
    // reads the dataset.
    let AppState {
        dataset,
        visible_indices,
        colors,
        table_filters,
        ..
    } = state;

    let rows: Vec<usize> = visible_indices
        .iter()
        .copied()
        .filter(|&i| table_filters.matches(&dataset.penguins[i]))
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .column(Column::remainder())
        .column(Column::remainder())
        .header(44.0, |mut header| {
            let mut filter_column = |label: &str, query: &mut String| {
                header.col(|ui: &mut Ui| {
                    ui.strong(label);
                    ui.add(TextEdit::singleline(query).hint_text("filter"));
                });
            };
            filter_column("species", &mut table_filters.species);
            filter_column("island", &mut table_filters.island);
            filter_column("bill_length_mm", &mut table_filters.bill_length);
            filter_column("bill_depth_mm", &mut table_filters.bill_depth);
            filter_column("body_mass_g", &mut table_filters.body_mass);
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let penguin = &dataset.penguins[rows[row.index()]];

                // Columns the grid doesn't show live in the hover text.
                let details = format!(
                    "flipper {:.0} mm · {} · {}",
                    penguin.flipper_length_mm,
                    penguin.sex.as_deref().unwrap_or("sex unknown"),
                    penguin.year
                );

                row.col(|ui: &mut Ui| {
                    ui.label(
                        RichText::new(penguin.species.name())
                            .color(colors.color_for(penguin.species)),
                    )
                    .on_hover_text(&details);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&penguin.island);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.1}", penguin.bill_length_mm));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.1}", penguin.bill_depth_mm));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.0}", penguin.body_mass_g));
                });
            });
        });
}
