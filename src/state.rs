use crate::color::SpeciesColors;
use crate::data::filter::{filtered_indices, FilterState};
use crate::data::model::{Penguin, PenguinDataset, Species};
use crate::data::summary::{summarize, Summary};

// ---------------------------------------------------------------------------
// Table quick-filters
// ---------------------------------------------------------------------------

/// Per-column text filters for the data grid. A cell matches when the query
/// is a case-insensitive substring of its rendered text; empty queries pass.
#[derive(Debug, Clone, Default)]
pub struct TableFilters {
    pub species: String,
    pub island: String,
    pub bill_length: String,
    pub bill_depth: String,
    pub body_mass: String,
}

fn cell_matches(query: &str, cell: &str) -> bool {
    let query = query.trim();
    query.is_empty() || cell.to_lowercase().contains(&query.to_lowercase())
}

impl TableFilters {
    pub fn matches(&self, p: &Penguin) -> bool {
        cell_matches(&self.species, p.species.name())
            && cell_matches(&self.island, &p.island)
            && cell_matches(&self.bill_length, &format!("{:.1}", p.bill_length_mm))
            && cell_matches(&self.bill_depth, &format!("{:.1}", p.bill_depth_mm))
            && cell_matches(&self.body_mass, &format!("{:.0}", p.body_mass_g))
    }

    pub fn is_active(&self) -> bool {
        !(self.species.trim().is_empty()
            && self.island.trim().is_empty()
            && self.bill_length.trim().is_empty()
            && self.bill_depth.trim().is_empty()
            && self.body_mass.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The embedded dataset, loaded once at startup.
    pub dataset: PenguinDataset,

    /// Current slider / checkbox selections.
    pub filters: FilterState,

    /// Indices of penguins passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Aggregates over `visible_indices` (cached alongside them).
    pub summary: Summary,

    /// Per-species colours for plot, checkboxes, and table.
    pub colors: SpeciesColors,

    /// Quick-filter text boxes above the data grid.
    pub table_filters: TableFilters,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state around the embedded dataset, starting from the given
    /// filter selections (defaults, or restored from storage).
    pub fn new(filters: FilterState) -> Self {
        let (dataset, status_message) = match crate::data::loader::load_embedded() {
            Ok(ds) => (ds, None),
            Err(e) => {
                log::error!("Failed to load embedded dataset: {e:#}");
                (PenguinDataset::default(), Some(format!("Error: {e:#}")))
            }
        };

        let mut state = AppState {
            dataset,
            filters,
            visible_indices: Vec::new(),
            summary: Summary::default(),
            colors: SpeciesColors::default(),
            table_filters: TableFilters::default(),
            status_message,
        };
        state.refilter();
        state
    }

    /// Recompute `visible_indices` and the summary after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.filters);
        self.summary = summarize(&self.dataset, &self.visible_indices);
    }

    /// Flip a single species checkbox.
    pub fn toggle_species(&mut self, species: Species) {
        self.filters.toggle_species(species);
        self.refilter();
    }

    /// Tick every species.
    pub fn select_all(&mut self) {
        self.filters.select_all();
        self.refilter();
    }

    /// Untick every species.
    pub fn select_none(&mut self) {
        self.filters.select_none();
        self.refilter();
    }
}
