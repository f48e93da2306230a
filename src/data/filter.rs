use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::model::{PenguinDataset, Species};

/// Slider bounds for the body-mass ceiling, in grams.
pub const MASS_MIN: f64 = 2000.0;
pub const MASS_MAX: f64 = 6000.0;

// ---------------------------------------------------------------------------
// Filter predicate: selected species + mass ceiling
// ---------------------------------------------------------------------------

/// The two user-controlled filter parameters. Serde-serializable so eframe
/// can persist it across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Species currently ticked. Empty set means "show nothing".
    pub selected_species: BTreeSet<Species>,
    /// Records with `body_mass_g < mass_ceiling` pass.
    pub mass_ceiling: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            selected_species: Species::ALL.into_iter().collect(),
            mass_ceiling: MASS_MAX,
        }
    }
}

impl FilterState {
    /// Pull a possibly stale persisted state back into valid bounds.
    pub fn clamp(&mut self) {
        self.mass_ceiling = self.mass_ceiling.clamp(MASS_MIN, MASS_MAX);
    }

    pub fn toggle_species(&mut self, species: Species) {
        if !self.selected_species.remove(&species) {
            self.selected_species.insert(species);
        }
    }

    pub fn select_all(&mut self) {
        self.selected_species = Species::ALL.into_iter().collect();
    }

    pub fn select_none(&mut self) {
        self.selected_species.clear();
    }
}

/// Return indices of penguins that pass the current filters.
///
/// A record passes when its species is ticked and its body mass is strictly
/// below the ceiling. Pure and deterministic; preserves dataset order.
pub fn filtered_indices(dataset: &PenguinDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .penguins
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            filters.selected_species.contains(&p.species) && p.body_mass_g < filters.mass_ceiling
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_embedded;

    fn dataset() -> PenguinDataset {
        load_embedded().unwrap()
    }

    #[test]
    fn default_filters_show_the_full_dataset() {
        let ds = dataset();
        let visible = filtered_indices(&ds, &FilterState::default());
        assert_eq!(visible, (0..ds.len()).collect::<Vec<_>>());
    }

    #[test]
    fn empty_selection_shows_nothing() {
        let ds = dataset();
        let mut filters = FilterState::default();
        filters.select_none();
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = dataset();
        let mut filters = FilterState::default();
        filters.selected_species = [Species::Adelie, Species::Gentoo].into_iter().collect();
        filters.mass_ceiling = 4200.0;

        let first = filtered_indices(&ds, &filters);
        let second = filtered_indices(&ds, &filters);
        assert_eq!(first, second);
    }

    #[test]
    fn lowering_the_ceiling_never_grows_the_view() {
        let ds = dataset();
        let mut filters = FilterState::default();
        let mut previous = usize::MAX;

        let mut ceiling = MASS_MAX;
        while ceiling >= MASS_MIN {
            filters.mass_ceiling = ceiling;
            let count = filtered_indices(&ds, &filters).len();
            assert!(count <= previous, "count grew at ceiling {ceiling}");
            previous = count;
            ceiling -= 250.0;
        }
        assert_eq!(previous, 0);
    }

    #[test]
    fn adelie_under_3500() {
        let ds = dataset();
        let mut filters = FilterState::default();
        filters.selected_species = [Species::Adelie].into_iter().collect();
        filters.mass_ceiling = 3500.0;

        let visible = filtered_indices(&ds, &filters);
        let expected = ds
            .penguins
            .iter()
            .filter(|p| p.species == Species::Adelie && p.body_mass_g < 3500.0)
            .count();
        assert_eq!(visible.len(), expected);
        assert_eq!(visible.len(), 54);
        assert!(visible
            .iter()
            .all(|&i| ds.penguins[i].species == Species::Adelie));
    }

    #[test]
    fn ceiling_below_every_record_empties_the_view() {
        let ds = dataset();
        let mut filters = FilterState::default();
        filters.selected_species = [Species::Gentoo, Species::Chinstrap].into_iter().collect();
        filters.mass_ceiling = MASS_MIN;

        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn toggle_flips_membership() {
        let mut filters = FilterState::default();
        filters.toggle_species(Species::Gentoo);
        assert!(!filters.selected_species.contains(&Species::Gentoo));
        filters.toggle_species(Species::Gentoo);
        assert!(filters.selected_species.contains(&Species::Gentoo));
    }

    #[test]
    fn clamp_repairs_persisted_state() {
        let mut filters = FilterState {
            selected_species: Species::ALL.into_iter().collect(),
            mass_ceiling: 123456.0,
        };
        filters.clamp();
        assert_eq!(filters.mass_ceiling, MASS_MAX);
    }
}
