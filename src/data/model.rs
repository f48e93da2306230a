use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Species – the fixed set of penguin species in the dataset
// ---------------------------------------------------------------------------

/// The three species present in the Palmer Penguins dataset.
/// `Ord` so it can live in `BTreeSet`s; serde so filter state can persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    Adelie,
    Chinstrap,
    Gentoo,
}

impl Species {
    /// All species, in display order (checkboxes, legend, colour map).
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];

    pub fn name(&self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Chinstrap => "Chinstrap",
            Species::Gentoo => "Gentoo",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown species: {0:?}")]
pub struct ParseSpeciesError(pub String);

impl FromStr for Species {
    type Err = ParseSpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Adelie" => Ok(Species::Adelie),
            "Chinstrap" => Ok(Species::Chinstrap),
            "Gentoo" => Ok(Species::Gentoo),
            other => Err(ParseSpeciesError(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Penguin – one row of the dataset
// ---------------------------------------------------------------------------

/// A single penguin record (one complete row of the source table).
#[derive(Debug, Clone)]
pub struct Penguin {
    pub species: Species,
    pub island: String,
    pub bill_length_mm: f64,
    pub bill_depth_mm: f64,
    pub flipper_length_mm: f64,
    pub body_mass_g: f64,
    /// "male" / "female"; missing for a handful of records.
    pub sex: Option<String>,
    pub year: i32,
}

// ---------------------------------------------------------------------------
// PenguinDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full dataset, loaded once at startup and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct PenguinDataset {
    pub penguins: Vec<Penguin>,
}

impl PenguinDataset {
    pub fn new(penguins: Vec<Penguin>) -> Self {
        PenguinDataset { penguins }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.penguins.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.penguins.is_empty()
    }

    /// How many records belong to the given species.
    pub fn species_count(&self, species: Species) -> usize {
        self.penguins.iter().filter(|p| p.species == species).count()
    }
}
