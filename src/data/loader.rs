use anyhow::{Context, Result};
use serde::Deserialize;

use super::model::{Penguin, PenguinDataset, Species};

/// The Palmer Penguins table, embedded at compile time so the dashboard
/// needs no files at runtime.
const PENGUINS_CSV: &str = include_str!("../../assets/penguins.csv");

// ---------------------------------------------------------------------------
// Raw CSV row
// ---------------------------------------------------------------------------

/// One CSV row as shipped upstream. Measurements are optional because the
/// source table contains a couple of rows with missing values.
#[derive(Debug, Deserialize)]
struct RawRow {
    species: String,
    island: String,
    bill_length_mm: Option<f64>,
    bill_depth_mm: Option<f64>,
    flipper_length_mm: Option<f64>,
    body_mass_g: Option<f64>,
    sex: Option<String>,
    year: i32,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse the embedded dataset.
///
/// Rows with missing measurements are skipped: every downstream consumer
/// (filter, means, plot) needs all four numeric fields, and keeping partial
/// rows would make the mass filter silently drop them anyway.
pub fn load_embedded() -> Result<PenguinDataset> {
    load_from_csv(PENGUINS_CSV)
}

fn load_from_csv(text: &str) -> Result<PenguinDataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut penguins = Vec::new();
    let mut skipped = 0usize;

    for (row_no, result) in reader.deserialize::<RawRow>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;

        let species: Species = raw
            .species
            .parse()
            .with_context(|| format!("CSV row {row_no}"))?;

        let (Some(bill_length_mm), Some(bill_depth_mm), Some(flipper_length_mm), Some(body_mass_g)) = (
            raw.bill_length_mm,
            raw.bill_depth_mm,
            raw.flipper_length_mm,
            raw.body_mass_g,
        ) else {
            log::debug!("Skipping row {row_no}: missing measurements");
            skipped += 1;
            continue;
        };

        penguins.push(Penguin {
            species,
            island: raw.island,
            bill_length_mm,
            bill_depth_mm,
            flipper_length_mm,
            body_mass_g,
            sex: raw.sex.filter(|s| !s.is_empty()),
            year: raw.year,
        });
    }

    log::info!(
        "Loaded {} penguins ({} incomplete rows skipped)",
        penguins.len(),
        skipped
    );
    Ok(PenguinDataset::new(penguins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_loads() {
        let ds = load_embedded().unwrap();
        // 344 rows shipped, 2 of them without measurements.
        assert_eq!(ds.len(), 342);
        assert_eq!(ds.species_count(Species::Adelie), 151);
        assert_eq!(ds.species_count(Species::Gentoo), 123);
        assert_eq!(ds.species_count(Species::Chinstrap), 68);
    }

    #[test]
    fn masses_sit_inside_the_slider_range() {
        let ds = load_embedded().unwrap();
        for p in &ds.penguins {
            assert!(p.body_mass_g > 2000.0, "mass {} too small", p.body_mass_g);
            assert!(p.body_mass_g < 6000.0, "mass {} too large", p.body_mass_g);
        }
    }

    #[test]
    fn auxiliary_columns_parse() {
        let ds = load_embedded().unwrap();
        for p in &ds.penguins {
            assert!((2007..=2009).contains(&p.year));
            assert!(p.flipper_length_mm > 0.0);
            if let Some(sex) = &p.sex {
                assert!(sex == "male" || sex == "female", "odd sex value {sex:?}");
            }
        }
    }

    #[test]
    fn incomplete_rows_are_skipped() {
        let csv = "\
species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year
Adelie,Torgersen,39.1,18.7,181,3750,male,2007
Adelie,Torgersen,,,,,,2007
Gentoo,Biscoe,46.1,13.2,211,4500,female,2008
";
        let ds = load_from_csv(csv).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.penguins[1].species, Species::Gentoo);
    }

    #[test]
    fn unknown_species_fails_with_row_context() {
        let csv = "\
species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year
Emperor,Biscoe,39.1,18.7,181,3750,male,2007
";
        let err = load_from_csv(csv).unwrap_err();
        assert!(format!("{err:#}").contains("Emperor"));
    }
}
