use super::model::PenguinDataset;

// ---------------------------------------------------------------------------
// Summary – the three value-box statistics over the filtered view
// ---------------------------------------------------------------------------

/// Aggregates over the visible records. Means are `None` for an empty view
/// so the UI renders a placeholder instead of propagating NaN.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub count: usize,
    pub mean_bill_length_mm: Option<f64>,
    pub mean_bill_depth_mm: Option<f64>,
}

/// Compute the summary over the given visible indices.
pub fn summarize(dataset: &PenguinDataset, visible: &[usize]) -> Summary {
    if visible.is_empty() {
        return Summary::default();
    }

    let mut length_sum = 0.0;
    let mut depth_sum = 0.0;
    for &i in visible {
        let p = &dataset.penguins[i];
        length_sum += p.bill_length_mm;
        depth_sum += p.bill_depth_mm;
    }

    let n = visible.len() as f64;
    Summary {
        count: visible.len(),
        mean_bill_length_mm: Some(length_sum / n),
        mean_bill_depth_mm: Some(depth_sum / n),
    }
}

/// Format a mean for a value box: `"39.5 mm"`, or an em-dash when there is
/// no data.
pub fn format_mm(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1} mm"),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterState};
    use crate::data::loader::load_embedded;
    use crate::data::model::Species;

    #[test]
    fn empty_view_yields_placeholder_means() {
        let ds = load_embedded().unwrap();
        let summary = summarize(&ds, &[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean_bill_length_mm, None);
        assert_eq!(format_mm(summary.mean_bill_length_mm), "—");
        assert_eq!(format_mm(summary.mean_bill_depth_mm), "—");
    }

    #[test]
    fn means_cover_only_the_filtered_subset() {
        let ds = load_embedded().unwrap();
        let mut filters = FilterState::default();
        filters.selected_species = [Species::Adelie].into_iter().collect();
        filters.mass_ceiling = 3500.0;

        let visible = filtered_indices(&ds, &filters);
        let summary = summarize(&ds, &visible);

        assert_eq!(summary.count, 54);
        let length = summary.mean_bill_length_mm.unwrap();
        let depth = summary.mean_bill_depth_mm.unwrap();
        assert!((length - 38.7574).abs() < 1e-3, "mean length {length}");
        assert!((depth - 18.0556).abs() < 1e-3, "mean depth {depth}");
    }

    #[test]
    fn formatting_rounds_to_one_decimal() {
        assert_eq!(format_mm(Some(43.9213)), "43.9 mm");
        assert_eq!(format_mm(Some(17.0)), "17.0 mm");
    }

    #[test]
    fn full_view_count_matches_dataset_len() {
        let ds = load_embedded().unwrap();
        let visible: Vec<usize> = (0..ds.len()).collect();
        assert_eq!(summarize(&ds, &visible).count, ds.len());
    }
}
