//! Factories for test data.

use crate::core::{IncludeLists, LabeledSeries};

/// Build [`IncludeLists`] from string slices.
///
/// ```rust
/// use mainseq::testkit::include_lists;
///
/// let lists = include_lists(&["file1"], &["std_out"]);
/// assert_eq!(lists.user, vec!["file1"]);
/// ```
pub fn include_lists(user: &[&str], std: &[&str]) -> IncludeLists {
    IncludeLists::new(
        user.iter().map(|s| s.to_string()).collect(),
        std.iter().map(|s| s.to_string()).collect(),
    )
}

/// Build a `f64` series from parallel label and value slices.
pub fn series(labels: &[&str], values: &[f64]) -> LabeledSeries<f64> {
    assert_eq!(labels.len(), values.len(), "labels and values must align");
    LabeledSeries::from_pairs(labels.iter().copied().zip(values.iter().copied()))
}
