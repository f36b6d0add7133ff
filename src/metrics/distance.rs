//! Distance from the main sequence: `D = |A + I - 1|`.
//!
//! `D = 0` lies on the main sequence `A + I = 1`; `D = 1` sits in one of the
//! two corners (zone of pain or zone of uselessness). With `A` and `I` in
//! `[0, 1]` the result is in `[0, 1]` as well.
//!
//! Instability and abstractness come from different producers, so their
//! labels are matched explicitly according to an [`AlignmentPolicy`].

use crate::core::{AbstractnessSeries, DistanceSeries, InstabilitySeries};
use crate::errors::AnalysisError;
use serde::{Deserialize, Serialize};

/// How instability and abstractness labels are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentPolicy {
    /// Both series must cover the same label set, else `IndexMismatch`
    #[default]
    Strict,
    /// Keep labels present in both; the rest is reported as unmatched
    Intersection,
}

/// Distance series together with the labels that could not be paired.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistanceOutcome {
    pub distance: DistanceSeries,
    /// Instability labels without an abstractness value
    pub missing_abstractness: Vec<String>,
    /// Abstractness labels without an instability value
    pub missing_instability: Vec<String>,
}

impl DistanceOutcome {
    pub fn is_complete(&self) -> bool {
        self.missing_abstractness.is_empty() && self.missing_instability.is_empty()
    }
}

/// `|abstractness + instability - 1|`
pub fn calculate_distance(abstractness: f64, instability: f64) -> f64 {
    (abstractness + instability - 1.0).abs()
}

/// Distance per label, ordered like `instability`.
///
/// # Errors
///
/// With [`AlignmentPolicy::Strict`], returns `AnalysisError::IndexMismatch`
/// when the label sets differ.
pub fn distance_series(
    instability: &InstabilitySeries,
    abstractness: &AbstractnessSeries,
    policy: AlignmentPolicy,
) -> Result<DistanceOutcome, AnalysisError> {
    let missing_abstractness = instability.labels_missing_from(abstractness);
    let missing_instability = abstractness.labels_missing_from(instability);

    if policy == AlignmentPolicy::Strict
        && (!missing_abstractness.is_empty() || !missing_instability.is_empty())
    {
        return Err(AnalysisError::IndexMismatch {
            missing_in_abstractness: missing_abstractness,
            missing_in_instability: missing_instability,
        });
    }

    let distance = instability
        .iter()
        .filter_map(|(label, &i)| {
            abstractness
                .get(label)
                .map(|&a| (label, calculate_distance(a, i)))
        })
        .collect();

    if !missing_abstractness.is_empty() {
        log::warn!(
            "No abstractness value for {} file(s): {}",
            missing_abstractness.len(),
            missing_abstractness.join(", ")
        );
    }

    Ok(DistanceOutcome {
        distance,
        missing_abstractness,
        missing_instability,
    })
}
