//! Main sequence zone classification.

use super::distance::calculate_distance;
use serde::{Deserialize, Serialize};

/// Default half-width of the band around `A + I = 1` counted as on the main sequence.
pub const DEFAULT_ZONE_BAND: f64 = 0.3;

/// Where a component sits on the abstractness/instability plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// Within the band around the main sequence
    MainSequence,
    /// Concrete and stable: rigid, painful to change
    ZoneOfPain,
    /// Abstract and unstable: abstractions nobody depends on
    ZoneOfUselessness,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::MainSequence => write!(f, "Main Sequence"),
            Zone::ZoneOfPain => write!(f, "Zone of Pain"),
            Zone::ZoneOfUselessness => write!(f, "Zone of Uselessness"),
        }
    }
}

/// Classify a component from its abstractness and instability.
pub fn classify(abstractness: f64, instability: f64, band: f64) -> Zone {
    if calculate_distance(abstractness, instability) <= band {
        Zone::MainSequence
    } else if abstractness + instability < 1.0 {
        Zone::ZoneOfPain
    } else {
        Zone::ZoneOfUselessness
    }
}
