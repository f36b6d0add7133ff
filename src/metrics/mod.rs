//! Component metrics derived from the dependency matrix.
//!
//! Instability comes from the matrix, abstractness from an external source,
//! and distance combines the two.

pub mod distance;
pub mod instability;
pub mod zones;

pub use distance::{calculate_distance, distance_series, AlignmentPolicy, DistanceOutcome};
pub use instability::{
    calculate_instability, coupling_profile, instability_series, ComponentCoupling,
};
pub use zones::{classify, Zone, DEFAULT_ZONE_BAND};
