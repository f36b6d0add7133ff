use super::Analysis;
use crate::core::DistanceSeries;
use crate::metrics::{calculate_distance, classify, Zone};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Per-file line of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentReport {
    pub label: String,
    pub path: PathBuf,
    pub afferent: usize,
    pub efferent: usize,
    pub instability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abstractness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<Zone>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub file_count: usize,
    pub external_count: usize,
    pub edge_count: usize,
    pub mean_instability: Option<f64>,
    pub mean_distance: Option<f64>,
    pub max_distance: Option<f64>,
    /// Files outside the main sequence band
    pub files_off_main_sequence: usize,
}

/// Serializable result of one run, handed to the output writers.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub root: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub zone_band: f64,
    pub components: Vec<ComponentReport>,
    pub external_dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_abstractness: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_instability: Vec<String>,
    pub summary: AnalysisSummary,
}

impl AnalysisReport {
    pub fn from_analysis(analysis: &Analysis) -> Self {
        let band = analysis.options.zone_band;
        let distance = analysis.distance.as_ref().map(|d| &d.distance);

        // D is taken from each row's own instability; duplicate labels share
        // an abstractness value but not a coupling profile.
        let components: Vec<ComponentReport> = analysis
            .coupling
            .iter()
            .zip(analysis.build.files.iter())
            .map(|(coupling, file)| {
                let abstractness = distance
                    .filter(|d| d.contains(&coupling.label))
                    .and_then(|_| analysis.abstractness.as_ref())
                    .and_then(|a| a.get(&coupling.label).copied());
                let distance = abstractness.map(|a| calculate_distance(a, coupling.instability));
                ComponentReport {
                    label: coupling.label.clone(),
                    path: file.path.clone(),
                    afferent: coupling.afferent,
                    efferent: coupling.efferent,
                    instability: coupling.instability,
                    abstractness,
                    distance,
                    zone: abstractness.map(|a| classify(a, coupling.instability, band)),
                }
            })
            .collect();

        let distances: DistanceSeries = components
            .iter()
            .filter_map(|c| c.distance.map(|d| (c.label.clone(), d)))
            .collect();
        let summary = AnalysisSummary {
            file_count: components.len(),
            external_count: analysis.build.matrix.external_labels().len(),
            edge_count: analysis.build.matrix.edge_count(),
            mean_instability: analysis.instability.mean(),
            mean_distance: distances.mean(),
            max_distance: distances.max_entry().map(|e| e.value),
            files_off_main_sequence: components
                .iter()
                .filter(|c| matches!(c.zone, Some(z) if z != Zone::MainSequence))
                .count(),
        };

        let (missing_abstractness, missing_instability) = analysis
            .distance
            .as_ref()
            .map(|d| (d.missing_abstractness.clone(), d.missing_instability.clone()))
            .unwrap_or_default();

        Self {
            root: analysis.root.clone(),
            timestamp: Utc::now(),
            zone_band: band,
            components,
            external_dependencies: analysis.build.matrix.external_labels().to_vec(),
            warnings: analysis.build.warnings.clone(),
            missing_abstractness,
            missing_instability,
            summary,
        }
    }

    /// Ordered `(label, distance)` pairs for rendering; files without a
    /// distance are left out.
    pub fn distance_points(&self) -> Vec<(String, f64)> {
        self.components
            .iter()
            .filter_map(|c| c.distance.map(|d| (c.label.clone(), d)))
            .collect()
    }

    pub fn has_distance(&self) -> bool {
        self.components.iter().any(|c| c.distance.is_some())
    }

    /// Components whose distance exceeds `max_distance`.
    pub fn violations(&self, max_distance: f64) -> Vec<&ComponentReport> {
        self.components
            .iter()
            .filter(|c| c.distance.map(|d| d > max_distance).unwrap_or(false))
            .collect()
    }
}
