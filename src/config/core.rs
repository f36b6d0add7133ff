use crate::io::walker::DEFAULT_EXTENSIONS;
use crate::metrics::{AlignmentPolicy, DEFAULT_ZONE_BAND};
use serde::{Deserialize, Serialize};

/// Root configuration structure for mainseq
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MainseqConfig {
    /// Which files take part in the analysis
    #[serde(default)]
    pub scan: Option<ScanConfig>,

    /// Distance calculation settings
    #[serde(default)]
    pub distance: Option<DistanceConfig>,

    /// Thresholds used by `validate`
    #[serde(default)]
    pub thresholds: Option<ThresholdsConfig>,
}

impl MainseqConfig {
    pub fn scan(&self) -> ScanConfig {
        self.scan.clone().unwrap_or_default()
    }

    pub fn distance(&self) -> DistanceConfig {
        self.distance.clone().unwrap_or_default()
    }

    pub fn thresholds(&self) -> ThresholdsConfig {
        self.thresholds.clone().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// File extensions treated as user source files
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,

    /// Glob patterns of paths to skip
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            recursive: false,
            ignore: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistanceConfig {
    #[serde(default)]
    pub alignment: AlignmentPolicy,

    /// Half-width of the band around the main sequence
    #[serde(default = "default_zone_band")]
    pub zone_band: f64,
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            alignment: AlignmentPolicy::default(),
            zone_band: default_zone_band(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThresholdsConfig {
    /// Largest distance `validate` accepts for a single file
    #[serde(default = "default_max_distance")]
    pub max_distance: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            max_distance: default_max_distance(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_zone_band() -> f64 {
    DEFAULT_ZONE_BAND
}

fn default_max_distance() -> f64 {
    0.7
}
