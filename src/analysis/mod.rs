//! End-to-end component analysis of one directory.
//!
//! Data flows one way: files → dependency matrix → instability → distance →
//! report. Every run owns its matrix and series; nothing is cached between
//! runs, so two runs over different directories are independent.
//!
//! ```rust
//! use mainseq::analysis::{AnalysisOptions, ComponentAnalyzer};
//! use mainseq::abstractness::TableAbstractness;
//! use mainseq::testkit::{series, MockFileSystem};
//! use std::path::Path;
//!
//! let fs = MockFileSystem::new()
//!     .with_file("src/app.cpp", "#include \"api.h\"\n#include <vector>\n")
//!     .with_file("src/api.h", "");
//! let abstractness = TableAbstractness::new(series(&["app.cpp", "api.h"], &[0.0, 1.0])).unwrap();
//!
//! let analysis = ComponentAnalyzer::new(&fs, &fs, AnalysisOptions::default())
//!     .run(Path::new("src"), Some(&abstractness))
//!     .unwrap();
//! let distance = &analysis.distance.as_ref().unwrap().distance;
//! assert_eq!(distance.get("app.cpp"), Some(&0.0));
//! assert_eq!(distance.get("api.h"), Some(&0.0));
//! ```

pub mod report;

pub use report::{AnalysisReport, AnalysisSummary, ComponentReport};

use crate::abstractness::AbstractnessSource;
use crate::config::MainseqConfig;
use crate::core::{AbstractnessSeries, InstabilitySeries};
use crate::errors::AnalysisError;
use crate::io::traits::{FileEnumerator, FileSystem};
use crate::matrix::{MatrixBuild, MatrixBuilder};
use crate::metrics::{
    coupling_profile, distance_series, AlignmentPolicy, ComponentCoupling, DistanceOutcome,
    DEFAULT_ZONE_BAND,
};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOptions {
    pub alignment: AlignmentPolicy,
    pub zone_band: f64,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            alignment: AlignmentPolicy::default(),
            zone_band: DEFAULT_ZONE_BAND,
        }
    }
}

impl AnalysisOptions {
    pub fn from_config(config: &MainseqConfig) -> Self {
        let distance = config.distance();
        Self {
            alignment: distance.alignment,
            zone_band: distance.zone_band,
        }
    }

    pub fn with_alignment(mut self, alignment: AlignmentPolicy) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Everything one analysis run produced.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub root: PathBuf,
    pub build: MatrixBuild,
    pub coupling: Vec<ComponentCoupling>,
    pub instability: InstabilitySeries,
    pub abstractness: Option<AbstractnessSeries>,
    pub distance: Option<DistanceOutcome>,
    pub options: AnalysisOptions,
}

impl Analysis {
    pub fn report(&self) -> AnalysisReport {
        AnalysisReport::from_analysis(self)
    }
}

pub struct ComponentAnalyzer<'a> {
    fs: &'a dyn FileSystem,
    enumerator: &'a dyn FileEnumerator,
    options: AnalysisOptions,
}

impl<'a> ComponentAnalyzer<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        enumerator: &'a dyn FileEnumerator,
        options: AnalysisOptions,
    ) -> Self {
        Self {
            fs,
            enumerator,
            options,
        }
    }

    /// Run the analysis. Distance is only computed when an abstractness
    /// source is given.
    pub fn run(
        &self,
        root: &Path,
        abstractness: Option<&dyn AbstractnessSource>,
    ) -> Result<Analysis, AnalysisError> {
        let build = MatrixBuilder::new(self.fs, self.enumerator).build(root)?;
        let coupling = coupling_profile(&build.matrix);
        let instability: InstabilitySeries = coupling
            .iter()
            .map(|c| (c.label.clone(), c.instability))
            .collect();

        let abstractness = abstractness
            .map(|source| source.abstractness(root))
            .transpose()?;
        let distance = abstractness
            .as_ref()
            .map(|a| distance_series(&instability, a, self.options.alignment))
            .transpose()?;

        Ok(Analysis {
            root: root.to_path_buf(),
            build,
            coupling,
            instability,
            abstractness,
            distance,
            options: self.options,
        })
    }
}
