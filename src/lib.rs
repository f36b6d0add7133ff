//! Coupling metrics for C and C++ source trees.
//!
//! `mainseq` scans the `#include` directives of every source file in a
//! directory, arranges them into a dependency matrix, and derives Robert
//! Martin's package metrics from it: instability `I = Ce / (Ca + Ce)` and,
//! given per-file abstractness, the distance from the main sequence
//! `D = |A + I - 1|`.

pub mod abstractness;
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod extraction;
pub mod formatting;
pub mod io;
pub mod matrix;
pub mod metrics;
pub mod testkit;

pub use crate::abstractness::{AbstractnessFile, AbstractnessSource, TableAbstractness};
pub use crate::analysis::{
    Analysis, AnalysisOptions, AnalysisReport, ComponentAnalyzer, ComponentReport,
};
pub use crate::core::{
    AbstractnessSeries, DistanceSeries, IncludeKind, IncludeLists, IncludeReference,
    InstabilitySeries, LabeledSeries, SourceFile,
};
pub use crate::errors::AnalysisError;
pub use crate::extraction::{get_includes_of_file, IncludeExtractor};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
pub use crate::matrix::{DependencyMatrix, MatrixBuild, MatrixBuilder};
pub use crate::metrics::{
    calculate_distance, calculate_instability, distance_series, instability_series,
    AlignmentPolicy, Zone,
};
