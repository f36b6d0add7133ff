//! Abstractness supply.
//!
//! Abstractness is an upstream metric computed outside mainseq (typically the
//! ratio of abstract declarations to all declarations of a component). It
//! enters the analysis through [`AbstractnessSource`]; the bundled sources
//! read it from memory or from a JSON/TOML table keyed by file label.
//!
//! Accepted file layouts:
//!
//! ```text
//! // JSON object
//! { "socket.hpp": 0.75, "socket.cpp": 0.0 }
//! // JSON entry list (the shape mainseq itself emits for series)
//! [ { "label": "socket.hpp", "value": 0.75 } ]
//! # TOML table
//! "socket.hpp" = 0.75
//! ```

use crate::core::AbstractnessSeries;
use crate::errors::AnalysisError;
use crate::io::real::RealFileSystem;
use crate::io::traits::FileSystem;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Supplies the abstractness series of the files under `root`.
pub trait AbstractnessSource {
    fn abstractness(&self, root: &Path) -> Result<AbstractnessSeries, AnalysisError>;
}

/// A fixed, in-memory abstractness table.
#[derive(Debug, Clone, Default)]
pub struct TableAbstractness {
    series: AbstractnessSeries,
}

impl TableAbstractness {
    /// # Errors
    ///
    /// Rejects values outside `[0, 1]` and NaN.
    pub fn new(series: AbstractnessSeries) -> Result<Self, AnalysisError> {
        validate_series(&series)?;
        Ok(Self { series })
    }
}

impl AbstractnessSource for TableAbstractness {
    fn abstractness(&self, _root: &Path) -> Result<AbstractnessSeries, AnalysisError> {
        Ok(self.series.clone())
    }
}

/// Abstractness table stored in a JSON or TOML file.
///
/// Files ending in `.toml` are parsed as TOML, everything else as JSON.
#[derive(Debug, Clone)]
pub struct AbstractnessFile<F: FileSystem = RealFileSystem> {
    path: PathBuf,
    fs: F,
}

impl AbstractnessFile<RealFileSystem> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(path, RealFileSystem::new())
    }
}

impl<F: FileSystem> AbstractnessFile<F> {
    pub fn with_fs(path: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<F: FileSystem> AbstractnessSource for AbstractnessFile<F> {
    fn abstractness(&self, _root: &Path) -> Result<AbstractnessSeries, AnalysisError> {
        let contents = self.fs.read_to_string(&self.path)?;
        let is_toml = self
            .path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let parsed = if is_toml {
            parse_abstractness_toml(&contents)
        } else {
            parse_abstractness_json(&contents)
        };
        let series = parsed.map_err(|e| match e {
            AnalysisError::Config { message, .. } => {
                AnalysisError::config_with_path(message, &self.path)
            }
            other => other,
        })?;

        log::debug!(
            "Loaded {} abstractness values from {}",
            series.len(),
            self.path.display()
        );
        Ok(series)
    }
}

#[derive(Deserialize)]
struct TableEntry {
    label: String,
    value: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonTable {
    Entries(Vec<TableEntry>),
    Map(BTreeMap<String, f64>),
}

/// Parse a JSON object or entry list into a validated series.
pub fn parse_abstractness_json(contents: &str) -> Result<AbstractnessSeries, AnalysisError> {
    let table: JsonTable = serde_json::from_str(contents)
        .map_err(|e| AnalysisError::config(format!("Failed to parse abstractness JSON: {}", e)))?;
    let series: AbstractnessSeries = match table {
        JsonTable::Entries(entries) => entries.into_iter().map(|e| (e.label, e.value)).collect(),
        JsonTable::Map(map) => map.into_iter().collect(),
    };
    validate_series(&series)?;
    Ok(series)
}

/// Parse a flat TOML table of `label = value` pairs into a validated series.
pub fn parse_abstractness_toml(contents: &str) -> Result<AbstractnessSeries, AnalysisError> {
    let map: BTreeMap<String, f64> = toml::from_str(contents)
        .map_err(|e| AnalysisError::config(format!("Failed to parse abstractness TOML: {}", e)))?;
    let series: AbstractnessSeries = map.into_iter().collect();
    validate_series(&series)?;
    Ok(series)
}

fn validate_series(series: &AbstractnessSeries) -> Result<(), AnalysisError> {
    match series
        .iter()
        .find(|(_, &value)| !(0.0..=1.0).contains(&value))
    {
        Some((label, &value)) => Err(AnalysisError::InvalidMetric {
            metric: "abstractness",
            label: label.to_string(),
            value,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{series, MockFileSystem};

    #[test]
    fn test_parse_json_object() {
        let series = parse_abstractness_json(r#"{"b.h": 0.5, "a.h": 1.0}"#).unwrap();
        assert_eq!(series.get("a.h"), Some(&1.0));
        assert_eq!(series.get("b.h"), Some(&0.5));
    }

    #[test]
    fn test_parse_json_entries_keep_order() {
        let series = parse_abstractness_json(
            r#"[{"label": "z.h", "value": 0.1}, {"label": "a.h", "value": 0.2}]"#,
        )
        .unwrap();
        let labels: Vec<&str> = series.labels().collect();
        assert_eq!(labels, vec!["z.h", "a.h"]);
    }

    #[test]
    fn test_parse_toml_table() {
        let series = parse_abstractness_toml("\"a.h\" = 0.25\n\"b.cpp\" = 0.0\n").unwrap();
        assert_eq!(series.get("a.h"), Some(&0.25));
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_out_of_range_value_rejected() {
        let err = parse_abstractness_json(r#"{"a.h": 1.5}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidMetric { value, .. } if value == 1.5));
        assert!(TableAbstractness::new(series(&["x"], &[-0.1])).is_err());
        assert!(TableAbstractness::new(series(&["x"], &[f64::NAN])).is_err());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = parse_abstractness_json("not json").unwrap_err();
        assert!(matches!(err, AnalysisError::Config { .. }));
    }

    #[test]
    fn test_file_source_reads_through_file_system() {
        let fs = MockFileSystem::new().with_file("metrics/abstractness.toml", "\"a.h\" = 0.5\n");
        let source = AbstractnessFile::with_fs("metrics/abstractness.toml", fs);
        let series = source.abstractness(Path::new("src")).unwrap();
        assert_eq!(series.get("a.h"), Some(&0.5));
    }

    #[test]
    fn test_file_source_parse_error_carries_path() {
        let fs = MockFileSystem::new().with_file("abs.json", "{");
        let err = AbstractnessFile::with_fs("abs.json", fs)
            .abstractness(Path::new("."))
            .unwrap_err();
        assert_eq!(err.path(), Some(&PathBuf::from("abs.json")));
    }

    #[test]
    fn test_table_source_returns_series() {
        let table = TableAbstractness::new(series(&["a.h"], &[0.3])).unwrap();
        assert_eq!(table.abstractness(Path::new(".")).unwrap().get("a.h"), Some(&0.3));
    }
}
