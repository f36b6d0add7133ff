pub mod series;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub use series::{LabeledSeries, SeriesEntry};

/// Per-file instability values, indexed by file label.
pub type InstabilitySeries = LabeledSeries<f64>;
/// Externally supplied abstractness values, indexed by file label.
pub type AbstractnessSeries = LabeledSeries<f64>;
/// Distance from the main sequence, indexed by file label.
pub type DistanceSeries = LabeledSeries<f64>;

/// How an include directive names its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncludeKind {
    /// `#include "name"`: a file inside the analyzed codebase
    UserLib,
    /// `#include <name>`: a standard-library or third-party unit
    StdLib,
}

impl fmt::Display for IncludeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncludeKind::UserLib => write!(f, "user"),
            IncludeKind::StdLib => write!(f, "std"),
        }
    }
}

/// A single include directive found in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncludeReference {
    pub name: String,
    pub kind: IncludeKind,
    /// 1-based line the directive was found on
    pub line: usize,
}

impl IncludeReference {
    pub fn user(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            kind: IncludeKind::UserLib,
            line,
        }
    }

    pub fn std(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            kind: IncludeKind::StdLib,
            line,
        }
    }
}

/// Include names of one file split by kind. Order and duplicates are preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeLists {
    pub user: Vec<String>,
    pub std: Vec<String>,
}

impl IncludeLists {
    pub fn new(user: Vec<String>, std: Vec<String>) -> Self {
        Self { user, std }
    }

    pub fn from_references(references: &[IncludeReference]) -> Self {
        references
            .iter()
            .fold(Self::default(), |mut lists, reference| {
                match reference.kind {
                    IncludeKind::UserLib => lists.user.push(reference.name.clone()),
                    IncludeKind::StdLib => lists.std.push(reference.name.clone()),
                }
                lists
            })
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_empty() && self.std.is_empty()
    }

    /// All include names, user includes first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.user.iter().chain(self.std.iter()).map(String::as_str)
    }

    /// Tuple form `(user, std)`.
    pub fn into_pair(self) -> (Vec<String>, Vec<String>) {
        (self.user, self.std)
    }
}

/// A user source file taking part in the analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub label: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_lists_from_references_preserves_order() {
        let refs = vec![
            IncludeReference::user("b.h", 1),
            IncludeReference::std("vector", 2),
            IncludeReference::user("a.h", 3),
            IncludeReference::user("b.h", 4),
        ];
        let lists = IncludeLists::from_references(&refs);
        assert_eq!(lists.user, vec!["b.h", "a.h", "b.h"]);
        assert_eq!(lists.std, vec!["vector"]);
    }

    #[test]
    fn test_include_lists_names_user_first() {
        let lists = IncludeLists::new(vec!["x.h".into()], vec!["map".into()]);
        let names: Vec<&str> = lists.names().collect();
        assert_eq!(names, vec!["x.h", "map"]);
        assert!(!lists.is_empty());
        assert!(IncludeLists::default().is_empty());
    }

    #[test]
    fn test_include_kind_display() {
        assert_eq!(IncludeKind::UserLib.to_string(), "user");
        assert_eq!(IncludeKind::StdLib.to_string(), "std");
    }
}
