//! File-level dependency extraction.
//!
//! [`IncludeExtractor::extract`] reads one file through a [`FileSystem`] and
//! returns an [`ExtractionOutcome`]. A read failure is not an error: the
//! outcome carries the diagnostic and the caller decides whether to log it.
//! [`get_includes_of_file`] is the convenience form that logs the warning
//! and falls back to empty include lists.

use super::includes::split_includes;
use crate::core::IncludeLists;
use crate::io::traits::FileSystem;
use std::path::{Path, PathBuf};

/// Warning emitted when a source file cannot be read.
pub const UNREADABLE_FILE_WARNING: &str = "could not read file, returning default values";

/// Result of extracting includes from one file.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    Extracted(IncludeLists),
    Unreadable { path: PathBuf, reason: String },
}

impl ExtractionOutcome {
    pub fn is_unreadable(&self) -> bool {
        matches!(self, Self::Unreadable { .. })
    }

    /// Human readable warning for an unreadable file.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::Extracted(_) => None,
            Self::Unreadable { path, reason } => Some(format!(
                "{} ({}: {})",
                UNREADABLE_FILE_WARNING,
                display_path(path),
                reason
            )),
        }
    }

    /// Include lists, empty for an unreadable file.
    pub fn into_lists(self) -> IncludeLists {
        match self {
            Self::Extracted(lists) => lists,
            Self::Unreadable { .. } => IncludeLists::default(),
        }
    }

    /// Emit the warning through `log` if there is one and return the lists.
    pub fn log_and_into_lists(self) -> IncludeLists {
        if let Some(diagnostic) = self.diagnostic() {
            log::warn!("{}", diagnostic);
        }
        self.into_lists()
    }
}

fn display_path(path: &Path) -> String {
    if path.as_os_str().is_empty() {
        "<empty path>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Extracts include directives from files of one file system.
pub struct IncludeExtractor<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
}

impl<'a, F: FileSystem + ?Sized> IncludeExtractor<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    pub fn extract(&self, path: &Path) -> ExtractionOutcome {
        match self.fs.read_to_string(path) {
            Ok(content) => ExtractionOutcome::Extracted(split_includes(&content)),
            Err(e) => ExtractionOutcome::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        }
    }
}

/// `(user_includes, std_includes)` of `path`; logs a warning and returns
/// `([], [])` when the file cannot be read.
pub fn get_includes_of_file<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
) -> (Vec<String>, Vec<String>) {
    IncludeExtractor::new(fs)
        .extract(path)
        .log_and_into_lists()
        .into_pair()
}
