//! Error types for mainseq analysis operations.
//!
//! Library code returns [`AnalysisError`]; the command layer wraps it in
//! `anyhow::Error` with additional context. Only failures upstream of the
//! dependency matrix (missing root, unreadable config, misaligned series) are
//! surfaced here. An unreadable source file is recovered locally by the
//! extractor and never becomes an `AnalysisError`.
//!
//! # Example
//!
//! ```rust
//! use mainseq::errors::AnalysisError;
//!
//! let err = AnalysisError::io_with_path("directory does not exist", "/no/such/dir");
//! assert!(err.to_string().contains("/no/such/dir"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for mainseq operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// File system I/O errors (missing directory, permissions)
    #[error("I/O error: {message}{}", format_path(.path))]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration file or abstractness table errors
    #[error("Configuration error: {message}{}", format_path(.path))]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Instability and abstractness series do not share an index
    #[error(
        "Series index mismatch: missing abstractness for [{}], missing instability for [{}]",
        .missing_in_abstractness.join(", "),
        .missing_in_instability.join(", ")
    )]
    IndexMismatch {
        missing_in_abstractness: Vec<String>,
        missing_in_instability: Vec<String>,
    },

    /// A metric value outside its domain
    #[error("Invalid {metric} value {value} for '{label}' (expected a number in [0, 1])")]
    InvalidMetric {
        metric: &'static str,
        label: String,
        value: f64,
    },
}

fn format_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" (path: {})", p.display()))
        .unwrap_or_default()
}

impl AnalysisError {
    /// Create an I/O error with a message.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
        }
    }

    /// Create an I/O error with a message and path context.
    pub fn io_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error with path context.
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } | Self::Config { path, .. } => path.as_ref(),
            _ => None,
        }
    }

    /// Check if this is an I/O error.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a series alignment error.
    pub fn is_index_mismatch(&self) -> bool {
        matches!(self, Self::IndexMismatch { .. })
    }
}
