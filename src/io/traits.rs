//! I/O trait definitions for mainseq analysis operations.
//!
//! The dependency extractor and matrix builder only see these traits, so the
//! lexical and matrix logic can be exercised against an in-memory file system
//! (see [`crate::testkit::MockFileSystem`]) as well as the real one.
//!
//! # Example
//!
//! ```rust,ignore
//! use mainseq::io::traits::FileSystem;
//!
//! fn count_lines<F: FileSystem>(fs: &F, path: &Path) -> Result<usize, AnalysisError> {
//!     Ok(fs.read_to_string(path)?.lines().count())
//! }
//! ```

use crate::errors::AnalysisError;
use std::path::{Path, PathBuf};

/// Read access to source files.
///
/// Implementations should be thread-safe (`Send + Sync`) so independent
/// analysis runs can share one instance.
pub trait FileSystem: Send + Sync {
    /// Read a file's contents as text.
    ///
    /// Bytes that are not valid UTF-8 (Latin-1 comments in legacy sources)
    /// are replaced rather than rejected; include directives are ASCII.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Io` if the file cannot be opened or read.
    fn read_to_string(&self, path: &Path) -> Result<String, AnalysisError>;
}

/// Lists the user files of a directory.
///
/// The returned order is the canonical row/column order of the dependency
/// matrix, so implementations must return the same order for the same tree.
pub trait FileEnumerator {
    /// # Errors
    ///
    /// Returns `AnalysisError::Io` when `directory` is missing or unreadable.
    /// An existing directory without matching files yields an empty list.
    fn list_user_files(&self, directory: &Path) -> Result<Vec<PathBuf>, AnalysisError>;
}
