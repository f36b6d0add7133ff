//! In-memory file system for fast, deterministic tests.

use crate::errors::AnalysisError;
use crate::io::traits::{FileEnumerator, FileSystem};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone)]
enum MockEntry {
    Readable(String),
    Unreadable,
}

/// Mock file system implementing [`FileSystem`] and [`FileEnumerator`].
///
/// Files are listed in insertion order, which makes the matrix row order of
/// a test fully predictable.
///
/// # Example
///
/// ```rust
/// use mainseq::testkit::MockFileSystem;
/// use mainseq::io::traits::FileEnumerator;
/// use std::path::Path;
///
/// let fs = MockFileSystem::new()
///     .with_file("src/b.h", "")
///     .with_file("src/a.h", "#include \"b.h\"");
/// let files = fs.list_user_files(Path::new("src")).unwrap();
/// assert_eq!(files[0], Path::new("src/b.h"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    files: Arc<RwLock<Vec<(PathBuf, MockEntry)>>>,
    dirs: Arc<RwLock<HashSet<PathBuf>>>,
    recursive: bool,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a readable file.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path.into(), MockEntry::Readable(content.into()));
        self
    }

    /// Add several readable files at once.
    pub fn with_files<'a>(mut self, files: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        for (path, content) in files {
            self = self.with_file(path, content);
        }
        self
    }

    /// List nested files too, like a recursive `FileWalker`.
    pub fn with_recursive_listing(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Add a file that is listed but fails on read (permission denied).
    pub fn with_unreadable_file(self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), MockEntry::Unreadable);
        self
    }

    /// Register an empty directory.
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.dirs.write().expect("Lock poisoned").insert(path.into());
        self
    }

    fn has_dir(&self, path: &Path) -> bool {
        if self.dirs.read().expect("Lock poisoned").contains(path) {
            return true;
        }
        self.files
            .read()
            .expect("Lock poisoned")
            .iter()
            .any(|(file_path, _)| file_path.starts_with(path) && file_path != path)
    }

    fn insert(&self, path: PathBuf, entry: MockEntry) {
        let mut files = self.files.write().expect("Lock poisoned");
        match files.iter_mut().find(|(p, _)| *p == path) {
            Some(existing) => existing.1 = entry,
            None => files.push((path, entry)),
        }
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, AnalysisError> {
        let files = self.files.read().expect("Lock poisoned");
        match files.iter().find(|(p, _)| p == path) {
            Some((_, MockEntry::Readable(content))) => Ok(content.clone()),
            Some((_, MockEntry::Unreadable)) => Err(AnalysisError::io_with_path(
                "Failed to read file: permission denied",
                path,
            )),
            None => Err(AnalysisError::io(format!(
                "File not found: {}",
                path.display()
            ))),
        }
    }
}

impl FileEnumerator for MockFileSystem {
    fn list_user_files(&self, directory: &Path) -> Result<Vec<PathBuf>, AnalysisError> {
        if !self.has_dir(directory) {
            return Err(AnalysisError::io_with_path(
                "directory does not exist",
                directory,
            ));
        }
        Ok(self
            .files
            .read()
            .expect("Lock poisoned")
            .iter()
            .filter(|(p, _)| {
                if self.recursive {
                    p.starts_with(directory)
                } else {
                    p.parent() == Some(directory)
                }
            })
            .map(|(p, _)| p.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_and_replace() {
        let fs = MockFileSystem::new().with_file("a.h", "one");
        assert_eq!(fs.read_to_string(Path::new("a.h")).unwrap(), "one");
        let fs = fs.with_file("a.h", "two");
        assert_eq!(fs.read_to_string(Path::new("a.h")).unwrap(), "two");
    }

    #[test]
    fn test_unreadable_file_is_listed_but_fails() {
        let fs = MockFileSystem::new().with_unreadable_file("src/x.h");
        assert!(fs.read_to_string(Path::new("src/x.h")).is_err());
        assert_eq!(fs.list_user_files(Path::new("src")).unwrap().len(), 1);
    }

    #[test]
    fn test_listing_is_non_recursive_and_ordered() {
        let fs = MockFileSystem::new().with_files(vec![
            ("src/z.h", ""),
            ("src/nested/y.h", ""),
            ("src/a.h", ""),
        ]);
        let files = fs.list_user_files(Path::new("src")).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("src/z.h"), PathBuf::from("src/a.h")]
        );
    }

    #[test]
    fn test_recursive_listing_includes_nested_files() {
        let fs = MockFileSystem::new()
            .with_files(vec![("src/a/util.h", ""), ("src/b/util.h", "")])
            .with_recursive_listing();
        let files = fs.list_user_files(Path::new("src")).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("src/a/util.h"), PathBuf::from("src/b/util.h")]
        );
    }

    #[test]
    fn test_missing_directory_errors() {
        let fs = MockFileSystem::new();
        assert!(fs.list_user_files(Path::new("nowhere")).is_err());
        let fs = fs.with_dir("empty");
        assert!(fs.list_user_files(Path::new("empty")).unwrap().is_empty());
    }
}
