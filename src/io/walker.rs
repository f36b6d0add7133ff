use crate::errors::AnalysisError;
use crate::io::traits::FileEnumerator;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// C and C++ source and header extensions analyzed by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "cxx", "h", "hh", "hpp", "hxx", "inl"];

pub struct FileWalker {
    extensions: Vec<String>,
    ignore_patterns: Vec<glob::Pattern>,
    recursive: bool,
}

impl Default for FileWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl FileWalker {
    pub fn new() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            ignore_patterns: vec![],
            recursive: false,
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    /// Skip paths matching any of `patterns`.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Config` naming the first pattern that is not a
    /// valid glob.
    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self, AnalysisError> {
        self.ignore_patterns = patterns
            .iter()
            .map(String::as_str)
            .map(compile_ignore_pattern)
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Walk `root` and return matching files sorted by path.
    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>, AnalysisError> {
        if !root.exists() {
            return Err(AnalysisError::io_with_path("directory does not exist", root));
        }
        if !root.is_dir() {
            return Err(AnalysisError::io_with_path("not a directory", root));
        }

        let mut builder = WalkBuilder::new(root);
        builder.hidden(false).git_ignore(true);
        if !self.recursive {
            builder.max_depth(Some(1));
        }

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = entry.map_err(|e| {
                AnalysisError::io_with_path(format!("Failed to list directory: {}", e), root)
            })?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        log::debug!("Found {} user files under {}", files.len(), root.display());
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = ext.to_string_lossy().to_ascii_lowercase();
        if !self.extensions.iter().any(|allowed| *allowed == ext) {
            return false;
        }

        let path_str = path.to_string_lossy();
        !self
            .ignore_patterns
            .iter()
            .any(|pattern| pattern.matches(&path_str))
    }
}

pub(crate) fn compile_ignore_pattern(pattern: &str) -> Result<glob::Pattern, AnalysisError> {
    glob::Pattern::new(pattern).map_err(|e| {
        AnalysisError::config(format!("invalid ignore pattern '{}': {}", pattern, e))
    })
}

impl FileEnumerator for FileWalker {
    fn list_user_files(&self, directory: &Path) -> Result<Vec<PathBuf>, AnalysisError> {
        self.walk(directory)
    }
}

/// Short display label of a file: its bare file name.
pub fn extract_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_label_strips_directories() {
        assert_eq!(extract_label(Path::new("src/net/socket.hpp")), "socket.hpp");
        assert_eq!(extract_label(Path::new("main.cpp")), "main.cpp");
    }

    #[test]
    fn test_extract_label_without_file_name() {
        assert_eq!(extract_label(Path::new("..")), "..");
    }

    #[test]
    fn test_should_process_filters_extensions() {
        let walker = FileWalker::new();
        assert!(walker.should_process(Path::new("a/b.hpp")));
        assert!(walker.should_process(Path::new("a/b.CPP")));
        assert!(!walker.should_process(Path::new("a/b.rs")));
        assert!(!walker.should_process(Path::new("Makefile")));
    }

    #[test]
    fn test_with_extensions_normalizes_dots() {
        let walker = FileWalker::new().with_extensions(vec![".ipp".into(), "H".into()]);
        assert!(walker.should_process(Path::new("x.ipp")));
        assert!(walker.should_process(Path::new("x.h")));
        assert!(!walker.should_process(Path::new("x.cpp")));
    }

    #[test]
    fn test_ignore_patterns() {
        let walker = FileWalker::new()
            .with_ignore_patterns(&["**/gen/**".to_string()])
            .unwrap();
        assert!(!walker.should_process(Path::new("src/gen/out.h")));
        assert!(walker.should_process(Path::new("src/core/out.h")));
    }

    #[test]
    fn test_invalid_ignore_pattern_is_rejected() {
        let err = FileWalker::new()
            .with_ignore_patterns(&["**/gen/**".to_string(), "src/[".to_string()])
            .err()
            .unwrap();
        assert!(matches!(err, AnalysisError::Config { .. }));
        assert!(err.to_string().contains("src/["));
    }
}
