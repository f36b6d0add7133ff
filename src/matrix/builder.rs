use super::DependencyMatrix;
use crate::core::{IncludeLists, SourceFile};
use crate::errors::AnalysisError;
use crate::extraction::IncludeExtractor;
use crate::io::traits::{FileEnumerator, FileSystem};
use crate::io::walker::extract_label;
use std::collections::HashSet;
use std::path::Path;

/// Output of one matrix build.
#[derive(Debug, Clone)]
pub struct MatrixBuild {
    pub matrix: DependencyMatrix,
    /// User files in row order
    pub files: Vec<SourceFile>,
    /// One diagnostic per file that could not be read
    pub warnings: Vec<String>,
}

/// Pure matrix construction from per-file include lists.
///
/// `includes[i]` belongs to `labels[i]`. External columns are grown first, in
/// first-discovery order, then every row is filled: a cell is set when the
/// file's user or standard-library include list names the column. Includes
/// that name neither a user file nor a standard-library unit are dropped.
pub fn from_includes(labels: Vec<String>, includes: &[IncludeLists]) -> DependencyMatrix {
    debug_assert_eq!(labels.len(), includes.len());
    let mut matrix = DependencyMatrix::with_user_labels(labels);

    for lists in includes {
        for name in &lists.std {
            matrix.ensure_column(name);
        }
    }

    for (row, lists) in includes.iter().enumerate() {
        for name in lists.names() {
            if let Some(column) = matrix.column_of(name) {
                matrix.mark(row, column);
            }
        }
    }

    matrix
}

type Labeler<'a> = Box<dyn Fn(&Path) -> String + 'a>;

/// Builds a [`DependencyMatrix`] for all user files of a directory.
pub struct MatrixBuilder<'a> {
    fs: &'a dyn FileSystem,
    enumerator: &'a dyn FileEnumerator,
    labeler: Labeler<'a>,
}

impl<'a> MatrixBuilder<'a> {
    pub fn new(fs: &'a dyn FileSystem, enumerator: &'a dyn FileEnumerator) -> Self {
        Self {
            fs,
            enumerator,
            labeler: Box::new(extract_label),
        }
    }

    /// Replace the default file-name labeler.
    pub fn with_labeler<L>(mut self, labeler: L) -> Self
    where
        L: Fn(&Path) -> String + 'a,
    {
        self.labeler = Box::new(labeler);
        self
    }

    /// # Errors
    ///
    /// Fails only when the directory cannot be listed. Unreadable files are
    /// recorded in [`MatrixBuild::warnings`] and contribute an empty row.
    pub fn build(&self, directory: &Path) -> Result<MatrixBuild, AnalysisError> {
        let paths = self.enumerator.list_user_files(directory)?;
        let files: Vec<SourceFile> = paths
            .into_iter()
            .map(|path| {
                let label = (self.labeler)(&path);
                SourceFile::new(path, label)
            })
            .collect();
        warn_duplicate_labels(&files);

        let extractor = IncludeExtractor::new(self.fs);
        let mut warnings = Vec::new();
        let includes: Vec<IncludeLists> = files
            .iter()
            .map(|file| {
                let outcome = extractor.extract(file.path());
                if let Some(diagnostic) = outcome.diagnostic() {
                    log::warn!("{}", diagnostic);
                    warnings.push(diagnostic);
                }
                outcome.into_lists()
            })
            .collect();

        let labels = files.iter().map(|f| f.label.clone()).collect();
        let matrix = from_includes(labels, &includes);
        log::info!(
            "Built {}x{} dependency matrix for {} ({} edges, {} external)",
            matrix.row_count(),
            matrix.column_count(),
            directory.display(),
            matrix.edge_count(),
            matrix.external_labels().len()
        );

        Ok(MatrixBuild {
            matrix,
            files,
            warnings,
        })
    }
}

fn warn_duplicate_labels(files: &[SourceFile]) {
    let mut seen = HashSet::new();
    for file in files {
        if !seen.insert(file.label.as_str()) {
            log::warn!(
                "Duplicate file label '{}' ({}); lookups resolve to the first file",
                file.label,
                file.path.display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{include_lists, MockFileSystem};
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn file_labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("file{}", i)).collect()
    }

    #[test]
    fn test_no_includes_keeps_zero_square_matrix() {
        let includes = vec![IncludeLists::default(); 3];
        let matrix = from_includes(file_labels(3), &includes);
        assert_eq!(matrix.shape(), (3, 3));
        assert_eq!(matrix.to_dense(), vec![vec![0u8; 3]; 3]);
    }

    #[test]
    fn test_includes_fill_user_and_external_columns() {
        let includes = vec![
            include_lists(&[], &["std_lib"]),
            include_lists(&["file1"], &[]),
            include_lists(&["file1", "file2"], &["std_out"]),
        ];
        let matrix = from_includes(file_labels(3), &includes);

        assert_eq!(matrix.shape(), (3, 5));
        assert_eq!(
            matrix.column_labels(),
            &["file0", "file1", "file2", "std_lib", "std_out"]
        );
        assert_eq!(
            matrix.to_dense(),
            vec![
                vec![0, 0, 0, 1, 0],
                vec![0, 1, 0, 0, 0],
                vec![0, 1, 1, 0, 1],
            ]
        );
    }

    #[test]
    fn test_unknown_user_include_is_dropped() {
        let includes = vec![include_lists(&["elsewhere.h"], &[])];
        let matrix = from_includes(file_labels(1), &includes);
        assert_eq!(matrix.shape(), (1, 1));
        assert_eq!(matrix.edge_count(), 0);
    }

    #[test]
    fn test_repeated_std_include_adds_one_column() {
        let includes = vec![
            include_lists(&[], &["vector", "map"]),
            include_lists(&[], &["map", "vector", "vector"]),
        ];
        let matrix = from_includes(file_labels(2), &includes);
        assert_eq!(matrix.external_labels(), &["vector", "map"]);
        assert_eq!(matrix.column_rows(2).count(), 2);
    }

    #[test]
    fn test_bracket_include_of_user_file_uses_user_column() {
        let includes = vec![include_lists(&[], &["file1"]), IncludeLists::default()];
        let matrix = from_includes(file_labels(2), &includes);
        assert_eq!(matrix.shape(), (2, 2));
        assert_eq!(matrix.get(0, 1), 1);
    }

    #[test]
    fn test_builder_with_labeler_sequence() {
        let fs = MockFileSystem::new().with_files(vec![
            ("src/a.cpp", "#include <std_lib>\n"),
            ("src/b.cpp", "#include \"file1\"\n"),
            ("src/c.cpp", "#include \"file1\"\n#include \"file2\"\n#include <std_out>\n"),
        ]);
        let counter = Cell::new(0);
        let build = MatrixBuilder::new(&fs, &fs)
            .with_labeler(|_| {
                let i = counter.get();
                counter.set(i + 1);
                format!("file{}", i)
            })
            .build(Path::new("src"))
            .unwrap();

        assert_eq!(build.matrix.row_labels(), &["file0", "file1", "file2"]);
        assert_eq!(build.matrix.shape(), (3, 5));
        assert!(build.warnings.is_empty());
        assert_eq!(build.files[2].path, Path::new("src/c.cpp"));
    }

    #[test]
    fn test_builder_records_unreadable_file_and_continues() {
        let fs = MockFileSystem::new()
            .with_file("src/a.h", "#include \"b.h\"\n")
            .with_unreadable_file("src/b.h")
            .with_file("src/c.h", "#include <set>\n");
        let build = MatrixBuilder::new(&fs, &fs)
            .build(Path::new("src"))
            .unwrap();

        assert_eq!(build.warnings.len(), 1);
        assert!(build.warnings[0].contains("returning default values"));
        assert_eq!(build.matrix.shape(), (3, 4));
        assert_eq!(build.matrix.cell("a.h", "b.h"), Some(1));
        assert_eq!(build.matrix.row_columns(1).count(), 0);
    }

    #[test]
    fn test_builder_missing_directory_is_error() {
        let fs = MockFileSystem::new();
        let result = MatrixBuilder::new(&fs, &fs).build(Path::new("nope"));
        assert!(result.unwrap_err().is_io_error());
    }

    #[test]
    fn test_builder_empty_directory_gives_empty_matrix() {
        let fs = MockFileSystem::new().with_dir("empty");
        let build = MatrixBuilder::new(&fs, &fs)
            .build(Path::new("empty"))
            .unwrap();
        assert_eq!(build.matrix.shape(), (0, 0));
        assert!(build.files.is_empty());
    }
}
