//! Matrix construction over real directories.

use indoc::indoc;
use mainseq::io::{FileWalker, RealFileSystem};
use mainseq::matrix::MatrixBuilder;
use mainseq::metrics::instability_series;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn scenario() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(&dir, "file0.cpp", "#include <std_lib>\n");
    write(&dir, "file1.cpp", "#include \"file1.cpp\"\n");
    write(
        &dir,
        "file2.cpp",
        indoc! {r#"
            #include "file1.cpp"
            #include "file2.cpp"
            #include <std_out>
        "#},
    );
    dir
}

#[test]
fn test_three_file_scenario() {
    let dir = scenario();
    let fs = RealFileSystem::new();
    let walker = FileWalker::new();
    let build = MatrixBuilder::new(&fs, &walker).build(dir.path()).unwrap();
    let matrix = &build.matrix;

    assert_eq!(matrix.shape(), (3, 5));
    assert_eq!(
        matrix.column_labels(),
        ["file0.cpp", "file1.cpp", "file2.cpp", "std_lib", "std_out"]
    );
    assert_eq!(
        matrix.to_dense(),
        vec![
            vec![0, 0, 0, 1, 0],
            vec![0, 1, 0, 0, 0],
            vec![0, 1, 1, 0, 1],
        ]
    );

    let instability = instability_series(matrix);
    assert_eq!(instability.get("file0.cpp"), Some(&1.0));
    assert_eq!(instability.get("file1.cpp"), Some(&0.0));
    assert_eq!(instability.get("file2.cpp"), Some(&1.0));
}

#[test]
fn test_rescan_is_identical() {
    let dir = scenario();
    let fs = RealFileSystem::new();
    let walker = FileWalker::new();
    let builder = MatrixBuilder::new(&fs, &walker);

    let first = builder.build(dir.path()).unwrap();
    let second = builder.build(dir.path()).unwrap();
    assert_eq!(first.matrix, second.matrix);
}

#[test]
fn test_new_std_include_adds_exactly_one_column() {
    let dir = scenario();
    let fs = RealFileSystem::new();
    let walker = FileWalker::new();
    let before = MatrixBuilder::new(&fs, &walker).build(dir.path()).unwrap();

    write(&dir, "file3.cpp", "#include \"file0.cpp\"\n#include <thread>\n");
    let after = MatrixBuilder::new(&fs, &walker).build(dir.path()).unwrap();

    // one more user row/column and one more external column
    assert_eq!(after.matrix.column_count(), before.matrix.column_count() + 2);
    let thread = after.matrix.column_of("thread").unwrap();
    let marked: Vec<usize> = after.matrix.column_rows(thread).collect();
    assert_eq!(marked, vec![3]);
}

#[test]
fn test_known_user_include_adds_no_column() {
    let dir = scenario();
    let fs = RealFileSystem::new();
    let walker = FileWalker::new();
    let before = MatrixBuilder::new(&fs, &walker).build(dir.path()).unwrap();

    write(&dir, "file3.cpp", "#include \"file0.cpp\"\n#include \"file2.cpp\"\n");
    let after = MatrixBuilder::new(&fs, &walker).build(dir.path()).unwrap();
    assert_eq!(
        after.matrix.external_labels(),
        before.matrix.external_labels()
    );
}

#[test]
fn test_empty_directory_gives_empty_matrix() {
    let dir = TempDir::new().unwrap();
    let fs = RealFileSystem::new();
    let walker = FileWalker::new();
    let build = MatrixBuilder::new(&fs, &walker).build(dir.path()).unwrap();
    assert_eq!(build.matrix.shape(), (0, 0));
    assert!(instability_series(&build.matrix).is_empty());
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let fs = RealFileSystem::new();
    let walker = FileWalker::new();
    let err = MatrixBuilder::new(&fs, &walker)
        .build(&dir.path().join("nope"))
        .unwrap_err();
    assert!(err.is_io_error());
}

#[test]
fn test_walker_filters_extensions_and_depth() {
    let dir = TempDir::new().unwrap();
    write(&dir, "a.h", "");
    write(&dir, "notes.txt", "#include <vector>\n");
    write(&dir, "nested/b.hpp", "#include \"a.h\"\n");

    let fs = RealFileSystem::new();
    let flat = MatrixBuilder::new(&fs, &FileWalker::new())
        .build(dir.path())
        .unwrap();
    assert_eq!(flat.matrix.row_labels(), ["a.h"]);

    let walker = FileWalker::new().recursive(true);
    let deep = MatrixBuilder::new(&fs, &walker).build(dir.path()).unwrap();
    assert_eq!(deep.matrix.row_labels(), ["a.h", "b.hpp"]);
    assert_eq!(deep.matrix.cell("b.hpp", "a.h"), Some(1));
}

#[test]
fn test_fixture_directory() {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/includes");
    let fs = RealFileSystem::new();
    let walker = FileWalker::new();
    let build = MatrixBuilder::new(&fs, &walker).build(&root).unwrap();

    assert_eq!(
        build.matrix.row_labels(),
        ["legacy.cpp", "lib1.hpp", "lib2.hpp", "source.cpp"]
    );
    assert_eq!(build.matrix.external_labels(), ["vector", "iostream"]);
    // legacy.cpp carries Latin-1 comments and still counts as readable
    assert!(build.warnings.is_empty());
    assert_eq!(build.matrix.cell("legacy.cpp", "lib1.hpp"), Some(1));

    let instability = instability_series(&build.matrix);
    // lib1: Ca = 3 (legacy, lib2, source), Ce = 1 (vector)
    assert_eq!(instability.get("lib1.hpp"), Some(&0.25));
    assert_eq!(instability.get("legacy.cpp"), Some(&1.0));
    // lib2: Ca = 1 (source), Ce = 1 (lib1)
    assert_eq!(instability.get("lib2.hpp"), Some(&0.5));
    assert_eq!(instability.get("source.cpp"), Some(&1.0));
}
