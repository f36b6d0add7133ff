//! Include-dependency matrix.
//!
//! Rows are the user files of one analysis run, in listing order. Columns are
//! the same user files in the same order, followed by every distinct
//! standard-library name in first-discovery order. A cell is 1 when the row's
//! file includes the column's name and 0 otherwise.
//!
//! Storage is one sorted set of set-column indices per row, plus a label
//! index for O(1) average lookup-or-create of external columns. Appending a
//! column never touches existing rows.

pub mod builder;

pub use builder::{from_includes, MatrixBuild, MatrixBuilder};

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DependencyMatrix {
    row_labels: Vec<String>,
    column_labels: Vec<String>,
    column_index: HashMap<String, usize>,
    rows: Vec<BTreeSet<usize>>,
}

impl DependencyMatrix {
    /// Square all-zero matrix over the given user-file labels.
    pub fn with_user_labels(labels: Vec<String>) -> Self {
        let mut column_index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            column_index.entry(label.clone()).or_insert(i);
        }
        Self {
            rows: vec![BTreeSet::new(); labels.len()],
            column_labels: labels.clone(),
            row_labels: labels,
            column_index,
        }
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    pub fn row_count(&self) -> usize {
        self.row_labels.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_labels.is_empty() && self.column_labels.is_empty()
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn column_labels(&self) -> &[String] {
        &self.column_labels
    }

    /// Column labels appended for standard-library includes.
    pub fn external_labels(&self) -> &[String] {
        &self.column_labels[self.row_count()..]
    }

    pub fn column_of(&self, label: &str) -> Option<usize> {
        self.column_index.get(label).copied()
    }

    /// Index of the column named `label`, appending an all-zero column when
    /// it does not exist yet. The flag is true when a column was created.
    pub fn ensure_column(&mut self, label: &str) -> (usize, bool) {
        if let Some(&column) = self.column_index.get(label) {
            return (column, false);
        }
        let column = self.column_labels.len();
        self.column_labels.push(label.to_string());
        self.column_index.insert(label.to_string(), column);
        (column, true)
    }

    /// Set cell `(row, column)` to 1.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is out of bounds.
    pub fn mark(&mut self, row: usize, column: usize) {
        assert!(
            column < self.column_count(),
            "column {} out of bounds ({} columns)",
            column,
            self.column_count()
        );
        self.rows[row].insert(column);
    }

    /// Cell value, 0 for out-of-bounds coordinates.
    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.rows
            .get(row)
            .map(|set| u8::from(set.contains(&column)))
            .unwrap_or(0)
    }

    /// Cell value addressed by labels.
    pub fn cell(&self, row_label: &str, column_label: &str) -> Option<u8> {
        let row = self.row_labels.iter().position(|l| l == row_label)?;
        let column = self.column_of(column_label)?;
        Some(self.get(row, column))
    }

    /// Columns set to 1 in `row`, ascending.
    pub fn row_columns(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows.get(row).into_iter().flat_map(|set| set.iter().copied())
    }

    /// Rows set to 1 in `column`, ascending.
    pub fn column_rows(&self, column: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(move |(_, set)| set.contains(&column))
            .map(|(row, _)| row)
    }

    /// Total number of 1-cells.
    pub fn edge_count(&self) -> usize {
        self.rows.iter().map(BTreeSet::len).sum()
    }

    /// Row-major dense copy of the cells.
    pub fn to_dense(&self) -> Vec<Vec<u8>> {
        (0..self.row_count())
            .map(|row| {
                (0..self.column_count())
                    .map(|column| self.get(row, column))
                    .collect()
            })
            .collect()
    }
}

impl Serialize for DependencyMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DependencyMatrix", 3)?;
        state.serialize_field("rows", &self.row_labels)?;
        state.serialize_field("columns", &self.column_labels)?;
        state.serialize_field("cells", &self.to_dense())?;
        state.end()
    }
}
