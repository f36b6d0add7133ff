//! Instability: `I = Ce / (Ca + Ce)`.
//!
//! Efferent coupling (fan-out) counts every 1-cell in a file's row, user and
//! external columns alike. Afferent coupling (fan-in) counts the 1-cells in
//! the file's own column, restricted to user rows. The diagonal is skipped on
//! both sides: a file including itself is not coupled to anything.

use crate::core::InstabilitySeries;
use crate::matrix::DependencyMatrix;
use serde::Serialize;

/// Fan-in, fan-out and instability of one user file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentCoupling {
    pub label: String,
    /// Number of user files that include this file
    pub afferent: usize,
    /// Number of user files and external units this file includes
    pub efferent: usize,
    pub instability: f64,
}

/// Instability metric from coupling counts; exactly 0 when both are 0.
pub fn calculate_instability(afferent: usize, efferent: usize) -> f64 {
    let total = afferent + efferent;
    if total > 0 {
        efferent as f64 / total as f64
    } else {
        0.0
    }
}

/// Coupling record for every row of the matrix, in row order.
pub fn coupling_profile(matrix: &DependencyMatrix) -> Vec<ComponentCoupling> {
    matrix
        .row_labels()
        .iter()
        .enumerate()
        .map(|(row, label)| {
            let efferent = matrix.row_columns(row).filter(|&c| c != row).count();
            let afferent = matrix.column_rows(row).filter(|&r| r != row).count();
            ComponentCoupling {
                label: label.clone(),
                afferent,
                efferent,
                instability: calculate_instability(afferent, efferent),
            }
        })
        .collect()
}

/// Instability series indexed by the matrix row labels.
pub fn instability_series(matrix: &DependencyMatrix) -> InstabilitySeries {
    coupling_profile(matrix)
        .into_iter()
        .map(|c| (c.label, c.instability))
        .collect()
}
