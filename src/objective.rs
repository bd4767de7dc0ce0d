//! Objective evaluation: full submatrix sums and incremental toggle deltas.

use crate::matrix::{SparseMatrix, Weight};
use crate::solution::Solution;
use serde::{Deserialize, Serialize};

/// How candidate toggles are scored during local search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EvaluationMode {
    /// Score a toggle from row and column `c` only
    #[default]
    Incremental,
    /// Apply the toggle and re-sum the whole submatrix
    FullResum,
}

/// Evaluates subsets against a fixed matrix.
#[derive(Debug, Clone, Copy)]
pub struct Objective<'a> {
    matrix: &'a SparseMatrix,
}

impl<'a> Objective<'a> {
    pub fn new(matrix: &'a SparseMatrix) -> Self {
        Objective { matrix }
    }

    /// Sum of `M[i][j]` over all `i, j` in the subset.
    pub fn evaluate(&self, solution: &Solution) -> Weight {
        self.matrix
            .masked_sum(solution.members(), solution.mask())
    }

    /// Change in value caused by toggling index `c`.
    ///
    /// Adding `c` contributes row `c` and column `c` restricted to the current
    /// members plus the diagonal `M[c][c]`; removing subtracts the same amount.
    pub fn toggle_delta(&self, solution: &Solution, c: usize) -> Weight {
        let mask = solution.mask();
        let mut cross = 0;

        let (cols, weights) = self.matrix.row(c);
        for (&j, &w) in cols.iter().zip(weights) {
            if j != c && mask[j] {
                cross += w;
            }
        }

        let (rows, weights) = self.matrix.column(c);
        for (&i, &w) in rows.iter().zip(weights) {
            if i != c && mask[i] {
                cross += w;
            }
        }

        let contribution = cross + self.matrix.get(c, c);
        if solution.contains(c) {
            -contribution
        } else {
            contribution
        }
    }

    /// Value of `solution` with index `c` toggled, scored according to `mode`.
    ///
    /// In `FullResum` mode the solution is toggled, re-summed and toggled back,
    /// so it is left unchanged either way.
    pub fn toggled_value(&self, solution: &mut Solution, c: usize, mode: EvaluationMode) -> Weight {
        match mode {
            EvaluationMode::Incremental => solution.value + self.toggle_delta(solution, c),
            EvaluationMode::FullResum => {
                solution.toggle(c);
                let value = self.evaluate(solution);
                solution.toggle(c);
                value
            }
        }
    }
}
