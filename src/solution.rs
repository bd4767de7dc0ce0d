//! Solution representation for subset selection.

use crate::matrix::{SparseMatrix, Weight};
use crate::objective::Objective;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

const ABSENT: usize = usize::MAX;

/// A subset of the indices `0..n`.
///
/// Membership is a boolean array and the members are also kept in an
/// unordered list, so both membership tests and toggles are O(1).
#[derive(Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Membership flag per index
    in_set: Vec<bool>,
    /// Member indices, in no particular order
    members: Vec<usize>,
    /// Position of each member inside `members`, `ABSENT` otherwise
    position: Vec<usize>,
    /// Objective value of the current membership
    pub value: Weight,
}

impl Solution {
    /// Create an empty subset over `n` candidate indices.
    pub fn new(n: usize) -> Self {
        Solution {
            in_set: vec![false; n],
            members: Vec::new(),
            position: vec![ABSENT; n],
            value: 0,
        }
    }

    /// Create a subset from a list of indices. Repeated indices are kept once.
    /// The value is left at zero; see [`Solution::evaluate`].
    pub fn from_indices(n: usize, indices: &[usize]) -> Self {
        let mut solution = Solution::new(n);
        for &i in indices {
            if !solution.contains(i) {
                solution.toggle(i);
            }
        }
        solution
    }

    /// Number of candidate indices the subset ranges over.
    pub fn universe(&self) -> usize {
        self.in_set.len()
    }

    /// Check whether index `i` is selected.
    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        self.in_set[i]
    }

    /// Flip the membership of index `i`. Does not touch `value`.
    /// Returns `true` when `i` was added.
    pub fn toggle(&mut self, i: usize) -> bool {
        if self.in_set[i] {
            let pos = self.position[i];
            self.members.swap_remove(pos);
            if let Some(&moved) = self.members.get(pos) {
                self.position[moved] = pos;
            }
            self.position[i] = ABSENT;
            self.in_set[i] = false;
            false
        } else {
            self.position[i] = self.members.len();
            self.members.push(i);
            self.in_set[i] = true;
            true
        }
    }

    /// Selected indices in arbitrary order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Membership mask over `0..n`.
    pub fn mask(&self) -> &[bool] {
        &self.in_set
    }

    /// Selected indices in ascending order.
    pub fn sorted_members(&self) -> Vec<usize> {
        self.members.iter().copied().sorted().collect()
    }

    /// Number of selected indices.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if no index is selected.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of indices whose membership differs between two subsets.
    pub fn hamming_distance(&self, other: &Solution) -> usize {
        self.in_set
            .iter()
            .zip(&other.in_set)
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Recompute `value` from scratch against `matrix`.
    pub fn evaluate(&mut self, matrix: &SparseMatrix) {
        self.value = Objective::new(matrix).evaluate(self);
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.in_set == other.in_set
    }
}

impl Eq for Solution {}

impl fmt::Debug for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution:")?;
        writeln!(f, "  Value: {}", self.value)?;
        writeln!(f, "  Size: {} / {}", self.len(), self.universe())?;
        writeln!(f, "  Members: [{}]", self.sorted_members().iter().join(", "))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sorted_members().iter().join(" "))
    }
}
