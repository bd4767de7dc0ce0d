//! Compressed sparse storage for the weight matrix.

use crate::error::{IlsError, Result};
use log::trace;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

/// Matrix entry type. Instance files carry integer weights.
pub type Weight = i64;

/// An immutable N×N sparse matrix stored both row-major (CSR) and
/// column-major (CSC).
///
/// Entries are kept exactly as read: a file listing `(i, j)` and `(j, i)`
/// yields a symmetric matrix, duplicates are summed and zeros are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SparseMatrix {
    n: usize,
    /// Row `i` spans `row_cols[row_ptr[i]..row_ptr[i + 1]]`
    row_ptr: Vec<usize>,
    row_cols: Vec<usize>,
    row_weights: Vec<Weight>,
    /// Column `j` spans `col_rows[col_ptr[j]..col_ptr[j + 1]]`
    col_ptr: Vec<usize>,
    col_rows: Vec<usize>,
    col_weights: Vec<Weight>,
}

impl SparseMatrix {
    /// Build a matrix from 0-based `(row, col, weight)` triplets.
    pub fn from_triplets(n: usize, triplets: &[(usize, usize, Weight)]) -> Result<Self> {
        for &(r, c, _) in triplets {
            if r >= n || c >= n {
                return Err(IlsError::parse(
                    0,
                    format!("entry ({}, {}) outside a {}x{} matrix", r, c, n, n),
                ));
            }
        }

        let (row_ptr, row_cols, row_weights) =
            Self::compress(n, triplets.iter().map(|&(r, c, w)| (r, c, w)));
        let (col_ptr, col_rows, col_weights) =
            Self::compress(n, triplets.iter().map(|&(r, c, w)| (c, r, w)));

        Ok(SparseMatrix {
            n,
            row_ptr,
            row_cols,
            row_weights,
            col_ptr,
            col_rows,
            col_weights,
        })
    }

    /// Sort by (major, minor), merge duplicates and drop zeros.
    fn compress<I>(n: usize, entries: I) -> (Vec<usize>, Vec<usize>, Vec<Weight>)
    where
        I: Iterator<Item = (usize, usize, Weight)>,
    {
        let mut entries: Vec<(usize, usize, Weight)> = entries.collect();
        entries.sort_unstable_by_key(|&(major, minor, _)| (major, minor));

        let mut merged: Vec<(usize, usize, Weight)> = Vec::with_capacity(entries.len());
        for (major, minor, w) in entries {
            match merged.last_mut() {
                Some(last) if last.0 == major && last.1 == minor => last.2 += w,
                _ => merged.push((major, minor, w)),
            }
        }
        merged.retain(|&(_, _, w)| w != 0);

        let mut ptr = vec![0usize; n + 1];
        for &(major, _, _) in &merged {
            ptr[major + 1] += 1;
        }
        for i in 0..n {
            ptr[i + 1] += ptr[i];
        }

        let (minors, weights): (Vec<usize>, Vec<Weight>) =
            merged.into_iter().map(|(_, minor, w)| (minor, w)).unzip();
        (ptr, minors, weights)
    }

    /// Parse the edge-list format: a header line with N, then `row col weight`
    /// records with 1-based indices. Records without exactly three fields are
    /// skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut n: Option<usize> = None;
        let mut triplets = Vec::new();

        for (i, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let line_no = i + 1;
            let parts: Vec<&str> = line.split_whitespace().collect();

            let dimension = match n {
                Some(dimension) => dimension,
                None => {
                    // Header: the first token of the first non-empty line
                    if let Some(first) = parts.first() {
                        let dimension = first.parse::<usize>().map_err(|_| {
                            IlsError::parse(line_no, format!("invalid dimension '{}'", first))
                        })?;
                        n = Some(dimension);
                    }
                    continue;
                }
            };

            if parts.len() != 3 {
                trace!("skipping line {} with {} fields", line_no, parts.len());
                continue;
            }

            let row = Self::parse_index(parts[0], dimension, line_no)?;
            let col = Self::parse_index(parts[1], dimension, line_no)?;
            let weight = parts[2].parse::<Weight>().map_err(|_| {
                IlsError::parse(line_no, format!("invalid weight '{}'", parts[2]))
            })?;

            triplets.push((row, col, weight));
        }

        let n = n.ok_or_else(|| IlsError::parse(0, "missing dimension header"))?;
        Self::from_triplets(n, &triplets)
    }

    /// Convert a 1-based index field to a 0-based index.
    fn parse_index(field: &str, n: usize, line_no: usize) -> Result<usize> {
        let index = field
            .parse::<usize>()
            .map_err(|_| IlsError::parse(line_no, format!("invalid index '{}'", field)))?;

        if index == 0 || index > n {
            return Err(IlsError::parse(
                line_no,
                format!("index {} outside 1..={}", index, n),
            ));
        }

        Ok(index - 1)
    }

    /// Load a matrix from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(io::BufReader::new(file))
    }

    /// Matrix dimension N.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Number of stored nonzero entries.
    pub fn nnz(&self) -> usize {
        self.row_cols.len()
    }

    /// Sum of every stored entry.
    pub fn total_sum(&self) -> Weight {
        self.row_weights.iter().sum()
    }

    /// Column indices and weights of the nonzeros in row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> (&[usize], &[Weight]) {
        let span = self.row_ptr[i]..self.row_ptr[i + 1];
        (&self.row_cols[span.clone()], &self.row_weights[span])
    }

    /// Row indices and weights of the nonzeros in column `j`.
    #[inline]
    pub fn column(&self, j: usize) -> (&[usize], &[Weight]) {
        let span = self.col_ptr[j]..self.col_ptr[j + 1];
        (&self.col_rows[span.clone()], &self.col_weights[span])
    }

    /// Entry `M[i][j]`, zero when absent.
    pub fn get(&self, i: usize, j: usize) -> Weight {
        let (cols, weights) = self.row(i);
        match cols.binary_search(&j) {
            Ok(pos) => weights[pos],
            Err(_) => 0,
        }
    }

    /// Sum of all entries whose row and column both belong to `indices`.
    ///
    /// Only the nonzeros of the selected rows are visited. Duplicate indices
    /// are counted once.
    pub fn submatrix_sum(&self, indices: &[usize]) -> Weight {
        let mut selected = vec![false; self.n];
        for &i in indices {
            selected[i] = true;
        }

        let members: Vec<usize> = (0..self.n).filter(|&i| selected[i]).collect();
        self.masked_sum(&members, &selected)
    }

    /// Sum of all entries whose row and column both satisfy `mask`.
    pub(crate) fn masked_sum(&self, members: &[usize], mask: &[bool]) -> Weight {
        let mut total = 0;
        for &i in members {
            let (cols, weights) = self.row(i);
            for (&j, &w) in cols.iter().zip(weights) {
                if mask[j] {
                    total += w;
                }
            }
        }
        total
    }
}
