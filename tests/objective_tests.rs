//! Tests for full and incremental objective evaluation.

use dense_subset_ils::matrix::{SparseMatrix, Weight};
use dense_subset_ils::objective::{EvaluationMode, Objective};
use dense_subset_ils::solution::Solution;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random triplets, including diagonal entries, duplicates and entries
/// listed in one direction only.
fn random_triplets(n: usize, count: usize, rng: &mut ChaCha8Rng) -> Vec<(usize, usize, Weight)> {
    (0..count)
        .map(|_| {
            let r = rng.gen_range(0..n);
            let c = if rng.gen_bool(0.15) { r } else { rng.gen_range(0..n) };
            (r, c, rng.gen_range(0..10))
        })
        .collect()
}

fn dense(n: usize, triplets: &[(usize, usize, Weight)]) -> Vec<Vec<Weight>> {
    let mut matrix = vec![vec![0; n]; n];
    for &(r, c, w) in triplets {
        matrix[r][c] += w;
    }
    matrix
}

fn brute_force(dense: &[Vec<Weight>], solution: &Solution) -> Weight {
    let members = solution.members();
    members
        .iter()
        .flat_map(|&i| members.iter().map(move |&j| dense[i][j]))
        .sum()
}

fn random_solution(n: usize, rng: &mut ChaCha8Rng) -> Solution {
    let indices: Vec<usize> = (0..n).filter(|_| rng.gen_bool(0.4)).collect();
    Solution::from_indices(n, &indices)
}

fn small_matrix() -> SparseMatrix {
    SparseMatrix::from_triplets(4, &[(0, 0, 5), (0, 1, 3), (1, 0, 3), (2, 3, 2), (3, 2, 2)])
        .unwrap()
}

#[test]
fn test_evaluate_small_instance() {
    let matrix = small_matrix();
    let objective = Objective::new(&matrix);

    assert_eq!(objective.evaluate(&Solution::from_indices(4, &[0, 1])), 11);
    assert_eq!(objective.evaluate(&Solution::from_indices(4, &[0, 1, 2, 3])), 15);
    assert_eq!(objective.evaluate(&Solution::from_indices(4, &[2, 3])), 4);
    assert_eq!(objective.evaluate(&Solution::new(4)), 0);
}

#[test]
fn test_evaluate_matches_brute_force() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let n = 25;
    let triplets = random_triplets(n, 120, &mut rng);
    let matrix = SparseMatrix::from_triplets(n, &triplets).unwrap();
    let reference = dense(n, &triplets);
    let objective = Objective::new(&matrix);

    // Empty and full subsets
    assert_eq!(objective.evaluate(&Solution::new(n)), 0);
    let all: Vec<usize> = (0..n).collect();
    assert_eq!(
        objective.evaluate(&Solution::from_indices(n, &all)),
        matrix.total_sum()
    );

    for _ in 0..50 {
        let solution = random_solution(n, &mut rng);
        assert_eq!(objective.evaluate(&solution), brute_force(&reference, &solution));
        assert_eq!(
            objective.evaluate(&solution),
            matrix.submatrix_sum(solution.members())
        );
    }
}

#[test]
fn test_toggle_delta_matches_full_resum() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let n = 20;
    let triplets = random_triplets(n, 90, &mut rng);
    let matrix = SparseMatrix::from_triplets(n, &triplets).unwrap();
    let reference = dense(n, &triplets);
    let objective = Objective::new(&matrix);

    for _ in 0..30 {
        let mut solution = random_solution(n, &mut rng);
        solution.evaluate(&matrix);

        for c in 0..n {
            let incremental = solution.value + objective.toggle_delta(&solution, c);

            let mut toggled = solution.clone();
            toggled.toggle(c);
            assert_eq!(incremental, brute_force(&reference, &toggled));
            assert_eq!(incremental, objective.evaluate(&toggled));
        }
    }
}

#[test]
fn test_toggle_delta_diagonal_and_asymmetric_entries() {
    // (0,1) is listed in one direction only; 2 has a self weight
    let matrix = SparseMatrix::from_triplets(3, &[(0, 1, 4), (2, 2, 6), (2, 0, 1), (0, 2, 1)])
        .unwrap();
    let objective = Objective::new(&matrix);

    let mut solution = Solution::from_indices(3, &[0]);
    solution.evaluate(&matrix);
    assert_eq!(solution.value, 0);

    assert_eq!(objective.toggle_delta(&solution, 1), 4);
    assert_eq!(objective.toggle_delta(&solution, 2), 8);
    assert_eq!(objective.toggle_delta(&solution, 0), 0);

    let mut full = Solution::from_indices(3, &[0, 1, 2]);
    full.evaluate(&matrix);
    assert_eq!(full.value, 12);
    assert_eq!(objective.toggle_delta(&full, 2), -8);
    assert_eq!(objective.toggle_delta(&full, 1), -4);
}

#[test]
fn test_toggled_value_modes_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let n = 15;
    let triplets = random_triplets(n, 60, &mut rng);
    let matrix = SparseMatrix::from_triplets(n, &triplets).unwrap();
    let objective = Objective::new(&matrix);

    let mut solution = random_solution(n, &mut rng);
    solution.evaluate(&matrix);
    let before = solution.clone();

    for c in 0..n {
        let incremental = objective.toggled_value(&mut solution, c, EvaluationMode::Incremental);
        let full = objective.toggled_value(&mut solution, c, EvaluationMode::FullResum);
        assert_eq!(incremental, full);
    }

    // Scoring leaves the subset as it was
    assert_eq!(solution, before);
}
