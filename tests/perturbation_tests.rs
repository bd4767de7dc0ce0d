//! Tests for the random toggle perturbation.

use dense_subset_ils::matrix::SparseMatrix;
use dense_subset_ils::objective::Objective;
use dense_subset_ils::perturbation::Perturbation;
use dense_subset_ils::problem::Problem;
use dense_subset_ils::solution::Solution;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

fn create_problem(n: usize) -> Problem {
    let triplets: Vec<_> = (0..n.saturating_sub(1))
        .flat_map(|i| [(i, i + 1, 2), (i + 1, i, 2)])
        .collect();
    Problem::new("chain", SparseMatrix::from_triplets(n, &triplets).unwrap())
}

#[test]
fn test_difference_is_the_odd_draws() {
    let n = 30;
    let perturbation = Perturbation::new(25, false);
    let start = Solution::from_indices(n, &[0, 4, 8, 12, 16]);
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for _ in 0..20 {
        let (perturbed, draws) = perturbation.toggle_random(&start, n, &mut rng);
        assert_eq!(draws.len(), 25);
        assert!(draws.iter().all(|&i| i < n));

        let mut counts: HashMap<usize, usize> = HashMap::new();
        for &i in &draws {
            *counts.entry(i).or_default() += 1;
        }

        for i in 0..n {
            let flipped = counts.get(&i).map_or(false, |&k| k % 2 == 1);
            assert_eq!(perturbed.contains(i), start.contains(i) ^ flipped);
        }

        assert!(perturbed.hamming_distance(&start) <= 25);
        assert!(perturbed.members().iter().all(|&i| i < n));
    }
}

#[test]
fn test_perturb_does_not_modify_input_and_evaluates() {
    let problem = create_problem(20);
    let mut start = Solution::from_indices(20, &[1, 2, 3]);
    start.evaluate(&problem.matrix);
    let snapshot = start.clone();

    let perturbation = Perturbation::default();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let perturbed = perturbation.perturb(&start, &problem, &mut rng);

    assert_eq!(start, snapshot);
    assert_eq!(
        perturbed.value,
        Objective::new(&problem.matrix).evaluate(&perturbed)
    );
}

#[test]
fn test_strength_larger_than_universe_is_allowed() {
    let n = 5;
    let perturbation = Perturbation::new(60, false);
    let start = Solution::new(n);
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let (perturbed, draws) = perturbation.toggle_random(&start, n, &mut rng);
    assert_eq!(draws.len(), 60);
    assert!(perturbed.hamming_distance(&start) <= n);
}

#[test]
fn test_clamped_strength() {
    let perturbation = Perturbation::new(60, true);
    assert_eq!(perturbation.effective_strength(10), 10);
    assert_eq!(perturbation.effective_strength(100), 60);

    let unclamped = Perturbation::new(60, false);
    assert_eq!(unclamped.effective_strength(10), 60);

    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let (_, draws) = perturbation.toggle_random(&Solution::new(10), 10, &mut rng);
    assert_eq!(draws.len(), 10);
}

#[test]
fn test_zero_strength_and_empty_universe() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let start = Solution::from_indices(4, &[1, 2]);

    let (same, draws) = Perturbation::new(0, false).toggle_random(&start, 4, &mut rng);
    assert!(draws.is_empty());
    assert_eq!(same, start);

    let (empty, draws) = Perturbation::default().toggle_random(&Solution::new(0), 0, &mut rng);
    assert!(draws.is_empty());
    assert!(empty.is_empty());
}

#[test]
fn test_same_seed_same_perturbation() {
    let problem = create_problem(50);
    let start = Solution::from_indices(50, &[0, 10, 20, 30, 40]);
    let perturbation = Perturbation::default();

    let a = perturbation.perturb(&start, &problem, &mut ChaCha8Rng::seed_from_u64(77));
    let b = perturbation.perturb(&start, &problem, &mut ChaCha8Rng::seed_from_u64(77));
    assert_eq!(a, b);
    assert_eq!(a.value, b.value);
}
