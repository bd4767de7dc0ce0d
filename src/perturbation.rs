//! Random perturbation used to escape local optima.

use crate::objective::Objective;
use crate::problem::Problem;
use crate::solution::Solution;
use rand::Rng;

/// Applies a fixed number of random toggles to a solution.
///
/// Indices are drawn independently with replacement, so an index may be
/// toggled more than once and the number of changed positions can be smaller
/// than `strength`.
#[derive(Debug, Clone)]
pub struct Perturbation {
    /// Number of attempted toggles
    pub strength: usize,
    /// Cap `strength` at the number of candidates
    pub clamp: bool,
}

impl Perturbation {
    pub fn new(strength: usize, clamp: bool) -> Self {
        Perturbation { strength, clamp }
    }

    /// Number of toggles applied for a universe of `num_candidates` indices.
    pub fn effective_strength(&self, num_candidates: usize) -> usize {
        if self.clamp {
            self.strength.min(num_candidates)
        } else {
            self.strength
        }
    }

    /// Toggle `strength` uniformly drawn indices in `0..num_candidates` on a
    /// copy of `solution`. Returns the copy and the drawn indices in order.
    pub fn toggle_random<R: Rng>(
        &self,
        solution: &Solution,
        num_candidates: usize,
        rng: &mut R,
    ) -> (Solution, Vec<usize>) {
        let mut perturbed = solution.clone();
        if num_candidates == 0 {
            return (perturbed, Vec::new());
        }

        let draws: Vec<usize> = (0..self.effective_strength(num_candidates))
            .map(|_| rng.gen_range(0..num_candidates))
            .collect();

        for &index in &draws {
            perturbed.toggle(index);
        }

        (perturbed, draws)
    }

    /// Perturb `solution` and re-evaluate the result.
    pub fn perturb<R: Rng>(&self, solution: &Solution, problem: &Problem, rng: &mut R) -> Solution {
        let (mut perturbed, _) = self.toggle_random(solution, problem.dimension(), rng);
        perturbed.value = Objective::new(&problem.matrix).evaluate(&perturbed);
        perturbed
    }
}

impl Default for Perturbation {
    fn default() -> Self {
        Perturbation::new(60, false)
    }
}
