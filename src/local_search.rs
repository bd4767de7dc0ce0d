//! Toggle-move local search.

use crate::matrix::Weight;
use crate::objective::{EvaluationMode, Objective};
use crate::problem::Problem;
use crate::solution::Solution;
use log::debug;

/// Hill climbing over single-index toggle moves.
///
/// Each sweep visits the candidates `0..n` in ascending order and applies every
/// strictly improving toggle as soon as it is found, so later candidates in the
/// same sweep see the updated subset. Sweeps repeat until one applies no move.
pub struct LocalSearch {
    pub mode: EvaluationMode,
    /// Number of sweeps in the last call to `improve`
    pub sweeps: usize,
    /// Number of accepted toggles in the last call to `improve`
    pub moves: usize,
    /// Value after each sweep of the last call to `improve`
    pub history: Vec<Weight>,
}

impl LocalSearch {
    /// Create a new local search instance.
    pub fn new(mode: EvaluationMode) -> Self {
        LocalSearch {
            mode,
            sweeps: 0,
            moves: 0,
            history: Vec::new(),
        }
    }

    /// Run local search from `initial` until no single toggle improves it.
    ///
    /// `initial` is not modified. The returned solution carries its value.
    pub fn improve(&mut self, initial: &Solution, problem: &Problem) -> Solution {
        let objective = Objective::new(&problem.matrix);
        let num_candidates = problem.dimension();

        let mut best = initial.clone();
        best.value = objective.evaluate(&best);

        self.sweeps = 0;
        self.moves = 0;
        self.history.clear();

        let mut improvement = true;
        while improvement {
            improvement = self.sweep(&mut best, &objective, num_candidates) > 0;
            self.history.push(best.value);
            debug!("Local search: best value so far: {}", best.value);
        }

        best
    }

    /// One pass over all candidates. Returns the number of applied toggles.
    fn sweep(&mut self, best: &mut Solution, objective: &Objective, num_candidates: usize) -> usize {
        let mut applied = 0;

        for candidate in 0..num_candidates {
            let value = objective.toggled_value(best, candidate, self.mode);
            if value > best.value {
                best.toggle(candidate);
                best.value = value;
                applied += 1;
            }
        }

        self.sweeps += 1;
        self.moves += applied;
        applied
    }

    /// Find a single toggle that strictly improves `solution`, if any.
    pub fn find_improving_move(solution: &Solution, problem: &Problem) -> Option<usize> {
        let objective = Objective::new(&problem.matrix);
        (0..problem.dimension()).find(|&c| objective.toggle_delta(solution, c) > 0)
    }
}

impl Default for LocalSearch {
    fn default() -> Self {
        LocalSearch::new(EvaluationMode::default())
    }
}
