//! # Dense-subset ILS
//!
//! An Iterated Local Search for selecting a subset S of the indices of a
//! sparse weight matrix so that the sum of the submatrix induced by S is
//! maximal (maximum diversity, densest subgraph and similar quadratic
//! selection problems).
//!
//! The search alternates a best-improvement-per-sweep hill climb over
//! single-index toggle moves with a random perturbation, keeping the best
//! subset found over a fixed number of rounds.

pub mod config;
pub mod error;
pub mod local_search;
pub mod matrix;
pub mod objective;
pub mod observer;
pub mod perturbation;
pub mod problem;
pub mod runner;
pub mod solution;
pub mod utils;

use crate::config::Config;
use crate::error::{IlsError, Result};
use crate::local_search::LocalSearch;
use crate::matrix::Weight;
use crate::observer::{LogObserver, SearchObserver};
use crate::perturbation::Perturbation;
use crate::problem::Problem;
use crate::solution::Solution;

use log::warn;
use rand::seq::index;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// The main algorithm structure that orchestrates the iterated local search.
pub struct IlsAlgorithm<'p> {
    pub problem: &'p Problem,
    pub config: Config,
    pub best_solution: Option<Solution>,
    /// Value of the random starting solution of the last run
    pub initial_value: Option<Weight>,
    pub run_time: Duration,
    pub iterations: u32,
    pub local_search: LocalSearch,
    pub perturbation: Perturbation,
    rng: ChaCha8Rng,
}

impl<'p> IlsAlgorithm<'p> {
    /// Create a new ILS instance for the given problem and configuration.
    pub fn new(problem: &'p Problem, config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        IlsAlgorithm {
            problem,
            local_search: LocalSearch::new(config.evaluation_mode),
            perturbation: Perturbation::new(config.perturbation_strength, config.clamp_strength),
            config,
            best_solution: None,
            initial_value: None,
            run_time: Duration::from_secs(0),
            iterations: 0,
            rng,
        }
    }

    /// Sample the random starting solution.
    pub fn initial_solution(&mut self) -> Result<Solution> {
        let n = self.problem.dimension();
        if n == 0 {
            return Err(IlsError::EmptyMatrix);
        }

        let size = if self.config.initial_size > n {
            warn!(
                "Initial size {} exceeds dimension {}, sampling all indices",
                self.config.initial_size, n
            );
            n
        } else {
            self.config.initial_size
        };

        let sample = index::sample(&mut self.rng, n, size).into_vec();
        let mut solution = Solution::from_indices(n, &sample);
        solution.evaluate(&self.problem.matrix);
        Ok(solution)
    }

    /// Run the algorithm, reporting progress through the `log` facade.
    pub fn run(&mut self) -> Result<&Solution> {
        self.run_with_observer(&mut LogObserver)
    }

    /// Run the algorithm until the iteration budget (or time limit) is spent.
    pub fn run_with_observer(&mut self, observer: &mut dyn SearchObserver) -> Result<&Solution> {
        self.config.validate()?;
        let start_time = Instant::now();
        self.iterations = 0;

        let mut solution = self.initial_solution()?;
        let mut best = solution.clone();
        self.initial_value = Some(best.value);
        observer.on_start(best.value);

        while !self.should_terminate(start_time) {
            // Searching
            solution = self.local_search.improve(&solution, self.problem);
            let local_optimum = solution.value;

            if local_optimum > best.value {
                best = solution.clone();
            }

            // Perturbing
            solution = self
                .perturbation
                .perturb(&solution, self.problem, &mut self.rng);

            self.iterations += 1;
            observer.on_iteration(self.iterations, local_optimum, best.value);
        }

        self.run_time = start_time.elapsed();
        Ok(&*self.best_solution.insert(best))
    }

    /// Check if the termination criteria are met.
    fn should_terminate(&self, start_time: Instant) -> bool {
        if self.iterations >= self.config.max_iterations {
            return true;
        }

        if let Some(time_limit) = self.config.time_limit {
            if start_time.elapsed() >= time_limit {
                return true;
            }
        }

        false
    }
}

/// Run one ILS on `problem` and return the best subset with its value.
pub fn solve(problem: &Problem, config: Config) -> Result<(Solution, Weight)> {
    let mut algorithm = IlsAlgorithm::new(problem, config);
    let best = algorithm.run()?.clone();
    let value = best.value;
    Ok((best, value))
}
