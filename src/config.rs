//! Configuration parameters for the iterated local search.

use crate::error::{IlsError, Result};
use crate::objective::EvaluationMode;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

/// Configuration settings for the ILS solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of search/perturb rounds
    pub max_iterations: u32,
    /// Size of the random starting subset
    pub initial_size: usize,
    /// Number of random toggles per perturbation
    pub perturbation_strength: usize,
    /// Cap the perturbation strength at the matrix dimension
    pub clamp_strength: bool,
    /// How local search scores candidate toggles
    pub evaluation_mode: EvaluationMode,
    /// Seed for the random generator, drawn from entropy when absent
    pub seed: Option<u64>,
    /// Optional time limit for one run
    pub time_limit: Option<Duration>,
    /// Independent runs per instance
    pub trials: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_iterations: 1000,
            initial_size: 50,
            perturbation_strength: 60,
            clamp_strength: false,
            evaluation_mode: EvaluationMode::Incremental,
            seed: None,
            time_limit: None,
            trials: 2,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: Config = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration describes a runnable search.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(IlsError::config("max_iterations must be at least 1"));
        }
        if self.initial_size == 0 {
            return Err(IlsError::config("initial_size must be at least 1"));
        }
        if self.trials == 0 {
            return Err(IlsError::config("trials must be at least 1"));
        }
        Ok(())
    }

    /// Set the number of search/perturb rounds.
    pub fn with_max_iterations(mut self, iterations: u32) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Set the size of the random starting subset.
    pub fn with_initial_size(mut self, size: usize) -> Self {
        self.initial_size = size;
        self
    }

    /// Set the perturbation strength.
    pub fn with_perturbation_strength(mut self, strength: usize) -> Self {
        self.perturbation_strength = strength;
        self
    }

    /// Cap the perturbation strength at the matrix dimension.
    pub fn with_clamp_strength(mut self, clamp: bool) -> Self {
        self.clamp_strength = clamp;
        self
    }

    /// Set how local search scores candidate toggles.
    pub fn with_evaluation_mode(mut self, mode: EvaluationMode) -> Self {
        self.evaluation_mode = mode;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the time limit.
    pub fn with_time_limit(mut self, duration: Duration) -> Self {
        self.time_limit = Some(duration);
        self
    }

    /// Set the number of trials per instance.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }
}
