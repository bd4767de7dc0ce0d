//! Batch execution: instance discovery and repeated trials.

use crate::config::Config;
use crate::error::{IlsError, Result};
use crate::matrix::Weight;
use crate::problem::Problem;
use crate::solution::Solution;
use crate::IlsAlgorithm;

use itertools::Itertools;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Summary of all trials on one instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceResult {
    pub instance: String,
    pub dimension: usize,
    pub best_value: Weight,
    pub average_value: f64,
    /// Mean wall-clock time per trial
    pub average_time: Duration,
    /// Best value of each trial, in trial order
    pub trial_values: Vec<Weight>,
    /// Best subset over all trials
    #[serde(skip)]
    pub best_solution: Option<Solution>,
}

/// List the files in `dir` whose name ends with `suffix`, sorted by name.
pub fn discover_instances<P: AsRef<Path>>(dir: P, suffix: &str) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut instances = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let matches = path
            .file_name()
            .map(|name| name.to_string_lossy().ends_with(suffix))
            .unwrap_or(false);

        if matches && path.is_file() {
            instances.push(path);
        }
    }

    if instances.is_empty() {
        return Err(IlsError::NoInstances {
            dir: dir.to_path_buf(),
            suffix: suffix.to_string(),
        });
    }

    Ok(instances.into_iter().sorted().collect())
}

/// Seed for trial `trial`: distinct per trial, reproducible when a base seed is set.
fn trial_config(config: &Config, trial: usize) -> Config {
    let mut config = config.clone();
    config.seed = config.seed.map(|seed| seed.wrapping_add(trial as u64));
    config
}

/// Run `config.trials` independent searches on `problem`.
pub fn run_instance(problem: &Problem, config: &Config) -> Result<InstanceResult> {
    config.validate()?;

    let mut trial_values = Vec::with_capacity(config.trials);
    let mut total_time = Duration::from_secs(0);
    let mut best_solution: Option<Solution> = None;

    for trial in 0..config.trials {
        let mut algorithm = IlsAlgorithm::new(problem, trial_config(config, trial));
        let best = algorithm.run()?.clone();
        total_time += algorithm.run_time;

        info!(
            "{}: trial {} finished with {} in {:.2}s",
            problem.name,
            trial + 1,
            best.value,
            algorithm.run_time.as_secs_f64()
        );

        trial_values.push(best.value);
        if best_solution
            .as_ref()
            .map_or(true, |current| best.value > current.value)
        {
            best_solution = Some(best);
        }
    }

    let trials = trial_values.len();
    let best_value = trial_values.iter().copied().max().unwrap_or(0);
    let average_value = trial_values.iter().map(|&v| v as f64).sum::<f64>() / trials as f64;

    Ok(InstanceResult {
        instance: problem.name.clone(),
        dimension: problem.dimension(),
        best_value,
        average_value,
        average_time: total_time / trials as u32,
        trial_values,
        best_solution,
    })
}

/// Load and run every instance in `paths`, in order.
pub fn run_all(paths: &[PathBuf], config: &Config) -> Result<Vec<InstanceResult>> {
    paths
        .iter()
        .map(|path| {
            let problem = Problem::from_file(path)?;
            run_instance(&problem, config)
        })
        .collect()
}
