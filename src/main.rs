use clap::Parser;
use dense_subset_ils::config::Config;
use dense_subset_ils::error::Result;
use dense_subset_ils::objective::EvaluationMode;
use dense_subset_ils::problem::Problem;
use dense_subset_ils::runner::{discover_instances, run_instance, InstanceResult};
use dense_subset_ils::utils::{format_results_table, save_results_json, save_solution};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Iterated Local Search for maximum-weight submatrix selection.
#[derive(Parser, Debug)]
#[command(name = "dense-subset-ils", version, about, long_about = None)]
struct Cli {
    /// Instance file to process. Without it, every matching file in the data directory is run
    file: Option<PathBuf>,

    /// Directory holding the instances
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// File name suffix of instances in the data directory
    #[arg(long, default_value = ".sparse")]
    suffix: String,

    /// JSON configuration file; explicit flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Independent runs per instance
    #[arg(long)]
    trials: Option<usize>,

    /// Search/perturb rounds per run
    #[arg(short, long)]
    iterations: Option<u32>,

    /// Size of the random starting subset
    #[arg(long)]
    initial_size: Option<usize>,

    /// Random toggles per perturbation
    #[arg(long)]
    strength: Option<usize>,

    /// Cap the perturbation strength at the matrix dimension
    #[arg(long)]
    clamp_strength: bool,

    /// Score local search moves by full re-summation instead of deltas
    #[arg(long)]
    full_resum: bool,

    /// Base random seed; trial t uses seed + t
    #[arg(long)]
    seed: Option<u64>,

    /// Write the results as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the best subset of every instance into this directory
    #[arg(long)]
    save_solutions: Option<PathBuf>,
}

impl Cli {
    fn build_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::new(),
        };

        if let Some(trials) = self.trials {
            config = config.with_trials(trials);
        }
        if let Some(iterations) = self.iterations {
            config = config.with_max_iterations(iterations);
        }
        if let Some(size) = self.initial_size {
            config = config.with_initial_size(size);
        }
        if let Some(strength) = self.strength {
            config = config.with_perturbation_strength(strength);
        }
        if self.clamp_strength {
            config = config.with_clamp_strength(true);
        }
        if self.full_resum {
            config = config.with_evaluation_mode(EvaluationMode::FullResum);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config.validate()?;
        Ok(config)
    }

    fn instances(&self) -> Result<Vec<PathBuf>> {
        match &self.file {
            Some(file) if file.exists() => Ok(vec![file.clone()]),
            Some(file) => Ok(vec![self.data_dir.join(file)]),
            None => discover_instances(&self.data_dir, &self.suffix),
        }
    }
}

fn run(cli: &Cli) -> Result<Vec<InstanceResult>> {
    let config = cli.build_config()?;
    let instances = cli.instances()?;
    info!("Processing {} instance(s)", instances.len());

    if let Some(dir) = &cli.save_solutions {
        fs::create_dir_all(dir)?;
    }

    let mut results = Vec::with_capacity(instances.len());
    for path in &instances {
        let problem = Problem::from_file(path)?;
        let result = run_instance(&problem, &config)?;

        if let (Some(dir), Some(best)) = (&cli.save_solutions, &result.best_solution) {
            let output_path = dir.join(format!("{}.sol", problem.name));
            info!("Saving solution to: {}", output_path.display());
            save_solution(best, &problem, output_path)?;
        }

        results.push(result);
    }

    if let Some(path) = &cli.json {
        save_results_json(&results, path)?;
    }

    Ok(results)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(results) => {
            println!("\nResults:");
            print!("{}", format_results_table(&results));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
