//! Basic example of using the dense-subset ILS library.

use dense_subset_ils::config::Config;
use dense_subset_ils::problem::Problem;
use dense_subset_ils::utils::{format_duration, save_solution};
use dense_subset_ils::IlsAlgorithm;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Get instance path from command line or use default
    let args: Vec<String> = env::args().collect();
    let instance_path = if args.len() > 1 {
        &args[1]
    } else {
        "data/instance.sparse"
    };

    let problem = Problem::from_file(instance_path)?;
    println!(
        "Loaded problem: {} with dimension {}",
        problem.name,
        problem.dimension()
    );

    let config = Config::new()
        .with_max_iterations(1000)
        .with_initial_size(50)
        .with_perturbation_strength(60)
        .with_seed(42);

    let mut algorithm = IlsAlgorithm::new(&problem, config);
    let best = algorithm.run()?.clone();

    println!("Search completed in {}", format_duration(algorithm.run_time));
    println!("Best value: {}", best.value);
    println!("Subset size: {}", best.len());

    let output_path = format!("{}.sol", problem.name);
    println!("Saving solution to: {}", output_path);
    save_solution(&best, &problem, &output_path)?;

    Ok(())
}
