//! Reporting helpers: durations, the results table and solution files.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use crate::problem::Problem;
use crate::runner::InstanceResult;
use crate::solution::Solution;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Render the per-instance summary table.
pub fn format_results_table(results: &[InstanceResult]) -> String {
    let mut table = format!(
        "{:<15} {:<15} {:<15} {:<15}\n",
        "Instance", "Best value", "Average value", "Average time"
    );

    for result in results {
        let time = format!("{:.2}s", result.average_time.as_secs_f64());
        table.push_str(&format!(
            "{:<15} {:<15} {:<15.2} {:<15}\n",
            result.instance, result.best_value, result.average_value, time
        ));
    }

    table
}

/// Write the results as pretty-printed JSON.
pub fn save_results_json<P: AsRef<Path>>(results: &[InstanceResult], path: P) -> crate::error::Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, results)?;
    Ok(())
}

/// Save a solution to a file, listing the selected indices 1-based to match
/// the instance format.
pub fn save_solution<P: AsRef<Path>>(
    solution: &Solution,
    problem: &Problem,
    path: P,
) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Subset solution for instance: {}", problem.name)?;
    writeln!(file, "Value: {}", solution.value)?;
    writeln!(file, "Size: {} / {}", solution.len(), problem.dimension())?;
    writeln!(file)?;

    for index in solution.sorted_members() {
        writeln!(file, "{}", index + 1)?;
    }

    Ok(())
}
