//! Progress reporting for the ILS loop.

use crate::matrix::Weight;
use log::{debug, info};

/// Receives progress events from a running search.
pub trait SearchObserver {
    /// Called once with the value of the random starting solution.
    fn on_start(&mut self, _initial_value: Weight) {}

    /// Called after every search/perturb round. `iteration` starts at 1.
    fn on_iteration(&mut self, iteration: u32, local_optimum: Weight, best_value: Weight);
}

/// Reports progress through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_start(&mut self, initial_value: Weight) {
        info!("Initial solution: {}", initial_value);
    }

    fn on_iteration(&mut self, iteration: u32, _local_optimum: Weight, best_value: Weight) {
        debug!("Iteration {}: best value: {}", iteration, best_value);
    }
}

/// Discards all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_iteration(&mut self, _iteration: u32, _local_optimum: Weight, _best_value: Weight) {}
}

impl<F> SearchObserver for F
where
    F: FnMut(u32, Weight, Weight),
{
    fn on_iteration(&mut self, iteration: u32, local_optimum: Weight, best_value: Weight) {
        self(iteration, local_optimum, best_value)
    }
}
