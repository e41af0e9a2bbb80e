//! Experiment driver
//!
//! Runs one strategy across the configured entity-count sweep, timing each
//! point end-to-end. Entities are rebuilt fresh for every point; construction
//! happens outside the timed window.

use crate::config::BenchConfig;
use crate::entity::spawn_entities;
use crate::strategy::{process_concurrent, process_sequential, StrategyError};
use std::time::{Duration, Instant};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    Partitioned { workers: usize },
}

/// Time the given strategy at every sweep point.
///
/// Returns one elapsed duration per entity count, in sweep order.
pub fn run_sweep(config: &BenchConfig, strategy: Strategy) -> Result<Vec<Duration>, StrategyError> {
    let mut times = Vec::with_capacity(config.entity_counts.len());

    for &count in &config.entity_counts {
        let mut entities = spawn_entities(count, config.entity_lifetime);

        let start = Instant::now();
        match strategy {
            Strategy::Sequential => process_sequential(&mut entities),
            Strategy::Partitioned { workers } => process_concurrent(&mut entities, workers)?,
        }
        let elapsed = start.elapsed();

        info!("Entities: {}, elapsed: {:.3}s", count, elapsed.as_secs_f64());
        times.push(elapsed);
    }

    Ok(times)
}
