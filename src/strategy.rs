//! Processing strategies
//!
//! Sequential: visit every entity in order, update the alive ones.
//! Concurrent: scatter disjoint chunks across a fixed-size worker pool and
//! gather at the scope barrier before returning.

use crate::entity::Entity;
use crate::partition::{split_chunks_mut, PartitionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrategyError {
    #[error("invalid partition: {0}")]
    Partition(#[from] PartitionError),
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Update every alive entity, strictly in input order.
pub fn process_sequential(entities: &mut [Entity]) {
    for entity in entities.iter_mut() {
        if entity.is_alive() {
            entity.update();
        }
    }
}

/// Update every alive entity using `workers` parallel workers.
///
/// The slice is split into contiguous disjoint chunks, one per worker, so no
/// entity is shared between workers and no locking is needed. The scope does
/// not return until every worker has finished its chunk.
pub fn process_concurrent(entities: &mut [Entity], workers: usize) -> Result<(), StrategyError> {
    let chunks = split_chunks_mut(entities, workers)?;

    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
    pool.scope(|scope| {
        for chunk in chunks {
            scope.spawn(move |_| process_sequential(chunk));
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::spawn_entities;

    #[test]
    fn test_sequential_updates_each_alive_entity_once() {
        let mut entities = spawn_entities(6, 10);
        process_sequential(&mut entities);
        for entity in &entities {
            assert_eq!(entity.time_points, 9);
            assert!(entity.is_alive());
        }
    }

    #[test]
    fn test_sequential_skips_dead_entities() {
        let mut entities = spawn_entities(4, 10);
        entities[1].alive = false;
        entities[3].time_points = 0;

        process_sequential(&mut entities);

        assert_eq!(entities[0].time_points, 9);
        assert_eq!(entities[1].time_points, 10);
        assert_eq!(entities[2].time_points, 9);
        assert_eq!(entities[3].time_points, 0);
    }

    #[test]
    fn test_concurrent_matches_sequential_outcome() {
        let initial = spawn_entities(10, 10);

        let mut sequential = initial.clone();
        process_sequential(&mut sequential);

        let mut concurrent = initial;
        process_concurrent(&mut concurrent, 4).unwrap();

        assert_eq!(sequential, concurrent);
        for entity in &concurrent {
            assert_eq!(entity.time_points, 9);
            assert!(entity.is_alive());
        }
    }

    #[test]
    fn test_concurrent_rejects_zero_workers() {
        let mut entities = spawn_entities(4, 10);
        let err = process_concurrent(&mut entities, 0).unwrap_err();
        assert!(matches!(err, StrategyError::Partition(_)));
    }

    #[test]
    fn test_concurrent_tolerates_more_workers_than_entities() {
        let mut entities = spawn_entities(3, 10);
        process_concurrent(&mut entities, 8).unwrap();
        for entity in &entities {
            assert_eq!(entity.time_points, 9);
        }
    }
}
