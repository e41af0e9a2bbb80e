//! Mock entities - the unit of work being benchmarked
//!
//! Each entity carries a decrementing lifetime counter and an alive flag.
//! Updating one costs a fixed, simulated amount of wall-clock time.

use rand::Rng;
use std::thread;
use std::time::Duration;

/// Simulated per-update latency (stands in for I/O or compute work)
pub const UPDATE_COST: Duration = Duration::from_millis(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: u64,
    pub alive: bool,
    /// Remaining lifetime in ticks; may go negative if updated past zero
    pub time_points: i32,
    pub x: i32,
    pub y: i32,
}

impl Entity {
    pub fn new(id: u64, lifetime: i32) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            id,
            alive: true,
            time_points: lifetime,
            x: rng.gen_range(0..=100),
            y: rng.gen_range(0..=100),
        }
    }

    /// Burn one tick of lifetime, paying the simulated work cost.
    ///
    /// Callable regardless of alive state; callers gate on `is_alive`.
    pub fn update(&mut self) {
        thread::sleep(UPDATE_COST);
        self.time_points -= 1;
    }

    pub fn is_alive(&self) -> bool {
        self.alive && self.time_points > 0
    }
}

/// Build a fresh entity collection with ids `0..count`
pub fn spawn_entities(count: usize, lifetime: i32) -> Vec<Entity> {
    (0..count as u64).map(|id| Entity::new(id, lifetime)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alive_until_lifetime_exhausted() {
        let mut entity = Entity::new(0, 3);
        assert!(entity.is_alive());

        entity.update();
        entity.update();
        assert!(entity.is_alive());

        entity.update();
        assert!(!entity.is_alive());

        // Never comes back, even if updated past zero
        entity.update();
        assert!(!entity.is_alive());
        assert_eq!(entity.time_points, -1);
    }

    #[test]
    fn test_dead_flag_overrides_lifetime() {
        let mut entity = Entity::new(7, 10);
        entity.alive = false;
        assert!(!entity.is_alive());
    }

    #[test]
    fn test_spawn_assigns_sequential_ids() {
        let entities = spawn_entities(5, 10);
        assert_eq!(entities.len(), 5);
        for (i, entity) in entities.iter().enumerate() {
            assert_eq!(entity.id, i as u64);
            assert_eq!(entity.time_points, 10);
            assert!(entity.is_alive());
            assert!((0..=100).contains(&entity.x));
            assert!((0..=100).contains(&entity.y));
        }
    }
}
