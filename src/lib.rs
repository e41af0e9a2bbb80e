//! Entity Processing Benchmark
//!
//! Measures the wall-clock cost of updating mock simulation entities
//! sequentially vs across a fixed-size worker partition.

pub mod config;
pub mod entity;
pub mod partition;
pub mod report;
pub mod strategy;
pub mod sweep;

pub use config::BenchConfig;
pub use entity::{spawn_entities, Entity};
pub use partition::{chunk_ranges, split_chunks_mut, PartitionError};
pub use report::{build_rows, render_chart, save_table, SweepRow};
pub use strategy::{process_concurrent, process_sequential, StrategyError};
pub use sweep::{run_sweep, Strategy};
