//! Entity Processing Benchmark
//!
//! Standalone benchmark comparing sequential and partitioned entity updates.

use entity_bench::{build_rows, render_chart, run_sweep, save_table, BenchConfig, Strategy};
use std::path::Path;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const CONFIG_FILE: &str = "bench_config.json";
const CHART_FILE: &str = "performance_comparison.png";
const RESULTS_FILE: &str = "performance_results.csv";

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = BenchConfig::load_or_default(Path::new(CONFIG_FILE))?;
    info!(
        "Entity benchmark starting: sweep {:?}, {} workers, lifetime {}",
        config.entity_counts, config.worker_count, config.entity_lifetime
    );

    info!("Running sequential sweep...");
    let sequential = run_sweep(&config, Strategy::Sequential)?;

    info!("Running partitioned sweep ({} workers)...", config.worker_count);
    let concurrent = run_sweep(
        &config,
        Strategy::Partitioned {
            workers: config.worker_count,
        },
    )?;

    let rows = build_rows(&config.entity_counts, &sequential, &concurrent);

    info!("Comparison results:");
    for row in &rows {
        info!(
            "{:4} entities: {:.3}s -> {:.3}s (speedup: {:.2}x)",
            row.entity_count, row.sequential_secs, row.concurrent_secs, row.speedup
        );
    }

    render_chart(Path::new(CHART_FILE), &rows)?;
    save_table(Path::new(RESULTS_FILE), &rows)?;
    info!("Chart saved to '{}', results saved to '{}'", CHART_FILE, RESULTS_FILE);

    Ok(())
}
