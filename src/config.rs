//! Benchmark configuration
//!
//! Sweep values, worker count and entity lifetime live in one struct that is
//! passed into the driver, optionally overridden from a JSON file.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Entity counts to sweep over, in run order
    pub entity_counts: Vec<usize>,
    /// Workers used by the partitioned strategy
    pub worker_count: usize,
    /// Initial lifetime (ticks) for every spawned entity
    pub entity_lifetime: i32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            entity_counts: vec![10, 50, 100, 200, 500, 1000],
            worker_count: 4,
            entity_lifetime: 10,
        }
    }
}

impl BenchConfig {
    /// Load config from a JSON file if it exists, otherwise use defaults.
    ///
    /// Missing fields fall back to their defaults; a present but unreadable
    /// or malformed file is an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_hardcoded_sweep() {
        let config = BenchConfig::default();
        assert_eq!(config.entity_counts, vec![10, 50, 100, 200, 500, 1000]);
        assert_eq!(config.worker_count, 4);
        assert_eq!(config.entity_lifetime, 10);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: BenchConfig = serde_json::from_str(r#"{"worker_count": 8}"#).unwrap();
        assert_eq!(config.worker_count, 8);
        assert_eq!(config.entity_counts, BenchConfig::default().entity_counts);
        assert_eq!(config.entity_lifetime, 10);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config =
            BenchConfig::load_or_default(Path::new("/nonexistent/bench_config.json")).unwrap();
        assert_eq!(config.worker_count, 4);
    }
}
