//! Clustering a record store and reporting the best result.

use std::path::Path;

use parkm::{
    ClusteringResult, CombinePolicy, MultiRunSearch, Record, Seeding,
    search::{BoundsSeeding, RecordSeeding, ZeroSeeding},
};
use rand::prelude::*;

/// Combine policies exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShellPolicy {
    /// Average the partial centroids over the number of workers.
    WorkerCount,
    /// Average the pooled records of each cluster.
    RecordCount,
}

impl From<ShellPolicy> for CombinePolicy {
    fn from(policy: ShellPolicy) -> Self {
        match policy {
            ShellPolicy::WorkerCount => Self::WorkerCount,
            ShellPolicy::RecordCount => Self::RecordCount,
        }
    }
}

/// Seeding policies exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ShellSeeding {
    /// Zero-valued centroids for every run.
    Zero,
    /// Distinct records chosen at random.
    Records,
    /// Random points in the bounding box of the records.
    Bounds,
}

/// The parameters of the search.
#[derive(Debug, Clone, Copy)]
pub struct ClusterConfig {
    /// The number of clusters.
    pub k: usize,
    /// The number of workers.
    pub workers: usize,
    /// The number of runs.
    pub num_runs: usize,
    /// The combine policy.
    pub policy: ShellPolicy,
    /// The seeding policy.
    pub seeding: ShellSeeding,
}

/// Runs the search over `records`, prints the best centroids and optionally writes them as JSON to `out_path`.
///
/// # Errors
///
/// - If the configuration is invalid for the records. See [`MultiRunSearch::search`].
/// - If the JSON file could not be written.
pub fn cluster(records: &[Record], config: &ClusterConfig, seed: u64, out_path: Option<&Path>) -> Result<(), String> {
    let search = MultiRunSearch::new(config.k, config.workers, config.num_runs)?.with_policy(config.policy.into());
    let mut rng = StdRng::seed_from_u64(seed);

    let start = std::time::Instant::now();
    let result = match config.seeding {
        ShellSeeding::Zero => run(&search, records, ZeroSeeding, &mut rng),
        ShellSeeding::Records => run(&search, records, RecordSeeding, &mut rng),
        ShellSeeding::Bounds => run(&search, records, BoundsSeeding, &mut rng),
    }?;
    ftlog::info!("Finished {} runs in {:.3} seconds", config.num_runs, start.elapsed().as_secs_f64());

    println!("Best centroids:");
    for (i, c) in result.centroids.iter().enumerate() {
        println!("  {i}: {c}");
    }
    println!("Total distance: {:.3}", result.total_distance);

    if let Some(path) = out_path {
        write_json(&result, path)?;
        ftlog::info!("Wrote result to {}", path.display());
    }

    Ok(())
}

/// Runs the search with a concrete seeding policy.
fn run<S: Seeding>(search: &MultiRunSearch, records: &[Record], mut seeding: S, rng: &mut StdRng) -> Result<ClusteringResult, String> {
    search.search(records, &mut seeding, rng)
}

/// Writes the result to a JSON file.
fn write_json(result: &ClusteringResult, path: &Path) -> Result<(), String> {
    let contents = serde_json::to_string_pretty(result).map_err(|e| e.to_string())?;
    std::fs::write(path, contents).map_err(|e| format!("Failed to write {}: {e}", path.display()))
}
