//! Multi-start search for the centroid set with the lowest total distance.

mod seeding;

use rand::Rng;

use crate::{
    Centroid, ClusteringResult, Record,
    reducer::{CombinePolicy, PartitionedReducer},
    stages::nearest,
};

pub use seeding::{BoundsSeeding, FixedSeeding, RecordSeeding, Seeding, ZeroSeeding};

/// The total distance from every record to its nearest centroid.
///
/// The user must ensure that `centroids` is not empty.
#[must_use]
pub fn score(records: &[Record], centroids: &[Centroid]) -> f64 {
    records.iter().map(|r| nearest(r, centroids).1).sum()
}

/// Repeats the partitioned clustering from fresh centroids and keeps the best-scoring result.
///
/// One run is a single call to [`PartitionedReducer::reduce`] followed by scoring its centroids against the whole record store. There is no iteration
/// to convergence within a run.
#[derive(Debug)]
pub struct MultiRunSearch {
    /// The number of clusters.
    k: usize,
    /// The number of runs.
    num_runs: usize,
    /// The reducer shared by all runs.
    reducer: PartitionedReducer,
}

impl MultiRunSearch {
    /// Creates a new `MultiRunSearch` using the [`CombinePolicy::WorkerCount`] policy.
    ///
    /// # Errors
    ///
    /// - If `k` or `num_runs` is zero.
    /// - If the reducer could not be created with `workers` threads.
    pub fn new(k: usize, workers: usize, num_runs: usize) -> Result<Self, String> {
        if k == 0 {
            return Err("The number of clusters must be positive".to_string());
        }
        if num_runs == 0 {
            return Err("The number of runs must be positive".to_string());
        }
        let reducer = PartitionedReducer::new(workers, CombinePolicy::default())?;
        Ok(Self { k, num_runs, reducer })
    }

    /// Changes the policy used to combine partial estimates, keeping the same worker threads.
    #[must_use]
    pub fn with_policy(self, policy: CombinePolicy) -> Self {
        Self {
            reducer: self.reducer.with_policy(policy),
            ..self
        }
    }

    /// Returns the number of clusters.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// Returns the number of runs.
    #[must_use]
    pub const fn num_runs(&self) -> usize {
        self.num_runs
    }

    /// Returns the reducer used for each run.
    #[must_use]
    pub const fn reducer(&self) -> &PartitionedReducer {
        &self.reducer
    }

    /// Runs the search and returns the result with the lowest total distance.
    ///
    /// Every run draws its initial centroids from `seeding`. Only a strictly lower total distance replaces the best result, so the earliest of equally
    /// good runs is kept.
    ///
    /// # Errors
    ///
    /// - If `records` is empty.
    /// - If there are fewer records than clusters.
    /// - If `seeding` does not produce exactly `k` centroids.
    pub fn search<S: Seeding, R: Rng>(&self, records: &[Record], seeding: &mut S, rng: &mut R) -> Result<ClusteringResult, String> {
        if records.is_empty() {
            return Err("Cannot cluster an empty set of records".to_string());
        }
        if self.k > records.len() {
            return Err(format!("Cannot form {} clusters from {} records", self.k, records.len()));
        }

        ftlog::info!(
            "Starting {} runs with k = {}, {} workers and policy {}",
            self.num_runs,
            self.k,
            self.reducer.workers(),
            self.reducer.policy()
        );

        let mut best: Option<ClusteringResult> = None;
        for run in 0..self.num_runs {
            let initial = seeding.seed(records, self.k, rng);
            if initial.len() != self.k {
                return Err(format!("Seeding produced {} centroids instead of {}", initial.len(), self.k));
            }

            let centroids = self.reducer.reduce(records, &initial);
            let total_distance = score(records, &centroids);

            if best.as_ref().is_none_or(|b| total_distance < b.total_distance) {
                ftlog::debug!("Run {run} found a new best total distance of {total_distance}");
                best = Some(ClusteringResult { centroids, total_distance });
            }
        }

        let best = best.unwrap_or_else(|| unreachable!("num_runs is positive"));
        ftlog::info!("Best total distance after {} runs: {}", self.num_runs, best.total_distance);
        Ok(best)
    }
}
