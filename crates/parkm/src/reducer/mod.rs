//! The partitioned reducer: one round of assignment and recomputation, fanned out over a pool of workers.

mod combine;
pub mod partition;

use std::sync::mpsc;

use crate::{
    Centroid, Record,
    stages::{ClusterSums, assign},
};

pub use combine::CombinePolicy;

/// Runs one partition-then-combine round over a dedicated pool of worker threads.
///
/// The pool has exactly as many threads as there are partitions, and it is built once and reused for every call to [`reduce`](Self::reduce).
pub struct PartitionedReducer {
    /// The number of workers, which is also the number of partitions.
    workers: usize,
    /// How the local estimates are combined.
    policy: CombinePolicy,
    /// The worker threads.
    pool: rayon::ThreadPool,
}

impl core::fmt::Debug for PartitionedReducer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PartitionedReducer")
            .field("workers", &self.workers)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl PartitionedReducer {
    /// Creates a new `PartitionedReducer` with `workers` threads.
    ///
    /// # Errors
    ///
    /// - If `workers` is zero.
    /// - If the thread pool could not be built.
    pub fn new(workers: usize, policy: CombinePolicy) -> Result<Self, String> {
        if workers == 0 {
            return Err("The number of workers must be positive".to_string());
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("parkm-worker-{i}"))
            .build()
            .map_err(|e| e.to_string())?;
        Ok(Self { workers, policy, pool })
    }

    /// Changes the combine policy, keeping the same worker threads.
    #[must_use]
    pub fn with_policy(self, policy: CombinePolicy) -> Self {
        Self { policy, ..self }
    }

    /// Returns the number of workers.
    #[must_use]
    pub const fn workers(&self) -> usize {
        self.workers
    }

    /// Returns the combine policy.
    #[must_use]
    pub const fn policy(&self) -> CombinePolicy {
        self.policy
    }

    /// Produces a new centroid set from one round over `records`, starting from `centroids`.
    ///
    /// The records are split into contiguous partitions, one per worker. Every worker assigns its partition against the same read-only `centroids`, sums
    /// the records of each cluster, and sends its sums back over a channel. Once all partitions have reported, their sums are combined by cluster index
    /// according to the [`CombinePolicy`].
    ///
    /// The user must ensure that `centroids` is not empty.
    #[must_use]
    pub fn reduce(&self, records: &[Record], centroids: &[Centroid]) -> Vec<Centroid> {
        let k = centroids.len();
        let ranges = partition::contiguous(records.len(), self.workers);
        ftlog::debug!(
            "Reducing {} records into {k} clusters over {} partitions of size {}",
            records.len(),
            ranges.len(),
            records.len() / self.workers
        );

        let (sender, receiver) = mpsc::channel::<(usize, Vec<ClusterSums>)>();
        self.pool.scope(|s| {
            for (p, range) in ranges.into_iter().enumerate() {
                let sender = sender.clone();
                s.spawn(move |_| {
                    let part = &records[range];
                    let assignments = assign(part, centroids);
                    let sums = ClusterSums::accumulate(part, &assignments, k);
                    sender
                        .send((p, sums))
                        .unwrap_or_else(|_| unreachable!("the receiver outlives the scope"));
                });
            }
        });
        drop(sender);

        // Place results by partition so that the combination does not depend on arrival order.
        let mut partials = vec![Vec::new(); self.workers];
        let mut received = 0;
        for (p, sums) in receiver {
            partials[p] = sums;
            received += 1;
        }
        debug_assert_eq!(received, self.workers, "every partition reports exactly once");

        let combined = self.policy.combine(&partials, k);
        ftlog::debug!("Combined {received} partial estimates with policy {}", self.policy);
        combined
    }
}
