//! Combining per-partition estimates into a single centroid set.

use crate::{
    Centroid,
    stages::{ClusterSums, truncate},
};

/// How the local estimates of the partitions are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombinePolicy {
    /// Sum the local means of each cluster across partitions and divide by the number of workers.
    ///
    /// This weighs every partition equally, regardless of how many records it assigned to the cluster, and counts a cluster that was empty in a
    /// partition as a zero-valued mean. The result is biased for unequal partitions or unevenly spread clusters.
    #[default]
    WorkerCount,
    /// Pool the raw sums and counts of each cluster across partitions and divide by the total count.
    ///
    /// This is the mean over the full record store.
    RecordCount,
}

impl CombinePolicy {
    /// Combines the per-partition sums into `k` centroids.
    ///
    /// Every element of `partials` must hold one `ClusterSums` per cluster, aligned by cluster index.
    #[must_use]
    pub fn combine(self, partials: &[Vec<ClusterSums>], k: usize) -> Vec<Centroid> {
        match self {
            Self::WorkerCount => by_worker_count(partials, k),
            Self::RecordCount => by_record_count(partials, k),
        }
    }
}

impl core::fmt::Display for CombinePolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::WorkerCount => write!(f, "worker-count"),
            Self::RecordCount => write!(f, "record-count"),
        }
    }
}

/// Averages the local means of each cluster over the number of partitions.
///
/// The integer attributes of the local means are summed in `i128` and truncated back after dividing.
#[expect(clippy::cast_precision_loss)]
fn by_worker_count(partials: &[Vec<ClusterSums>], k: usize) -> Vec<Centroid> {
    let mut totals = vec![(0_i128, 0.0_f64, 0_i128); k];
    for sums in partials {
        for (total, local) in totals.iter_mut().zip(sums.iter().map(ClusterSums::mean)) {
            total.0 += i128::from(local.age);
            total.1 += local.annual_income;
            total.2 += i128::from(local.purchase_score);
        }
    }

    let w = partials.len().max(1);
    let w_int = i128::try_from(w).unwrap_or(i128::MAX);
    totals
        .into_iter()
        .map(|(age, income, score)| Centroid::new(truncate(age / w_int), income / w as f64, truncate(score / w_int)))
        .collect()
}

/// Pools the sums of each cluster over all partitions before dividing.
fn by_record_count(partials: &[Vec<ClusterSums>], k: usize) -> Vec<Centroid> {
    let mut pooled = vec![ClusterSums::default(); k];
    for sums in partials {
        for (p, s) in pooled.iter_mut().zip(sums) {
            p.merge(s);
        }
    }
    pooled.iter().map(ClusterSums::mean).collect()
}

#[cfg(test)]
mod tests {
    use crate::{Centroid, Record, stages::ClusterSums};

    use super::CombinePolicy;

    fn sums_of(records: &[Record], assignments: &[usize], k: usize) -> Vec<ClusterSums> {
        ClusterSums::accumulate(records, assignments, k)
    }

    #[test]
    fn worker_count_halves_a_cluster_missing_from_one_partition() {
        let left = sums_of(&[Record::new("a", 40, 1000.0, 60)], &[0], 2);
        let right = sums_of(&[Record::new("b", 20, 500.0, 10)], &[1], 2);
        let partials = vec![left, right];

        let combined = CombinePolicy::WorkerCount.combine(&partials, 2);
        assert_eq!(combined, vec![Centroid::new(20, 500.0, 30), Centroid::new(10, 250.0, 5)]);

        let combined = CombinePolicy::RecordCount.combine(&partials, 2);
        assert_eq!(combined, vec![Centroid::new(40, 1000.0, 60), Centroid::new(20, 500.0, 10)]);
    }

    #[test]
    fn policies_diverge_on_unequal_partitions() {
        let left = sums_of(&[Record::new("a", 10, 0.0, 0)], &[0], 1);
        let right = sums_of(
            &[Record::new("b", 30, 0.0, 0), Record::new("c", 30, 0.0, 0), Record::new("d", 30, 0.0, 0)],
            &[0, 0, 0],
            1,
        );
        let partials = vec![left, right];

        assert_eq!(CombinePolicy::WorkerCount.combine(&partials, 1)[0].age, 20);
        assert_eq!(CombinePolicy::RecordCount.combine(&partials, 1)[0].age, 25);
    }

    #[test]
    fn worker_count_sums_large_means_without_overflow() {
        let left = sums_of(&[Record::new("a", i64::MAX, 0.0, i64::MAX - 1)], &[0], 1);
        let right = sums_of(&[Record::new("b", i64::MAX - 2, 0.0, i64::MAX - 1)], &[0], 1);
        let combined = CombinePolicy::WorkerCount.combine(&[left, right], 1);
        assert_eq!(combined, vec![Centroid::new(i64::MAX - 1, 0.0, i64::MAX - 1)]);
    }
}
