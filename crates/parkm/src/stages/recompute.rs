//! Recomputing centroids as per-cluster means.

use crate::{Centroid, Record};

/// Running per-attribute sums of the records assigned to one cluster.
///
/// Workers hand these back to the reducer so that the reducer can decide how to combine partitions. Integer attributes are summed in `i128` so that no
/// number of `i64` records can overflow them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClusterSums {
    /// Sum of ages.
    pub age: i128,
    /// Sum of annual incomes.
    pub annual_income: f64,
    /// Sum of purchase scores.
    pub purchase_score: i128,
    /// Number of records summed.
    pub count: usize,
}

impl ClusterSums {
    /// Accumulates the sums for each of the `k` clusters from the records and their assignments.
    ///
    /// The user must ensure that `assignments` has the same length as `records` and that every index is less than `k`.
    #[must_use]
    pub fn accumulate(records: &[Record], assignments: &[usize], k: usize) -> Vec<Self> {
        let mut sums = vec![Self::default(); k];
        for (record, &j) in records.iter().zip(assignments) {
            sums[j].add(record);
        }
        sums
    }

    /// Adds a record to the sums.
    pub fn add(&mut self, record: &Record) {
        self.age += i128::from(record.age());
        self.annual_income += record.annual_income();
        self.purchase_score += i128::from(record.purchase_score());
        self.count += 1;
    }

    /// Merges the sums of another partition of the same cluster into these.
    pub fn merge(&mut self, other: &Self) {
        self.age += other.age;
        self.annual_income += other.annual_income;
        self.purchase_score += other.purchase_score;
        self.count += other.count;
    }

    /// Returns the mean of the summed records, truncating the integer attributes.
    ///
    /// An empty cluster has the zero centroid as its mean.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> Centroid {
        if self.count == 0 {
            return Centroid::zero();
        }
        let n = i128::try_from(self.count).unwrap_or(i128::MAX);
        Centroid::new(truncate(self.age / n), self.annual_income / self.count as f64, truncate(self.purchase_score / n))
    }
}

/// Narrows a mean of `i64` values back to `i64`.
pub(crate) fn truncate(mean: i128) -> i64 {
    i64::try_from(mean).unwrap_or_else(|_| unreachable!("the mean of i64 values is an i64"))
}

/// Recomputes the `k` centroids as the means of the records assigned to each.
///
/// Clusters that received no records get the zero centroid. This is not an error.
#[must_use]
pub fn recompute(records: &[Record], assignments: &[usize], k: usize) -> Vec<Centroid> {
    ClusterSums::accumulate(records, assignments, k).iter().map(ClusterSums::mean).collect()
}
