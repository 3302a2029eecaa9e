//! Nearest-centroid assignment.

use crate::{Centroid, Record};

/// Returns the index of the nearest centroid to `record` along with the distance to it.
///
/// Centroids are scanned in index order and only a strictly smaller distance replaces the current best, so ties go to the first minimal index.
///
/// The user must ensure that `centroids` is not empty.
#[must_use]
pub fn nearest(record: &Record, centroids: &[Centroid]) -> (usize, f64) {
    centroids
        .iter()
        .map(|c| record.distance_to(c))
        .enumerate()
        .fold((0, f64::INFINITY), |(best_i, best_d), (i, d)| if d < best_d { (i, d) } else { (best_i, best_d) })
}

/// Assigns each record to the index of its nearest centroid.
///
/// The output has one index per record, each in `0..centroids.len()`. Zero-valued placeholder centroids are candidates like any other.
#[must_use]
pub fn assign(records: &[Record], centroids: &[Centroid]) -> Vec<usize> {
    records.iter().map(|r| nearest(r, centroids).0).collect()
}
