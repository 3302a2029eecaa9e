//! Policies for producing the fresh centroids each run starts from.

use rand::prelude::*;

use crate::{Centroid, Record};

/// A source of `k` fresh centroids at the start of every run.
pub trait Seeding {
    /// Produces `k` centroids for a new run over `records`.
    fn seed<R: Rng>(&mut self, records: &[Record], k: usize, rng: &mut R) -> Vec<Centroid>;
}

/// Starts every run from `k` zero-valued centroids.
///
/// Every run is then identical: all records are nearest to the first centroid.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroSeeding;

impl Seeding for ZeroSeeding {
    fn seed<R: Rng>(&mut self, _: &[Record], k: usize, _: &mut R) -> Vec<Centroid> {
        vec![Centroid::zero(); k]
    }
}

/// Starts every run from `k` distinct records chosen uniformly at random.
///
/// If there are fewer than `k` records, the remaining centroids are zero-valued.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordSeeding;

impl Seeding for RecordSeeding {
    fn seed<R: Rng>(&mut self, records: &[Record], k: usize, rng: &mut R) -> Vec<Centroid> {
        let amount = k.min(records.len());
        let mut centroids = rand::seq::index::sample(rng, records.len(), amount)
            .into_iter()
            .map(|i| Centroid::from(&records[i]))
            .collect::<Vec<_>>();
        centroids.resize(k, Centroid::zero());
        centroids
    }
}

/// Starts every run from `k` points drawn uniformly from the bounding box of the records.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsSeeding;

impl Seeding for BoundsSeeding {
    fn seed<R: Rng>(&mut self, records: &[Record], k: usize, rng: &mut R) -> Vec<Centroid> {
        let Some(first) = records.first() else {
            return vec![Centroid::zero(); k];
        };
        let (lo, hi) = records.iter().fold((Centroid::from(first), Centroid::from(first)), |(lo, hi), r| {
            (
                Centroid::new(lo.age.min(r.age()), lo.annual_income.min(r.annual_income()), lo.purchase_score.min(r.purchase_score())),
                Centroid::new(hi.age.max(r.age()), hi.annual_income.max(r.annual_income()), hi.purchase_score.max(r.purchase_score())),
            )
        });

        (0..k)
            .map(|_| {
                Centroid::new(
                    rng.random_range(lo.age..=hi.age),
                    rng.random_range(lo.annual_income..=hi.annual_income),
                    rng.random_range(lo.purchase_score..=hi.purchase_score),
                )
            })
            .collect()
    }
}

/// Starts every run from the same given centroids.
#[derive(Debug, Clone)]
pub struct FixedSeeding(pub Vec<Centroid>);

impl Seeding for FixedSeeding {
    fn seed<R: Rng>(&mut self, _: &[Record], k: usize, _: &mut R) -> Vec<Centroid> {
        let mut centroids = self.0.clone();
        centroids.resize(k, Centroid::zero());
        centroids
    }
}
