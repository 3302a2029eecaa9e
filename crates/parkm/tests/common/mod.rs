//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use parkm::{Centroid, Record};

/// Two customers far apart in age.
pub fn two_ages() -> (Vec<Record>, Vec<Centroid>) {
    let records = vec![Record::new("young", 20, 10.0, 50), Record::new("old", 80, 10.0, 50)];
    let centroids = vec![Centroid::new(20, 10.0, 50), Centroid::new(80, 10.0, 50)];
    (records, centroids)
}

/// Three well separated groups of customers, interleaved so that every contiguous partition sees every group.
pub fn three_groups(per_group: usize) -> Vec<Record> {
    let centers = [(25, 20_000.0, 80), (45, 60_000.0, 50), (65, 95_000.0, 10)];
    (0..per_group)
        .flat_map(|i| {
            centers.iter().enumerate().map(move |(g, &(age, income, score))| {
                let jitter = i64::try_from(i % 3).unwrap_or(0) - 1;
                #[allow(clippy::cast_precision_loss)]
                let income_jitter = (i % 5) as f64 * 100.0;
                Record::new(format!("g{g}-{i}"), age + jitter, income + income_jitter, score - jitter)
            })
        })
        .collect()
}

/// The synthetic generator with a fixed seed.
pub fn customers(n: usize) -> Vec<Record> {
    parkm::generate::random_customers(n, 42)
}
