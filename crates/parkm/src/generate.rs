//! Synthetic customers for testing and benchmarking.

use rand::prelude::*;
use rayon::prelude::*;

use crate::Record;

/// The number of records generated from each derived seed.
const CHUNK_SIZE: usize = 1024;

/// Generates `n` random customers.
///
/// Ages are uniform in `18..=82`, annual incomes are whole numbers uniform in `0..100_000` and purchase scores are uniform in `1..=100`. Records are
/// generated in parallel chunks, each with its own generator derived from `seed`, so the output depends only on `n` and `seed`.
#[must_use]
pub fn random_customers(n: usize, seed: u64) -> Vec<Record> {
    let num_chunks = n.div_ceil(CHUNK_SIZE);
    (0..num_chunks)
        .into_par_iter()
        .flat_map_iter(|c| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(c as u64));
            let len = CHUNK_SIZE.min(n - c * CHUNK_SIZE);
            (0..len).map(move |_| random_customer(&mut rng))
        })
        .collect()
}

/// Generates one random customer.
fn random_customer<R: Rng>(rng: &mut R) -> Record {
    Record::new(
        format!("ID{}", rng.random::<u64>()),
        rng.random_range(18..=82),
        f64::from(rng.random_range(0..100_000_u32)),
        rng.random_range(1..=100),
    )
}
