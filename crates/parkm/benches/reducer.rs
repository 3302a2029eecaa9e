//! Benchmarks for the partitioned reducer.

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use parkm::{Centroid, CombinePolicy, PartitionedReducer};

fn reducer(c: &mut Criterion) {
    let records = parkm::generate::random_customers(100_000, 42);
    let initial = records.iter().take(3).map(Centroid::from).collect::<Vec<_>>();

    let mut group = c.benchmark_group("reduce-100k");
    for workers in [1, 2, 6, 12] {
        for policy in [CombinePolicy::WorkerCount, CombinePolicy::RecordCount] {
            let Ok(reducer) = PartitionedReducer::new(workers, policy) else {
                continue;
            };
            group.bench_with_input(BenchmarkId::new(policy.to_string(), workers), &workers, |b, _| {
                b.iter(|| reducer.reduce(&records, &initial));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, reducer);
criterion_main!(benches);
