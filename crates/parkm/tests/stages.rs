//! Tests for the assignment and recomputation stages.

use parkm::{
    Centroid, Record,
    stages::{assign, nearest, recompute},
};
use test_case::test_case;

mod common;

#[test]
fn two_ages_scenario() {
    let (records, centroids) = common::two_ages();

    let assignments = assign(&records, &centroids);
    assert_eq!(assignments, vec![0, 1]);

    let recomputed = recompute(&records, &assignments, 2);
    assert_eq!(recomputed, centroids);
}

#[test_case(10, 1; "10-1")]
#[test_case(100, 3; "100-3")]
#[test_case(1_000, 8; "1_000-8")]
fn assignment_is_complete_and_in_range(n: usize, k: usize) {
    let records = common::customers(n);
    let centroids = records.iter().take(k).map(Centroid::from).collect::<Vec<_>>();

    let assignments = assign(&records, &centroids);
    assert_eq!(assignments.len(), records.len());
    assert!(assignments.iter().all(|&j| j < k), "Out of range index in {assignments:?}");

    // No hidden state between calls.
    assert_eq!(assign(&records, &centroids), assignments);
}

#[test]
fn ties_go_to_the_first_index() {
    let record = Record::new("mid", 50, 0.0, 0);
    let centroids = [Centroid::new(60, 0.0, 0), Centroid::new(40, 0.0, 0), Centroid::new(60, 0.0, 0)];
    let (j, d) = nearest(&record, &centroids);
    assert_eq!(j, 0);
    assert!((d - 10.0).abs() < f64::EPSILON);

    let duplicates = [Centroid::zero(); 4];
    assert_eq!(assign(&[record], &duplicates), vec![0]);
}

#[test]
fn infinite_distances_are_reported() {
    let record = Record::new("rich", 40, 1e308, 50);
    let centroids = [Centroid::new(40, -1e308, 50), Centroid::new(40, -1e308, 50)];
    let (j, d) = nearest(&record, &centroids);
    assert_eq!(j, 0);
    assert!(d.is_infinite(), "Expected an infinite distance, got {d}");
    assert!(parkm::score(&[record], &centroids).is_infinite());
}

#[test]
fn zero_placeholders_are_candidates() {
    let records = [Record::new("tiny", 1, 1.0, 1), Record::new("big", 70, 90_000.0, 90)];
    let centroids = [Centroid::new(70, 90_000.0, 90), Centroid::zero()];
    assert_eq!(assign(&records, &centroids), vec![1, 0]);
}

#[test]
fn empty_cluster_stays_zero() {
    let records = vec![Record::new("a", 30, 40_000.0, 20), Record::new("b", 32, 42_000.0, 22)];
    let centroids = [Centroid::new(31, 41_000.0, 21), Centroid::new(90, 1_000_000.0, 100)];

    let assignments = assign(&records, &centroids);
    assert_eq!(assignments, vec![0, 0]);

    let recomputed = recompute(&records, &assignments, 2);
    assert_eq!(recomputed[0], Centroid::new(31, 41_000.0, 21));
    assert_eq!(recomputed[1], Centroid::zero());
}

#[test]
fn means_truncate_integer_attributes() {
    let records = [Record::new("a", 20, 1.0, 1), Record::new("b", 23, 2.0, 4), Record::new("c", 24, 3.0, 6)];
    let recomputed = recompute(&records, &[0, 0, 0], 1);
    // 67 / 3 and 11 / 3 truncate; income is a true mean.
    assert_eq!(recomputed, vec![Centroid::new(22, 2.0, 3)]);
}
