//! Splitting the record store into contiguous partitions.

use core::ops::Range;

/// Splits `0..n` into `w` contiguous, disjoint ranges that together cover every index exactly once.
///
/// Every range has `n / w` indices except the last, which also absorbs the `n % w` remainder. When `w > n`, all ranges but the last are empty.
///
/// The user must ensure that `w` is positive.
#[must_use]
pub fn contiguous(n: usize, w: usize) -> Vec<Range<usize>> {
    let size = n / w;
    (0..w)
        .map(|i| {
            let start = i * size;
            let end = if i == w - 1 { n } else { start + size };
            start..end
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    #[test_case(10, 1; "10/1")]
    #[test_case(10, 3; "10/3")]
    #[test_case(200, 6; "200/6")]
    #[test_case(3, 5; "3/5")]
    #[test_case(0, 4; "0/4")]
    fn covers_exactly(n: usize, w: usize) {
        let ranges = super::contiguous(n, w);
        assert_eq!(ranges.len(), w);

        let sizes = ranges.iter().map(ExactSizeIterator::len).collect::<Vec<_>>();
        assert_eq!(sizes.iter().sum::<usize>(), n, "Sizes {sizes:?} do not sum to {n}");
        assert!(sizes[..w - 1].iter().all(|&s| s == n / w), "Sizes {sizes:?} are not equal before the last");
        assert_eq!(sizes[w - 1], n / w + n % w);

        let mut expected_start = 0;
        for r in &ranges {
            assert_eq!(r.start, expected_start, "Gap or overlap in {ranges:?}");
            expected_start = r.end;
        }
        assert_eq!(expected_start, n);
    }
}
