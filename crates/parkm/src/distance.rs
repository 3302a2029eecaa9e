//! Dissimilarity between records and centroids.

/// Euclidean distance between two points in the (age, income, purchase score) space.
///
/// The attributes are neither normalized nor weighted. Accumulation happens in `f64`, so large incomes cannot overflow.
#[must_use]
pub fn euclidean(x: &[f64; 3], y: &[f64; 3]) -> f64 {
    euclidean_sq(x, y).sqrt()
}

/// Squared Euclidean distance between two points.
#[must_use]
pub fn euclidean_sq(x: &[f64; 3], y: &[f64; 3]) -> f64 {
    x.iter().zip(y).map(|(&a, &b)| a - b).map(|d| d * d).sum()
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    #[test]
    fn pythagorean() {
        let d = super::euclidean(&[0.0, 3.0, 0.0], &[0.0, 0.0, 4.0]);
        assert!(approx_eq!(f64, d, 5.0, ulps = 2), "Expected 5, got {d}");
        assert!(approx_eq!(f64, super::euclidean_sq(&[1.0, 1.0, 1.0], &[0.0, 0.0, 0.0]), 3.0, ulps = 2));
    }
}
