//! The items being clustered and the representatives of their clusters.

use serde::{Deserialize, Serialize};

use crate::distance;

/// A customer in the record store.
///
/// Records are immutable once created. The `id` identifies the customer and is never used for clustering; only the three numeric attributes are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier of the customer.
    id: String,
    /// Age in years.
    age: i64,
    /// Annual income.
    annual_income: f64,
    /// Purchase score.
    purchase_score: i64,
}

impl Record {
    /// Creates a new `Record`.
    #[must_use]
    pub fn new<S: Into<String>>(id: S, age: i64, annual_income: f64, purchase_score: i64) -> Self {
        Self {
            id: id.into(),
            age,
            annual_income,
            purchase_score,
        }
    }

    /// Returns the identifier of the customer.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the age of the customer.
    #[must_use]
    pub const fn age(&self) -> i64 {
        self.age
    }

    /// Returns the annual income of the customer.
    #[must_use]
    pub const fn annual_income(&self) -> f64 {
        self.annual_income
    }

    /// Returns the purchase score of the customer.
    #[must_use]
    pub const fn purchase_score(&self) -> i64 {
        self.purchase_score
    }

    /// The numeric attributes, in the order (age, income, purchase score), as floating point values.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn features(&self) -> [f64; 3] {
        [self.age as f64, self.annual_income, self.purchase_score as f64]
    }

    /// Euclidean distance from this record to a centroid.
    #[must_use]
    pub fn distance_to(&self, centroid: &Centroid) -> f64 {
        distance::euclidean(&self.features(), &centroid.features())
    }
}

/// The mean of a cluster of `Record`s.
///
/// Integer-typed attributes are truncated whenever a `Centroid` is produced by division.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Centroid {
    /// Mean age.
    pub age: i64,
    /// Mean annual income.
    pub annual_income: f64,
    /// Mean purchase score.
    pub purchase_score: i64,
}

impl Centroid {
    /// Creates a new `Centroid`.
    #[must_use]
    pub const fn new(age: i64, annual_income: f64, purchase_score: i64) -> Self {
        Self {
            age,
            annual_income,
            purchase_score,
        }
    }

    /// The zero-valued placeholder used for clusters that received no records.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0, 0.0, 0)
    }

    /// The numeric attributes, in the order (age, income, purchase score), as floating point values.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn features(&self) -> [f64; 3] {
        [self.age as f64, self.annual_income, self.purchase_score as f64]
    }
}

impl From<&Record> for Centroid {
    fn from(record: &Record) -> Self {
        Self::new(record.age, record.annual_income, record.purchase_score)
    }
}

impl core::fmt::Display for Centroid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "(age: {}, annual_income: {:.2}, purchase_score: {})",
            self.age, self.annual_income, self.purchase_score
        )
    }
}

/// The outcome of one run: the centroids it produced and their total distance to the whole record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringResult {
    /// The `k` centroids, indexed by cluster.
    pub centroids: Vec<Centroid>,
    /// Sum over all records of the distance to their nearest centroid.
    pub total_distance: f64,
}

impl ClusteringResult {
    /// Returns the number of clusters.
    #[must_use]
    pub fn k(&self) -> usize {
        self.centroids.len()
    }
}
