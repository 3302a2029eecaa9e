//! Partitioned, multi-start centroid clustering of customer records.
//!
//! Each run splits the record store into contiguous partitions and hands them to a pool of workers. Every worker assigns its records to the nearest of
//! a shared set of initial centroids and sums the records of each cluster. The partial results are then combined into one centroid set, which is scored
//! by its total distance to the whole record store. The best of many such runs is kept.
//!
//! ## Modules
//!
//! - [`distance`]: Euclidean distance over (age, income, purchase score).
//! - [`stages`]: nearest-centroid assignment and centroid recomputation.
//! - [`reducer`]: the partitioned reducer and its [`CombinePolicy`].
//! - [`search`]: the multi-run search and the [`Seeding`] policies.
//! - [`io`]: CSV ingestion of the record store.
//! - [`generate`]: synthetic customers.

pub mod distance;
pub mod generate;
pub mod io;
mod record;
pub mod reducer;
pub mod search;
pub mod stages;

pub use record::{Centroid, ClusteringResult, Record};
pub use reducer::{CombinePolicy, PartitionedReducer};
pub use search::{MultiRunSearch, Seeding, score};
