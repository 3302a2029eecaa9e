//! The two per-round stages of centroid refinement: nearest-centroid assignment and centroid recomputation.

mod assign;
mod recompute;

pub use assign::{assign, nearest};
pub use recompute::{ClusterSums, recompute};
pub(crate) use recompute::truncate;
