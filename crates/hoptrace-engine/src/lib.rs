// Engine module - folds parsed hops into the per-target path tree
// This layer sits between parsed hops (parser) and persistence (index)

mod summary;
mod tree;

pub use summary::{TargetSummary, summarize};
pub use tree::PathTree;

use hoptrace_types::{HopObservation, PathSnapshot};

// Façade API - stable interface for the runtime layer

/// Build a tree from one run's hops and return its snapshot.
pub fn snapshot_of(target: &str, hops: &[HopObservation]) -> PathSnapshot {
    let mut tree = PathTree::new();
    tree.accumulate(target, hops);
    tree.snapshot()
}
