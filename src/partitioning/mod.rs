//! Spatial partitioning tools.
//!
//! The overlap pass never scans all bodies: for each body it walks the host's spatial
//! index and only descends into nodes whose region can touch the body's box.

pub use self::pruner::{classify, collect_candidates, NodeVisit};
pub use self::quadtree::{Quadtree, QuadtreeNode};
pub use self::spatial_node::SpatialNode;
pub use self::traversal::{traverse, TraversalAction};

mod pruner;
mod quadtree;
mod spatial_node;
mod traversal;
