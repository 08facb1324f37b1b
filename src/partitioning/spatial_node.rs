use crate::bounding_volume::Aabb;

/// A node of a hierarchical spatial index (quadtree, octree, …) owned by the host.
///
/// A node either holds a single body, or holds none and subdivides its region into
/// children (four for a quadtree, eight for an octree). Nodes with children never hold
/// a body directly. Empty leaves are allowed.
pub trait SpatialNode {
    /// The identifier of the bodies stored in the index.
    type Id: Copy + PartialEq;

    /// The body stored in this node, if any.
    fn body(&self) -> Option<Self::Id>;

    /// The region covered by this node.
    ///
    /// Only the x/y extents are used when pruning.
    fn aabb(&self) -> Aabb;

    /// The children of this node, in the order they should be visited.
    fn children(&self) -> impl Iterator<Item = &Self>;
}
