use crate::bounding_volume::Aabb;
use crate::partitioning::{traverse, SpatialNode, TraversalAction};

/// What the overlap pass should do with a node of the spatial index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeVisit<Id> {
    /// The node holds the body being tested. It is skipped entirely.
    Current,
    /// The node holds another body, which may overlap the tested one.
    Candidate(Id),
    /// The node holds no body and its region intersects the tested box: visit its children.
    Descend,
    /// The node holds no body and its region cannot intersect the tested box.
    Prune,
}

impl<Id> NodeVisit<Id> {
    /// The traversal action matching this visit.
    ///
    /// Only [`NodeVisit::Descend`] continues into the children: nodes holding a body are
    /// never subdivided.
    #[inline]
    pub fn action(&self) -> TraversalAction {
        match self {
            NodeVisit::Descend => TraversalAction::Continue,
            _ => TraversalAction::Prune,
        }
    }
}

/// Decides how to handle `node` while looking for bodies overlapping `query`, the box
/// of the body `current`.
///
/// Nodes without a body are pruned unless their region strictly intersects the x/y
/// projection of `query`. The z axis is ignored: pruning is a conservative superset of
/// the 3D overlap test.
#[inline]
pub fn classify<N: SpatialNode>(node: &N, current: N::Id, query: &Aabb) -> NodeVisit<N::Id> {
    match node.body() {
        Some(id) if id == current => NodeVisit::Current,
        Some(id) => NodeVisit::Candidate(id),
        None if query.intersects_xy(&node.aabb()) => NodeVisit::Descend,
        None => NodeVisit::Prune,
    }
}

/// Collects the bodies that may overlap `query`, the box of the body `current`.
///
/// The result is a superset of the bodies stored in regions strictly intersecting the
/// x/y projection of `query`. `current` itself is never collected.
pub fn collect_candidates<N: SpatialNode>(
    root: &N,
    current: N::Id,
    query: &Aabb,
    out: &mut Vec<N::Id>,
) {
    traverse(root, |node| {
        let visit = classify(node, current, query);

        if let NodeVisit::Candidate(id) = visit {
            out.push(id);
        }

        visit.action()
    });
}
