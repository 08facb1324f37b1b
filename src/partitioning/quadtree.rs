use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};
use crate::partitioning::SpatialNode;

/// A point-region quadtree over body boxes.
///
/// This is a small reference index for hosts that do not maintain one, and is cheap
/// enough to rebuild at every simulation step. Bodies are dispatched into square cells
/// of the x/y plane according to their center, and each node holds at most one body.
/// Bodies at (nearly) the same position are kept as sibling leaves under a single node
/// once [`Quadtree::MAX_DEPTH`] is reached.
///
/// The region reported by a node encloses every box stored below it, so a box
/// overlapping the query is never pruned, even if its center lies outside the query.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use deoverlap::bounding_volume::Aabb;
/// use deoverlap::partitioning::{collect_candidates, Quadtree};
/// use nalgebra::{Point3, Vector3};
///
/// let tree = Quadtree::from_bodies([
///     (0, Point3::new(0.0, 0.0, 0.0)),
///     (1, Point3::new(4.0, 0.0, 0.0)),
///     (2, Point3::new(100.0, 100.0, 0.0)),
///     (3, Point3::new(90.0, 90.0, 0.0)),
/// ]);
///
/// let query = Aabb::from_half_extents(Point3::origin(), Vector3::repeat(5.0));
/// let mut candidates = vec![];
/// collect_candidates(tree.root().unwrap(), 0, &query, &mut candidates);
/// assert_eq!(candidates, vec![1]);
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Quadtree<Id> {
    root: Option<QuadtreeNode<Id>>,
    len: usize,
}

/// A node of a [`Quadtree`].
#[derive(Clone, Debug)]
pub struct QuadtreeNode<Id> {
    cell: Aabb,
    aabb: Aabb,
    body: Option<(Id, Aabb)>,
    children: Vec<QuadtreeNode<Id>>,
}

impl<Id> Default for Quadtree<Id> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<Id: Copy + PartialEq> Quadtree<Id> {
    /// Depth past which coincident bodies stop being subdivided.
    pub const MAX_DEPTH: usize = 24;

    /// An empty quadtree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a quadtree containing the given bodies, each covering the given box.
    pub fn from_boxes(bodies: impl IntoIterator<Item = (Id, Aabb)>) -> Self {
        let bodies: Vec<_> = bodies.into_iter().collect();

        if bodies.is_empty() {
            return Self::new();
        }

        let centers = Aabb::from_points(bodies.iter().map(|(_, aabb)| aabb.center()));
        let mut root = QuadtreeNode::empty(square_xy(&centers).loosened(1.0));

        for (id, aabb) in &bodies {
            root.insert(*id, *aabb, 0);
        }

        let _ = root.refit();

        Self {
            root: Some(root),
            len: bodies.len(),
        }
    }

    /// Builds a quadtree containing the given bodies, each reduced to a point.
    pub fn from_bodies(bodies: impl IntoIterator<Item = (Id, Point<Real>)>) -> Self {
        Self::from_boxes(
            bodies
                .into_iter()
                .map(|(id, pt)| (id, Aabb::new(pt, pt))),
        )
    }

    /// The root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&QuadtreeNode<Id>> {
        self.root.as_ref()
    }

    /// The number of bodies in this tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is this tree empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<Id: Copy + PartialEq> FromIterator<(Id, Aabb)> for Quadtree<Id> {
    fn from_iter<T: IntoIterator<Item = (Id, Aabb)>>(iter: T) -> Self {
        Self::from_boxes(iter)
    }
}

impl<Id: Copy + PartialEq> QuadtreeNode<Id> {
    fn empty(cell: Aabb) -> Self {
        Self {
            cell,
            aabb: cell,
            body: None,
            children: Vec::new(),
        }
    }

    fn leaf(cell: Aabb, id: Id, aabb: Aabb) -> Self {
        Self {
            cell,
            aabb,
            body: Some((id, aabb)),
            children: Vec::new(),
        }
    }

    fn insert(&mut self, id: Id, aabb: Aabb, depth: usize) {
        if self.children.is_empty() {
            let Some((other_id, other_aabb)) = self.body.take() else {
                self.body = Some((id, aabb));
                return;
            };

            if depth >= Quadtree::<Id>::MAX_DEPTH {
                self.children.push(Self::leaf(self.cell, other_id, other_aabb));
                self.children.push(Self::leaf(self.cell, id, aabb));
            } else {
                self.children = self.cell.split_xy().map(Self::empty).into();
                self.insert_in_quadrant(other_id, other_aabb, depth);
                self.insert_in_quadrant(id, aabb, depth);
            }
        } else if depth >= Quadtree::<Id>::MAX_DEPTH {
            self.children.push(Self::leaf(self.cell, id, aabb));
        } else {
            self.insert_in_quadrant(id, aabb, depth);
        }
    }

    fn insert_in_quadrant(&mut self, id: Id, aabb: Aabb, depth: usize) {
        let center = self.cell.center();
        let pt = aabb.center();
        let quadrant = (pt.x >= center.x) as usize | (((pt.y >= center.y) as usize) << 1);
        self.children[quadrant].insert(id, aabb, depth + 1);
    }

    /// Recomputes the region of this node from its body and children, and returns it.
    fn refit(&mut self) -> Aabb {
        self.aabb = match self.body {
            Some((_, aabb)) => aabb,
            None => self.cell,
        };

        for child in &mut self.children {
            let child_aabb = child.refit();
            self.aabb.merge(&child_aabb);
        }

        self.aabb
    }
}

impl<Id: Copy + PartialEq> SpatialNode for QuadtreeNode<Id> {
    type Id = Id;

    #[inline]
    fn body(&self) -> Option<Id> {
        self.body.map(|(id, _)| id)
    }

    #[inline]
    fn aabb(&self) -> Aabb {
        self.aabb
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }
}

/// Grows the x/y extents of `aabb` to a square sharing the same min corner.
fn square_xy(aabb: &Aabb) -> Aabb {
    let extents = aabb.extents();
    let side = extents.x.max(extents.y);
    let mut result = *aabb;
    result.maxs.x = result.mins.x + side;
    result.maxs.y = result.mins.y + side;
    result
}
