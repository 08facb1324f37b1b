use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::Size;

/// An axis-aligned box centered on a body.
///
/// This is the scratch value the overlap pass rebuilds for every body it visits: it
/// lives on the stack, gets moved around by the resolvers, and its center is then
/// written back to the body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutBox {
    /// The center of the box, i.e., the position of the body.
    pub center: Point<Real>,
    /// Half the width, height and depth of the box. Never negative.
    pub half_extents: Vector<Real>,
}

impl LayoutBox {
    /// Creates a box centered at `center` with the given `size`.
    #[inline]
    pub fn new(center: Point<Real>, size: Size) -> Self {
        Self {
            center,
            half_extents: size.half_extents(),
        }
    }

    /// The AABB covered by this box.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, self.half_extents)
    }

    /// The signed overlap amounts between `self` and `other` along each axis.
    ///
    /// See [`Aabb::overlap_amounts`].
    #[inline]
    pub fn overlap_amounts(&self, other: &LayoutBox) -> Vector<Real> {
        self.aabb().overlap_amounts(&other.aabb())
    }
}
