use crate::math::{Real, Vector};
use crate::shape::LayoutBox;

/// The signed overlap between two boxes along each axis.
///
/// Each component is `min(a.max, b.max) - max(a.min, b.min)` on its axis: positive
/// when the boxes overlap along that axis, negative when they are apart.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Overlap {
    /// The overlap length along the x, y and z axes.
    pub amounts: Vector<Real>,
}

impl Overlap {
    /// Computes the overlap amounts between two boxes.
    ///
    /// This is symmetric: `Overlap::between(a, b) == Overlap::between(b, a)`.
    #[inline]
    pub fn between(a: &LayoutBox, b: &LayoutBox) -> Self {
        Self {
            amounts: a.overlap_amounts(b),
        }
    }

    /// Do the boxes overlap?
    ///
    /// This is the full 3D test: every axis must overlap by a strictly positive amount.
    /// Boxes that only touch, or that are separated along z alone, do not overlap.
    #[inline]
    pub fn is_overlapping(&self) -> bool {
        self.amounts.x > 0.0 && self.amounts.y > 0.0 && self.amounts.z > 0.0
    }

    /// The area of the overlap projected on the x/y plane.
    #[inline]
    pub fn planar_area(&self) -> Real {
        self.amounts.x * self.amounts.y
    }

    /// The volume of the overlap.
    #[inline]
    pub fn volume(&self) -> Real {
        self.amounts.x * self.amounts.y * self.amounts.z
    }
}

/// Computes the overlap between two boxes, if they actually overlap.
#[inline]
pub fn overlap(a: &LayoutBox, b: &LayoutBox) -> Option<Overlap> {
    let overlap = Overlap::between(a, b);
    overlap.is_overlapping().then_some(overlap)
}
