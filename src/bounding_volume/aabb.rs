//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector};
use na;

/// An Axis-Aligned Bounding Box (AABB).
///
/// Boxes handled by the overlap removal are always axis-aligned: each one is described
/// by the center of a body and the half-extents derived from its width, height and depth.
/// The spatial index uses the same type for the region covered by each of its nodes.
///
/// # Structure
///
/// - **mins**: The point with the smallest coordinates on each axis.
/// - **maxs**: The point with the largest coordinates on each axis.
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use deoverlap::bounding_volume::Aabb;
/// use nalgebra::{Point3, Vector3};
///
/// // A 10x6x8 box centered at (5, 0, 0)
/// let aabb = Aabb::from_half_extents(Point3::new(5.0, 0.0, 0.0), Vector3::new(5.0, 3.0, 4.0));
///
/// assert_eq!(aabb.mins, Point3::new(0.0, -3.0, -4.0));
/// assert_eq!(aabb.maxs, Point3::new(10.0, 3.0, 4.0));
/// assert_eq!(aabb.center(), Point3::new(5.0, 0.0, 0.0));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with inverted bounds.
    ///
    /// Merging any valid AABB into it yields that AABB, which makes it the
    /// starting point when enclosing a set of boxes or points.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// Returns [`Aabb::new_invalid`] if the iterator is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();

        for pt in pts {
            result.take_point(pt);
        }

        result
    }

    /// Returns the center point of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents of this `Aabb`.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this `Aabb` so it also contains the point `pt`.
    #[inline]
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// The signed length of the overlap between `self` and `other` along each axis.
    ///
    /// For each axis this is `min(self.max, other.max) - max(self.min, other.min)`.
    /// A component is positive when the two boxes overlap along that axis, zero when
    /// they touch, and negative when they are apart (its opposite is then the gap).
    ///
    /// # Example
    ///
    /// ```rust
    /// # #[cfg(feature = "f32")] {
    /// use deoverlap::bounding_volume::Aabb;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let half = Vector3::new(5.0, 5.0, 5.0);
    /// let a = Aabb::from_half_extents(Point3::new(0.0, 0.0, 0.0), half);
    /// let b = Aabb::from_half_extents(Point3::new(5.0, 0.0, 20.0), half);
    ///
    /// assert_eq!(a.overlap_amounts(&b), Vector3::new(5.0, 10.0, -10.0));
    /// # }
    /// ```
    #[inline]
    pub fn overlap_amounts(&self, other: &Aabb) -> Vector<Real> {
        self.maxs.coords.inf(&other.maxs.coords) - self.mins.coords.sup(&other.mins.coords)
    }

    /// Strict intersection test between the projections of `self` and `other` on the x/y plane.
    ///
    /// Rectangles that merely touch along an edge are not considered intersecting. The z
    /// axis is ignored entirely.
    #[inline]
    pub fn intersects_xy(&self, other: &Aabb) -> bool {
        self.mins.x < other.maxs.x
            && self.maxs.x > other.mins.x
            && self.mins.y < other.maxs.y
            && self.maxs.y > other.mins.y
    }

    /// Splits this `Aabb` in four along the x/y plane at its center.
    ///
    /// The quadrants are ordered `(-x, -y)`, `(+x, -y)`, `(-x, +y)`, `(+x, +y)`.
    /// The z range is kept untouched.
    pub fn split_xy(&self) -> [Aabb; 4] {
        let center = self.center();
        let mut result = [*self; 4];

        for (i, quadrant) in result.iter_mut().enumerate() {
            if i & 1 == 0 {
                quadrant.maxs.x = center.x;
            } else {
                quadrant.mins.x = center.x;
            }

            if i & 2 == 0 {
                quadrant.maxs.y = center.y;
            } else {
                quadrant.mins.y = center.y;
            }
        }

        result
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }
}
