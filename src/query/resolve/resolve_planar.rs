use crate::math::Real;
use crate::query::direction::planar_direction;
use crate::query::Overlap;
use crate::shape::LayoutBox;
use rand::Rng;

/// Pushes two overlapping boxes apart within the x/y plane.
///
/// The shift has magnitude `sqrt(ox * oy)`, the geometric mean of the in-plane overlap
/// amounts, and points from `b` towards `a` (or along a random direction of the plane
/// if their centers share the same x/y coordinates). Half of it is added to `a`'s center
/// and half is subtracted from `b`'s center, so the midpoint of the pair does not move.
/// The z coordinates are left untouched, even though the z overlap is required for the
/// boxes to be considered overlapping in the first place.
///
/// Returns `|shift.x| + |shift.y|`, the movement contributed by this pair.
pub fn resolve_planar<R: Rng + ?Sized>(
    overlap: &Overlap,
    a: &mut LayoutBox,
    b: &mut LayoutBox,
    rng: &mut R,
) -> Real {
    let magnitude = overlap.planar_area().sqrt();
    let dir = planar_direction(&a.center, &b.center, rng);
    let shift = dir * magnitude;
    let half_shift = shift * 0.5;

    a.center.x += half_shift.x;
    a.center.y += half_shift.y;
    b.center.x -= half_shift.x;
    b.center.y -= half_shift.y;

    shift.x.abs() + shift.y.abs()
}
