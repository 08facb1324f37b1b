use crate::math::Real;
use crate::query::direction::spatial_direction;
use crate::query::Overlap;
use crate::shape::LayoutBox;
use rand::Rng;

/// Pushes two overlapping boxes apart along all three axes.
///
/// The shift has magnitude `cbrt(ox * oy * oz)` and points from `b` towards `a` (or
/// along a random direction if their centers coincide). Half of it is added to `a`'s
/// center and half is subtracted from `b`'s center.
///
/// Returns `|shift.x| + |shift.y| + |shift.z|`, the movement contributed by this pair.
pub fn resolve_volumetric<R: Rng + ?Sized>(
    overlap: &Overlap,
    a: &mut LayoutBox,
    b: &mut LayoutBox,
    rng: &mut R,
) -> Real {
    let magnitude = overlap.volume().cbrt();
    let dir = spatial_direction(&a.center, &b.center, rng);
    let shift = dir * magnitude;
    let half_shift = shift * 0.5;

    a.center += half_shift;
    b.center -= half_shift;

    shift.abs().sum()
}
