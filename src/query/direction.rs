//! Directions along which overlapping boxes are pushed apart.

use crate::math::{PlanarVector, Point, Real, Vector, PI, TAU};
use rand::Rng;

/// A unit vector of the x/y plane with an angle drawn uniformly from `[0, 2π)`.
pub fn random_unit_circle<R: Rng + ?Sized>(rng: &mut R) -> PlanarVector<Real> {
    let phi: Real = rng.gen_range(0.0..TAU);
    PlanarVector::new(phi.cos(), phi.sin())
}

/// A unit vector built from an azimuth drawn uniformly from `[0, 2π)` and an
/// independent polar angle drawn uniformly from `[0, π]`.
///
/// Because the polar angle is uniform, directions cluster slightly near the poles.
pub fn random_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vector<Real> {
    let theta: Real = rng.gen_range(0.0..TAU);
    let phi: Real = rng.gen_range(0.0..=PI);
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vector::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
}

/// The unit direction from `to` towards `from`, restricted to the x/y plane.
///
/// Falls back to [`random_unit_circle`] when both points share the same x/y coordinates.
pub fn planar_direction<R: Rng + ?Sized>(
    from: &Point<Real>,
    to: &Point<Real>,
    rng: &mut R,
) -> PlanarVector<Real> {
    let delta = PlanarVector::new(from.x - to.x, from.y - to.y);
    delta
        .try_normalize(0.0)
        .unwrap_or_else(|| random_unit_circle(rng))
}

/// The unit direction from `to` towards `from`.
///
/// Falls back to [`random_unit_sphere`] when both points coincide.
pub fn spatial_direction<R: Rng + ?Sized>(
    from: &Point<Real>,
    to: &Point<Real>,
    rng: &mut R,
) -> Vector<Real> {
    (from - to)
        .try_normalize(0.0)
        .unwrap_or_else(|| random_unit_sphere(rng))
}
