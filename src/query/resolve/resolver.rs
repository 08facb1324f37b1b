use crate::math::Real;
use crate::query::{resolve_planar, resolve_volumetric, Overlap};
use crate::shape::LayoutBox;
use rand::RngCore;

/// Trait implemented by the policies that push two overlapping boxes apart.
///
/// Implementors must move both boxes by equal and opposite amounts, and return the
/// movement contributed by the pair (a non-negative value that is zero only if nothing
/// moved).
pub trait OverlapResolver {
    /// Moves `a` and `b` so that they overlap less, and returns the movement applied.
    fn resolve(
        &self,
        overlap: &Overlap,
        a: &mut LayoutBox,
        b: &mut LayoutBox,
        rng: &mut dyn RngCore,
    ) -> Real;
}

/// Resolves overlaps within the x/y plane. See [`resolve_planar`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlanarResolver;

impl OverlapResolver for PlanarResolver {
    #[inline]
    fn resolve(
        &self,
        overlap: &Overlap,
        a: &mut LayoutBox,
        b: &mut LayoutBox,
        rng: &mut dyn RngCore,
    ) -> Real {
        resolve_planar(overlap, a, b, rng)
    }
}

/// Resolves overlaps along all three axes. See [`resolve_volumetric`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct VolumetricResolver;

impl OverlapResolver for VolumetricResolver {
    #[inline]
    fn resolve(
        &self,
        overlap: &Overlap,
        a: &mut LayoutBox,
        b: &mut LayoutBox,
        rng: &mut dyn RngCore,
    ) -> Real {
        resolve_volumetric(overlap, a, b, rng)
    }
}

/// The built-in resolution policies.
///
/// Layouts that are conceptually flat (z only used for small offsets) should stick to
/// the default [`ResolutionStrategy::Planar`] so bodies are not pushed out of their plane.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResolutionStrategy {
    /// Shift along x and y only, by `sqrt(ox * oy)`.
    #[default]
    Planar,
    /// Shift along x, y and z, by `cbrt(ox * oy * oz)`.
    Volumetric,
}

impl OverlapResolver for ResolutionStrategy {
    #[inline]
    fn resolve(
        &self,
        overlap: &Overlap,
        a: &mut LayoutBox,
        b: &mut LayoutBox,
        rng: &mut dyn RngCore,
    ) -> Real {
        match self {
            Self::Planar => PlanarResolver.resolve(overlap, a, b, rng),
            Self::Volumetric => VolumetricResolver.resolve(overlap, a, b, rng),
        }
    }
}
