//! Pairwise overlap queries and their resolution.
//!
//! The functions of this module are pure geometry on [`LayoutBox`](crate::shape::LayoutBox)es:
//!
//! * [`overlap()`] and [`Overlap`] measure how much two boxes overlap along each axis.
//! * [`resolve_planar()`] pushes two overlapping boxes apart within the x/y plane.
//! * [`resolve_volumetric()`] pushes them apart along all three axes.
//!
//! When two centers coincide, the resolvers pick a random direction from the [`direction`]
//! module, so coincident boxes still get separated.

pub use self::overlap::{overlap, Overlap};
pub use self::resolve::{
    resolve_planar, resolve_volumetric, OverlapResolver, PlanarResolver, ResolutionStrategy,
    VolumetricResolver,
};

pub mod direction;
mod overlap;
mod resolve;
