/*!
deoverlap
========

**deoverlap** nudges apart axis-aligned boxes placed by a force-directed layout
until no two of them overlap.

The host owns the bodies, their positions and the spatial index (a quadtree or an octree).
This crate only reads sizes and the index, then writes positions back:

- [`query`] holds the pairwise geometry: overlap amounts and the displacement resolvers.
- [`partitioning`] walks the host's spatial index, pruning subtrees that cannot touch a box.
- [`layout`] runs resolution passes, either once per simulation step or until stable.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;
pub extern crate rand;

pub mod bounding_volume;
pub mod layout;
pub mod partitioning;
pub mod query;
pub mod shape;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector2, Vector3};

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The vector type of the layout plane (x/y).
    pub use Vector2 as PlanarVector;

    /// Archimedes' constant.
    pub const PI: Real = core::f64::consts::PI as Real;

    /// A full turn, in radians.
    pub const TAU: Real = core::f64::consts::TAU as Real;
}
