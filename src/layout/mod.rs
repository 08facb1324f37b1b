//! Overlap removal driven by a force-directed layout.
//!
//! The host implements [`Bodies`] (and [`Layout`] to use the drivers). Then either:
//!
//! * call [`resolve_until_stable`] to remove overlaps right away, or
//! * attach an [`OverlapRemover`] and forward the layout's notifications to it, so one
//!   pass runs per simulation step.
//!
//! [`remove_overlaps`] picks one of the two based on [`RemovalOptions::active`].

pub use self::bodies::{Bodies, Layout, LayoutEvent};
pub use self::driver::{
    remove_overlaps, resolve_until_stable, run_to_convergence, Convergence, OverlapRemover,
    RemovalOutcome, RemoverState,
};
pub use self::error::ConfigError;
pub use self::options::RemovalOptions;
pub use self::overlap_pass::{OverlapPass, PassReport};

mod bodies;
mod driver;
mod error;
mod options;
mod overlap_pass;
