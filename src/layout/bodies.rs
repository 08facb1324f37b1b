use crate::math::{Point, Real};
use crate::partitioning::SpatialNode;
use crate::shape::DeclaredSize;
use core::fmt::Debug;

/// The set of bodies positioned by the host's simulation.
///
/// The host owns the bodies: this crate reads their positions and declared sizes,
/// writes positions back, and asks the host to refresh any force it cached for a
/// body that was moved.
pub trait Bodies {
    /// The stable identifier of a body.
    type Id: Copy + PartialEq + Debug;

    /// Appends the identifier of every body to `out`, in the order they should be visited.
    ///
    /// The order does not need to be deterministic across calls, but each body must
    /// appear exactly once.
    fn collect_ids(&self, out: &mut Vec<Self::Id>);

    /// The current position of a body, or `None` if `id` is unknown.
    fn position(&self, id: Self::Id) -> Option<Point<Real>>;

    /// Moves a body.
    fn set_position(&mut self, id: Self::Id, position: Point<Real>);

    /// The dimensions declared by the body's own data.
    ///
    /// Missing dimensions are replaced by the configured default size.
    fn declared_size(&self, id: Self::Id) -> DeclaredSize;

    /// Called after a body was moved, so the host can recompute the forces it cached for it.
    fn invalidate_forces(&mut self, id: Self::Id);
}

/// The host running the force-directed layout.
pub trait Layout {
    /// The bodies positioned by this layout.
    type Bodies: Bodies;
    /// The node type of the spatial index over the bodies.
    type Node: SpatialNode<Id = <Self::Bodies as Bodies>::Id>;

    /// Borrows the bodies mutably and the root of the spatial index immutably.
    ///
    /// Called once before every pass, so the host may refresh its index here. Returns
    /// `None` as the index root when the index is empty.
    fn bodies_and_index(&mut self) -> (&mut Self::Bodies, Option<&Self::Node>);

    /// Starts delivering `event` to the overlap remover.
    fn subscribe(&mut self, event: LayoutEvent);

    /// Stops delivering `event` to the overlap remover.
    fn unsubscribe(&mut self, event: LayoutEvent);
}

/// Notifications emitted by the layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutEvent {
    /// A single simulation step completed.
    Step,
    /// The simulation reports it has settled.
    Stable,
    /// The simulation was torn down.
    Disposed,
}

impl LayoutEvent {
    /// All the events an active overlap remover listens to.
    pub const ALL: [LayoutEvent; 3] = [
        LayoutEvent::Step,
        LayoutEvent::Stable,
        LayoutEvent::Disposed,
    ];
}
