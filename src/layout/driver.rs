use crate::layout::{ConfigError, Layout, LayoutEvent, OverlapPass, PassReport, RemovalOptions};
use crate::math::Real;

/// Outcome of running passes until no overlap is left.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Convergence {
    /// Number of passes that were run.
    pub passes: usize,
    /// Movement reported by the last pass.
    pub last_movement: Real,
    /// Movement accumulated over all passes.
    pub total_movement: Real,
    /// Did the last pass move nothing? `false` if the pass limit was hit first.
    pub converged: bool,
}

/// Runs passes until one of them moves nothing, or until `max_passes` passes ran.
///
/// `run_pass` runs a single pass and returns its report. Bodies move during a pass, so
/// it must look them up in an index that is up to date with their current positions:
/// a pass over a stale index may miss overlaps and report a false convergence.
///
/// Hitting the limit is not an error: the bodies are left in their best-effort state
/// and [`Convergence::converged`] is `false`.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use deoverlap::layout::{run_to_convergence, Bodies, OverlapPass, RemovalOptions};
/// # use deoverlap::math::{Point, Real};
/// # use deoverlap::shape::DeclaredSize;
/// use deoverlap::partitioning::Quadtree;
/// use deoverlap::shape::LayoutBox;
///
/// # struct Nodes(Vec<Point<Real>>);
/// # impl Bodies for Nodes {
/// #     type Id = usize;
/// #     fn collect_ids(&self, out: &mut Vec<usize>) { out.extend(0..self.0.len()) }
/// #     fn position(&self, id: usize) -> Option<Point<Real>> { self.0.get(id).copied() }
/// #     fn set_position(&mut self, id: usize, pt: Point<Real>) { self.0[id] = pt }
/// #     fn declared_size(&self, _: usize) -> DeclaredSize { DeclaredSize::NONE }
/// #     fn invalidate_forces(&mut self, _: usize) {}
/// # }
/// let mut nodes = Nodes(vec![Point::origin(), Point::new(2.0, 1.0, 0.0)]);
/// let mut pass = OverlapPass::new(&RemovalOptions::default().with_seed(0)).unwrap();
/// let size = pass.default_size();
///
/// let result = run_to_convergence(100, || {
///     let index: Quadtree<usize> = nodes
///         .0
///         .iter()
///         .enumerate()
///         .map(|(i, pt)| (i, LayoutBox::new(*pt, size).aabb()))
///         .collect();
///     pass.run(&mut nodes, index.root())
/// });
///
/// assert!(result.converged);
/// # }
/// ```
pub fn run_to_convergence(
    max_passes: usize,
    mut run_pass: impl FnMut() -> PassReport,
) -> Convergence {
    let mut result = Convergence::default();

    while result.passes < max_passes {
        let report = run_pass();
        result.passes += 1;
        result.last_movement = report.total_movement;
        result.total_movement += report.total_movement;

        if report.is_stable() {
            result.converged = true;
            log::debug!("Overlaps removed after {} passes.", result.passes);
            return result;
        }
    }

    log::warn!(
        "Overlaps remain after {} passes (last pass moved bodies by {}).",
        result.passes,
        result.last_movement
    );
    result
}

/// Removes the overlaps of `layout` right away, blocking until no overlap is left or
/// until [`RemovalOptions::max_passes`] passes ran.
///
/// The layout is asked for its bodies and index before every pass.
pub fn resolve_until_stable<L: Layout>(
    layout: &mut L,
    options: &RemovalOptions,
) -> Result<Convergence, ConfigError> {
    let mut pass = OverlapPass::new(options)?;

    Ok(run_to_convergence(options.max_passes, || {
        let (bodies, root) = layout.bodies_and_index();
        pass.run(bodies, root)
    }))
}

/// The lifecycle state of an [`OverlapRemover`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RemoverState {
    /// Subscribed to the layout, running a pass on each notification.
    Active,
    /// Unsubscribed. This state is terminal.
    Disposed,
}

/// Removes overlaps as the layout runs, one pass per notification.
///
/// The remover subscribes to every [`LayoutEvent`] when attached. The host then forwards
/// each notification to [`OverlapRemover::handle_event`]:
///
/// - [`LayoutEvent::Step`] and [`LayoutEvent::Stable`] run exactly one pass,
/// - [`LayoutEvent::Disposed`] disposes the remover.
#[derive(Debug)]
pub struct OverlapRemover {
    pass: OverlapPass,
    state: RemoverState,
}

impl OverlapRemover {
    /// Validates `options` and subscribes to the layout's notifications.
    ///
    /// Nothing is subscribed if the options are invalid.
    pub fn attach<L: Layout>(
        layout: &mut L,
        options: &RemovalOptions,
    ) -> Result<Self, ConfigError> {
        let pass = OverlapPass::new(options)?;

        for event in LayoutEvent::ALL {
            layout.subscribe(event);
        }

        log::debug!("Overlap remover attached to the layout.");

        Ok(Self {
            pass,
            state: RemoverState::Active,
        })
    }

    /// The lifecycle state of this remover.
    pub fn state(&self) -> RemoverState {
        self.state
    }

    /// Is this remover still subscribed to the layout?
    pub fn is_active(&self) -> bool {
        self.state == RemoverState::Active
    }

    /// Reacts to a notification of the layout.
    ///
    /// Returns the report of the pass that ran, if any. Notifications received after
    /// disposal are ignored.
    pub fn handle_event<L: Layout>(
        &mut self,
        layout: &mut L,
        event: LayoutEvent,
    ) -> Option<PassReport> {
        if !self.is_active() {
            log::debug!("Ignoring {event:?} notification: the overlap remover is disposed.");
            return None;
        }

        match event {
            LayoutEvent::Step | LayoutEvent::Stable => {
                let (bodies, root) = layout.bodies_and_index();
                Some(self.pass.run(bodies, root))
            }
            LayoutEvent::Disposed => {
                self.dispose(layout);
                None
            }
        }
    }

    /// Unsubscribes from every notification of the layout.
    ///
    /// Calling this more than once has no further effect.
    pub fn dispose<L: Layout>(&mut self, layout: &mut L) {
        if self.state == RemoverState::Disposed {
            return;
        }

        for event in LayoutEvent::ALL {
            layout.unsubscribe(event);
        }

        self.state = RemoverState::Disposed;
        log::debug!("Overlap remover detached from the layout.");
    }
}

/// What [`remove_overlaps`] did, depending on [`RemovalOptions::active`].
#[derive(Debug)]
pub enum RemovalOutcome {
    /// Active mode: the remover is subscribed to the layout.
    Subscribed(OverlapRemover),
    /// Blocking mode: the passes already ran.
    Converged(Convergence),
}

impl RemovalOutcome {
    /// Unsubscribes from the layout if needed. Safe to call any number of times.
    pub fn dispose<L: Layout>(&mut self, layout: &mut L) {
        if let RemovalOutcome::Subscribed(remover) = self {
            remover.dispose(layout);
        }
    }

    /// The subscribed remover, if running in active mode.
    pub fn remover(&mut self) -> Option<&mut OverlapRemover> {
        match self {
            RemovalOutcome::Subscribed(remover) => Some(remover),
            RemovalOutcome::Converged(_) => None,
        }
    }

    /// The result of the blocking passes, if running in blocking mode.
    pub fn convergence(&self) -> Option<&Convergence> {
        match self {
            RemovalOutcome::Subscribed(_) => None,
            RemovalOutcome::Converged(convergence) => Some(convergence),
        }
    }
}

/// Removes the overlaps between the bodies of `layout`.
///
/// With [`RemovalOptions::active`] set, subscribes to the layout and returns the
/// remover (see [`OverlapRemover`]). Otherwise runs passes right away until no overlap
/// is left (see [`resolve_until_stable`]).
///
/// Invalid options are reported before anything runs or gets subscribed.
pub fn remove_overlaps<L: Layout>(
    layout: &mut L,
    options: &RemovalOptions,
) -> Result<RemovalOutcome, ConfigError> {
    if options.active {
        OverlapRemover::attach(layout, options).map(RemovalOutcome::Subscribed)
    } else {
        resolve_until_stable(layout, options).map(RemovalOutcome::Converged)
    }
}
