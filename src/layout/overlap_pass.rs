use crate::layout::{Bodies, ConfigError, RemovalOptions};
use crate::math::Real;
use crate::partitioning::{classify, traverse, NodeVisit, SpatialNode};
use crate::query::{overlap, OverlapResolver, ResolutionStrategy};
use crate::shape::{LayoutBox, Size};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Summary of a single overlap pass.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PassReport {
    /// Sum of the movements returned by the resolver for every resolved pair.
    pub total_movement: Real,
    /// Number of overlapping pairs that were pushed apart.
    ///
    /// A pair may be counted twice if it still overlaps when its second body is visited.
    pub resolved_pairs: usize,
    /// Number of bodies tested against the spatial index.
    pub visited_bodies: usize,
}

impl PassReport {
    /// Did this pass leave every body where it was?
    #[inline]
    pub fn is_stable(&self) -> bool {
        self.total_movement <= 0.0
    }
}

/// One sweep over every body, pushing apart the overlapping pairs it finds.
///
/// For each body, in the order given by [`Bodies::collect_ids`], the pass builds the
/// body's box, walks the spatial index for nearby bodies, and resolves each overlapping
/// pair immediately: both new positions are written back and the host is asked to
/// refresh the forces of both bodies. Positions are not snapshotted, so a body visited
/// later may already have been moved during the same pass.
#[derive(Clone, Debug)]
pub struct OverlapPass {
    default_size: Size,
    strategy: ResolutionStrategy,
    rng: StdRng,
}

impl OverlapPass {
    /// Creates a pass configured by `options`.
    pub fn new(options: &RemovalOptions) -> Result<Self, ConfigError> {
        options.validate()?;

        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            default_size: options.default_size,
            strategy: options.strategy,
            rng,
        })
    }

    /// The size of the bodies that do not declare one.
    pub fn default_size(&self) -> Size {
        self.default_size
    }

    /// Runs one pass over all the bodies.
    ///
    /// Does nothing if the spatial index is empty (`root` is `None`).
    pub fn run<B, N>(&mut self, bodies: &mut B, root: Option<&N>) -> PassReport
    where
        B: Bodies,
        N: SpatialNode<Id = B::Id>,
    {
        let mut report = PassReport::default();

        let Some(root) = root else {
            log::trace!("Overlap pass skipped: the spatial index is empty.");
            return report;
        };

        let mut ids = Vec::new();
        bodies.collect_ids(&mut ids);

        for &id in &ids {
            let Some(center) = bodies.position(id) else {
                log::debug!("Skipping unknown body {id:?}.");
                continue;
            };

            let size = self.default_size.resolve(&bodies.declared_size(id));
            let mut current = LayoutBox::new(center, size);
            report.visited_bodies += 1;

            traverse(root, |node| {
                let visit = classify(node, id, &current.aabb());

                if let NodeVisit::Candidate(other) = visit {
                    if let Some(movement) = self.resolve_pair(bodies, id, &mut current, other) {
                        report.total_movement += movement;
                        report.resolved_pairs += 1;
                    }
                }

                visit.action()
            });
        }

        log::trace!(
            "Overlap pass: {} bodies, {} pairs resolved, total movement {}.",
            report.visited_bodies,
            report.resolved_pairs,
            report.total_movement
        );

        report
    }

    /// Pushes `current` (the box of `id`) and `other` apart if they overlap, and returns
    /// the movement applied.
    fn resolve_pair<B: Bodies>(
        &mut self,
        bodies: &mut B,
        id: B::Id,
        current: &mut LayoutBox,
        other: B::Id,
    ) -> Option<Real> {
        let Some(center) = bodies.position(other) else {
            log::debug!("The spatial index references an unknown body {other:?}.");
            return None;
        };

        let size = self.default_size.resolve(&bodies.declared_size(other));
        let mut other_box = LayoutBox::new(center, size);
        let overlap = overlap(current, &other_box)?;
        let movement = self
            .strategy
            .resolve(&overlap, current, &mut other_box, &mut self.rng);

        bodies.set_position(id, current.center);
        bodies.set_position(other, other_box.center);
        bodies.invalidate_forces(id);
        bodies.invalidate_forces(other);

        Some(movement)
    }
}
