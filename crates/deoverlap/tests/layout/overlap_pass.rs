use crate::common::{grid, TestBodies};
use approx::assert_relative_eq;
use deoverlap::layout::{OverlapPass, PassReport, RemovalOptions};
use deoverlap::math::{Point, Real};
use deoverlap::partitioning::{Quadtree, QuadtreeNode};
use deoverlap::query::ResolutionStrategy;
use deoverlap::shape::{DeclaredSize, LayoutBox, Size};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn seeded_pass(seed: u64) -> OverlapPass {
    OverlapPass::new(&RemovalOptions::default().with_seed(seed)).unwrap()
}

fn run_once(pass: &mut OverlapPass, bodies: &mut TestBodies) -> PassReport {
    let index = bodies.index(pass.default_size());
    pass.run(bodies, index.root())
}

#[test]
fn side_by_side_boxes_are_pushed_apart_along_x() {
    let mut bodies = TestBodies::new(&[[0.0, 0.0, 0.0], [5.0, 0.0, 0.0]]);
    let report = run_once(&mut seeded_pass(0), &mut bodies);

    let shift = (50.0 as Real).sqrt();
    assert_relative_eq!(report.total_movement, shift, epsilon = 1.0e-4);
    assert_eq!(report.resolved_pairs, 1);
    assert_eq!(report.visited_bodies, 2);

    let [a, b] = [bodies.bodies[0].position, bodies.bodies[1].position];
    assert_relative_eq!(a.x, -shift / 2.0, epsilon = 1.0e-4);
    assert_relative_eq!(b.x, 5.0 + shift / 2.0, epsilon = 1.0e-4);
    assert_eq!(a.y, 0.0);
    assert_eq!(b.y, 0.0);

    // Both bodies were moved, so both must have their forces recomputed.
    assert_eq!(bodies.invalidated, vec![0, 1]);
}

#[test]
fn boxes_apart_along_z_do_not_move() {
    let mut bodies = TestBodies::new(&[[0.0, 0.0, 0.0], [0.0, 0.0, 20.0]]);
    let before = bodies.positions();
    let report = run_once(&mut seeded_pass(0), &mut bodies);

    assert_eq!(report.total_movement, 0.0);
    assert!(report.is_stable());
    assert_eq!(bodies.positions(), before);
    assert!(bodies.invalidated.is_empty());
}

#[test]
fn coincident_boxes_are_split_around_their_shared_center() {
    for seed in 0..20 {
        let mut bodies = TestBodies::new(&[[0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        let report = run_once(&mut seeded_pass(seed), &mut bodies);
        assert!(report.total_movement >= 10.0 - 1.0e-4);

        // The first resolution is recorded by the first two moves.
        let a = bodies.moves[0].to;
        let b = bodies.moves[1].to;
        let origin = Point::origin();
        assert_ne!(a, b);
        assert_relative_eq!((b - a).norm(), 10.0, epsilon = 1.0e-4);
        assert_relative_eq!((a - origin).norm(), (b - origin).norm(), epsilon = 1.0e-4);
        assert_eq!(a.z, 0.0);
        assert_eq!(b.z, 0.0);
    }
}

#[test]
fn separated_bodies_are_left_untouched() {
    // Boxes that only touch along an edge do not overlap.
    for spacing in [10.0, 12.5] {
        let mut bodies = grid(10, spacing);
        let before = bodies.positions();
        let report = run_once(&mut seeded_pass(3), &mut bodies);

        assert_eq!(report.total_movement, 0.0);
        assert_eq!(report.resolved_pairs, 0);
        assert_eq!(report.visited_bodies, 100);
        assert_eq!(bodies.positions(), before);
        assert!(bodies.moves.is_empty());
    }
}

#[test]
fn a_lone_body_never_resolves_against_itself() {
    let mut bodies = TestBodies::new(&[[3.0, 4.0, 5.0]]);
    let report = run_once(&mut seeded_pass(0), &mut bodies);
    assert_eq!(report.total_movement, 0.0);
    assert_eq!(report.visited_bodies, 1);
    assert!(bodies.moves.is_empty());
}

#[test]
fn resolved_pairs_move_symmetrically() {
    let mut rng = StdRng::seed_from_u64(11);
    let positions: Vec<_> = (0..60)
        .map(|_| {
            [
                rng.gen_range(-30.0..30.0),
                rng.gen_range(-30.0..30.0),
                rng.gen_range(-2.0..2.0),
            ]
        })
        .collect();
    let mut bodies = TestBodies::new(&positions);
    let report = run_once(&mut seeded_pass(5), &mut bodies);

    assert!(report.total_movement > 0.0);
    assert_eq!(bodies.moves.len(), report.resolved_pairs * 2);
    assert_eq!(bodies.invalidated.len(), report.resolved_pairs * 2);

    let mut expected_total = 0.0;

    for pair in bodies.moves.chunks(2) {
        let (first, second) = (pair[0], pair[1]);
        assert_ne!(first.id, second.id);

        let da = first.to - first.from;
        let db = second.to - second.from;
        assert_relative_eq!(da, -db, epsilon = 1.0e-4);
        assert_eq!(da.z, 0.0);
        expected_total += 2.0 * (da.x.abs() + da.y.abs());
    }

    assert_relative_eq!(report.total_movement, expected_total, epsilon = 1.0e-3);
}

#[test]
fn declared_sizes_take_precedence_over_the_default() {
    let mut bodies = TestBodies::new(&[[0.0, 0.0, 0.0], [15.0, 0.0, 0.0]]);
    assert_eq!(run_once(&mut seeded_pass(0), &mut bodies).total_movement, 0.0);

    bodies.bodies[0].size = DeclaredSize::planar(40.0, 10.0);
    let report = run_once(&mut seeded_pass(0), &mut bodies);
    // x overlap is 10, y overlap is 10.
    assert_relative_eq!(report.total_movement, 10.0, epsilon = 1.0e-4);
    assert!(bodies.bodies[1].position.x > 15.0);
}

#[test]
fn unknown_bodies_in_the_index_are_skipped() {
    let mut bodies = TestBodies::new(&[[0.0, 0.0, 0.0], [50.0, 0.0, 0.0]]);
    let size = Size::default();
    let mut boxes: Vec<_> = bodies
        .boxes(size)
        .iter()
        .enumerate()
        .map(|(i, b)| (i, b.aabb()))
        .collect();
    let ghost = LayoutBox::new(Point::new(1.0, 0.0, 0.0), size);
    boxes.push((7, ghost.aabb()));
    let index = Quadtree::from_boxes(boxes);

    let report = seeded_pass(0).run(&mut bodies, index.root());
    assert_eq!(report.total_movement, 0.0);
    assert!(bodies.moves.is_empty());
}

#[test]
fn empty_index_runs_nothing() {
    let mut bodies = TestBodies::new(&[[0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
    let report = seeded_pass(0).run::<_, QuadtreeNode<usize>>(&mut bodies, None);
    assert_eq!(report, Default::default());
    assert!(bodies.moves.is_empty());
}

#[test]
fn candidates_are_tested_at_their_live_position() {
    let mut bodies = TestBodies::new(&[[0.0, 0.0, 0.0], [40.0, 0.0, 0.0]]);
    let mut pass = seeded_pass(0);
    let index = bodies.index(pass.default_size());

    // Body 1 moves next to body 0 after the index was built.
    bodies.bodies[1].position = Point::new(5.0, 0.0, 0.0);
    let report = pass.run(&mut bodies, index.root());

    assert_eq!(report.resolved_pairs, 1);
    assert_relative_eq!(report.total_movement, (50.0 as Real).sqrt(), epsilon = 1.0e-4);
    assert_eq!(bodies.moves[0].id, 0);
    assert_eq!(bodies.moves[1].id, 1);
}

#[test]
fn volumetric_strategy_moves_along_z() {
    let options = RemovalOptions::default()
        .with_strategy(ResolutionStrategy::Volumetric)
        .with_seed(1);
    let mut pass = OverlapPass::new(&options).unwrap();
    let mut bodies = TestBodies::new(&[[0.0, 0.0, 0.0], [3.0, 4.0, 2.0]]);
    let report = run_once(&mut pass, &mut bodies);

    let shift = (7.0 * 6.0 * 8.0 as Real).cbrt();
    assert!(report.total_movement >= shift - 1.0e-4);
    assert!(bodies.bodies[0].position.z < 0.0);
    assert!(bodies.bodies[1].position.z > 2.0);

    let da = bodies.moves[0].to - bodies.moves[0].from;
    let db = bodies.moves[1].to - bodies.moves[1].from;
    assert_relative_eq!(da, -db, epsilon = 1.0e-4);
}
