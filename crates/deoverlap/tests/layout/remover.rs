use crate::common::{TestBodies, TestLayout};
use deoverlap::layout::{
    remove_overlaps, ConfigError, LayoutEvent, OverlapPass, OverlapRemover, RemovalOptions,
    RemoverState,
};
use deoverlap::shape::Size;

fn overlapping_layout() -> TestLayout {
    TestLayout::new(TestBodies::new(&[[0.0, 0.0, 0.0], [5.0, 0.0, 0.0]]))
}

fn active_options() -> RemovalOptions {
    RemovalOptions::default().with_active(true).with_seed(9)
}

#[test]
fn attach_subscribes_to_every_event() {
    let mut layout = overlapping_layout();
    let before = layout.bodies.positions();
    let remover = OverlapRemover::attach(&mut layout, &active_options()).unwrap();

    assert_eq!(remover.state(), RemoverState::Active);
    assert_eq!(layout.subscriptions, LayoutEvent::ALL.to_vec());
    // Nothing runs until the layout steps.
    assert_eq!(layout.bodies.positions(), before);
}

#[test]
fn step_and_stable_run_one_pass_each() {
    let mut layout = overlapping_layout();
    let mut remover = OverlapRemover::attach(&mut layout, &active_options()).unwrap();

    let report = remover.handle_event(&mut layout, LayoutEvent::Step).unwrap();
    assert!(report.total_movement > 0.0);
    assert_eq!(report.resolved_pairs, 1);
    assert_eq!(layout.bodies.invalidated, vec![0, 1]);

    // The first step already separated the pair.
    let report = remover.handle_event(&mut layout, LayoutEvent::Stable).unwrap();
    assert!(report.is_stable());
    assert_eq!(report.visited_bodies, 2);
}

#[test]
fn disposed_notification_unsubscribes() {
    let mut layout = overlapping_layout();
    let mut remover = OverlapRemover::attach(&mut layout, &active_options()).unwrap();

    assert!(remover
        .handle_event(&mut layout, LayoutEvent::Disposed)
        .is_none());
    assert_eq!(remover.state(), RemoverState::Disposed);
    assert!(layout.subscriptions.is_empty());
    assert_eq!(layout.unsubscribe_calls, 3);

    // Further notifications and disposals are ignored.
    let before = layout.bodies.positions();
    assert!(remover.handle_event(&mut layout, LayoutEvent::Step).is_none());
    assert!(remover.handle_event(&mut layout, LayoutEvent::Stable).is_none());
    remover.dispose(&mut layout);
    assert_eq!(layout.unsubscribe_calls, 3);
    assert_eq!(layout.bodies.positions(), before);
}

#[test]
fn dispose_is_idempotent() {
    let mut layout = overlapping_layout();
    let mut remover = OverlapRemover::attach(&mut layout, &active_options()).unwrap();

    remover.dispose(&mut layout);
    remover.dispose(&mut layout);

    assert!(!remover.is_active());
    assert_eq!(layout.unsubscribe_calls, 3);
    assert!(layout.subscriptions.is_empty());
}

#[test]
fn invalid_options_subscribe_nothing() {
    let mut layout = overlapping_layout();
    let options = active_options().with_default_size(Size::new(10.0, -1.0, 10.0));

    let err = OverlapRemover::attach(&mut layout, &options).err();
    assert_eq!(
        err,
        Some(ConfigError::InvalidDefaultSize {
            dimension: "height",
            value: -1.0
        })
    );
    assert!(layout.subscriptions.is_empty());

    let err = remove_overlaps(&mut layout, &options.with_active(false)).err();
    assert!(err.is_some());
    assert!(layout.bodies.moves.is_empty());
}

#[test]
fn remove_overlaps_in_active_mode_waits_for_the_layout() {
    let mut layout = overlapping_layout();
    let mut outcome = remove_overlaps(&mut layout, &active_options()).unwrap();

    assert!(outcome.convergence().is_none());
    assert_eq!(layout.subscriptions.len(), 3);
    assert!(layout.bodies.moves.is_empty());

    let remover = outcome.remover().unwrap();
    assert!(remover
        .handle_event(&mut layout, LayoutEvent::Step)
        .is_some());

    outcome.dispose(&mut layout);
    outcome.dispose(&mut layout);
    assert_eq!(layout.unsubscribe_calls, 3);
}

#[test]
fn remove_overlaps_in_blocking_mode_runs_right_away() {
    let mut layout = overlapping_layout();
    let options = RemovalOptions::default().with_seed(9);
    let mut outcome = remove_overlaps(&mut layout, &options).unwrap();

    let convergence = *outcome.convergence().unwrap();
    assert!(convergence.converged);
    assert_eq!(convergence.passes, 2);
    assert!(outcome.remover().is_none());
    assert!(layout.subscriptions.is_empty());

    // Nothing to revoke in blocking mode.
    outcome.dispose(&mut layout);
    assert_eq!(layout.unsubscribe_calls, 0);
}

#[test]
fn removers_and_outcomes_can_be_debug_printed() {
    let mut layout = overlapping_layout();
    let mut outcome = remove_overlaps(&mut layout, &active_options()).unwrap();
    assert!(format!("{outcome:?}").starts_with("Subscribed"));

    let remover = outcome.remover().unwrap();
    assert!(format!("{remover:?}").contains("Active"));
    remover.dispose(&mut layout);
    assert!(format!("{remover:?}").contains("Disposed"));

    let pass = OverlapPass::new(&active_options()).unwrap();
    assert!(format!("{pass:?}").contains("Planar"));
}
