//! Integration tests for collision, the reaction latch and color policy

use vlab::core::{CollisionDetector, ColorPolicy, ReactionStateMachine, LITMUS_BLUE, LITMUS_RED};
use vlab::types::{Point, ReactionState, ReactionVariant, TargetRegion};

#[test]
fn test_latch_is_monotone() {
    let mut latch = ReactionStateMachine::new();
    let hits = [false, false, true, false, true, false, false];
    let mut seen_triggered = false;

    for (i, hit) in hits.iter().enumerate() {
        let state = latch.maybe_trigger_at(*hit, Some(i as u64));
        if seen_triggered {
            assert_eq!(state, ReactionState::Triggered, "frame {i}");
        }
        seen_triggered |= state.is_triggered();
    }

    assert!(seen_triggered);
    assert_eq!(latch.triggered_at(), Some(2));
}

#[test]
fn test_misses_never_trigger() {
    let mut latch = ReactionStateMachine::new();
    for _ in 0..50 {
        assert_eq!(latch.maybe_trigger(false), ReactionState::Untriggered);
    }
}

#[test]
fn test_collision_edges_inclusive() {
    let detector = CollisionDetector::new();
    let paper = TargetRegion::default();

    for corner in [
        Point::new(20, 350),
        Point::new(100, 350),
        Point::new(20, 450),
        Point::new(100, 450),
    ] {
        assert!(detector.test(corner, &paper), "{corner:?}");
    }
    assert!(detector.test(Point::new(60, 400), &paper));
}

#[test]
fn test_collision_one_pixel_outside() {
    let detector = CollisionDetector::new();
    let paper = TargetRegion::default();

    for outside in [
        Point::new(19, 400),
        Point::new(101, 400),
        Point::new(60, 349),
        Point::new(60, 451),
    ] {
        assert!(!detector.test(outside, &paper), "{outside:?}");
    }
}

#[test]
fn test_colors_consistent_across_variants() {
    let policy = ColorPolicy::new();
    for variant in ReactionVariant::ALL {
        let colors = policy.colors_for(variant);
        assert_eq!(colors.triggered_paper, colors.liquid, "{variant}");
        assert_ne!(colors.initial_paper, colors.liquid, "{variant}");
        assert_eq!(colors.paper_for(ReactionState::Untriggered), colors.initial_paper);
        assert_eq!(colors.paper_for(ReactionState::Triggered), colors.triggered_paper);
    }
}

#[test]
fn test_litmus_pairs() {
    let policy = ColorPolicy::new();

    let base = policy.colors_for(ReactionVariant::Base);
    assert_eq!((base.liquid, base.initial_paper), (LITMUS_BLUE, LITMUS_RED));

    let acid = policy.colors_for(ReactionVariant::Acid);
    assert_eq!((acid.liquid, acid.initial_paper), (LITMUS_RED, LITMUS_BLUE));
}

#[test]
fn test_variant_names_parse() {
    assert_eq!("base".parse::<ReactionVariant>().unwrap(), ReactionVariant::Base);
    assert_eq!("Red_Litmus".parse::<ReactionVariant>().unwrap(), ReactionVariant::Base);
    assert_eq!("blue-litmus".parse::<ReactionVariant>().unwrap(), ReactionVariant::Acid);
    assert!("neutral".parse::<ReactionVariant>().is_err());
}
