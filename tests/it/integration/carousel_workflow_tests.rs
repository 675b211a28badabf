//! Carousel Workflow Integration Tests
//!
//! Drives the scroll track through realistic gesture sequences and checks
//! the derived effects against the track's progress at every step.

use crate::helpers::track;
use atelier::carousel::{caption_opacity, stagger_offset, ScrollDirection};
use atelier::constants::{CAPTION_FADE_END, SCROLL_STEP, STAGGER_AMOUNT, STAGGER_CONVERGE_END};

#[test]
fn test_offset_stays_clamped_through_arbitrary_drag_sequence() {
    let mut t = track(2000.0, 1000.0);
    let moves = [
        50.0, -300.0, 1200.0, -5000.0, 0.0, 7.5, -7.5, 9999.0, -9999.0, 123.4,
    ];

    t.begin_drag(0.0);
    for pointer_x in moves {
        t.update_drag(pointer_x);
        assert!(
            t.offset() >= 0.0 && t.offset() <= t.max_offset(),
            "offset {} escaped [0, {}]",
            t.offset(),
            t.max_offset()
        );
        assert!((0.0..=1.0).contains(&t.progress()));
    }
    t.end_drag();
}

#[test]
fn test_pointer_leave_matches_explicit_release() {
    // Two identical gestures; one released explicitly, one abandoned. The
    // abandoned one is ended defensively (the pointer-leave path) and must
    // land in exactly the same state.
    let mut released = track(2000.0, 1000.0);
    released.begin_drag(100.0);
    released.update_drag(-50.0);
    released.end_drag();

    let mut abandoned = track(2000.0, 1000.0);
    abandoned.begin_drag(100.0);
    abandoned.update_drag(-50.0);
    abandoned.end_drag(); // pointer-leave invokes the same operation
    abandoned.end_drag(); // and a late mouse-up after it is harmless

    assert_eq!(released.offset(), abandoned.offset());
    assert!(!released.is_dragging());
    assert!(!abandoned.is_dragging());
}

#[test]
fn test_drag_never_sticks_active() {
    let mut t = track(2000.0, 1000.0);
    t.begin_drag(10.0);
    assert!(t.is_dragging());
    t.end_drag();
    assert!(!t.is_dragging());

    // Moves after the session closed are ignored
    let offset = t.offset();
    t.update_drag(500.0);
    assert_eq!(t.offset(), offset);
}

#[test]
fn test_nav_then_drag_then_nav() {
    let mut t = track(3000.0, 1000.0);

    // Nav scroll starts an eased animation toward 500
    t.scroll_by(ScrollDirection::Right, SCROLL_STEP);
    assert!(t.is_animating());
    assert_eq!(t.animation_target(), Some(500.0));

    // Grabbing the track freezes the animation wherever it is
    t.begin_drag(0.0);
    assert!(!t.is_animating());
    let frozen = t.offset();
    assert!((0.0..=500.0).contains(&frozen));

    // Dragging applies from the frozen position
    t.update_drag(-100.0);
    assert_eq!(t.offset(), (frozen + 200.0).min(t.max_offset()));
    t.end_drag();

    // Nav works again after release
    t.scroll_by(ScrollDirection::Right, SCROLL_STEP);
    assert!(t.is_animating());
}

#[test]
fn test_chained_nav_retargets_from_current_position() {
    let mut t = track(3000.0, 1000.0);
    t.scroll_by(ScrollDirection::Right, 500.0);
    t.scroll_by(ScrollDirection::Right, 500.0);

    // The second press targets at most 1000, measured from wherever the
    // first animation had gotten to - never past the range.
    let target = t.animation_target().unwrap();
    assert!(target <= 1000.0);
    assert!(target >= 500.0 - f32::EPSILON);
}

#[test]
fn test_effects_follow_progress_during_drag() {
    let mut t = track(2000.0, 1000.0);
    t.begin_drag(0.0);

    // Mid-drag, the derived effects must track the live progress
    t.update_drag(-150.0); // offset 300 => progress 0.3
    assert_eq!(t.progress(), 0.3);
    assert_eq!(caption_opacity(t.progress(), CAPTION_FADE_END), 0.0);
    let remaining = stagger_offset(0, t.progress(), STAGGER_AMOUNT, STAGGER_CONVERGE_END);
    assert!(remaining > -STAGGER_AMOUNT && remaining < 0.0);

    t.update_drag(-175.0); // offset 350 => progress 0.35, fully converged
    assert_eq!(
        stagger_offset(0, t.progress(), STAGGER_AMOUNT, STAGGER_CONVERGE_END),
        0.0
    );
    t.end_drag();
}

#[test]
fn test_fitting_content_is_inert() {
    let mut t = track(900.0, 1200.0);

    t.begin_drag(0.0);
    t.update_drag(-400.0);
    t.end_drag();
    t.scroll_by(ScrollDirection::Right, SCROLL_STEP);
    t.scroll_immediate(300.0);

    assert_eq!(t.offset(), 0.0);
    assert_eq!(t.progress(), 0.0);
    assert!(!t.is_animating());
}

#[test]
fn test_resize_mid_drag_keeps_invariant() {
    let mut t = track(2000.0, 1000.0);
    t.begin_drag(0.0);
    t.update_drag(-500.0); // offset 1000, at the end of the range

    // Window grows: the scrollable range shrinks under the gesture
    t.set_extents(2000.0, 1600.0);
    assert!(t.offset() <= t.max_offset());

    t.update_drag(-600.0);
    assert!(t.offset() <= t.max_offset());
    t.end_drag();
}
