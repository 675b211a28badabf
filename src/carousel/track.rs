//! The scroll track - a one-dimensional scrollable region driven by drag
//! gestures, wheel input, and eased programmatic navigation.
//!
//! The track owns the current scroll `offset` and keeps it clamped to the
//! valid range `[0, max_offset]` at all times. Drag manipulation and eased
//! animation are mutually exclusive modes: beginning a drag cancels any
//! in-flight animation (the two must not fight over the offset), and nav
//! scrolls are ignored while a drag session is open.

use crate::carousel::animation::ScrollAnimation;
use crate::carousel::state::DragState;
use crate::constants::SCROLL_ANIMATION_DURATION;
use std::time::Duration;

/// Direction for programmatic navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// Horizontal scroll track for the featured carousel.
#[derive(Debug)]
pub struct ScrollTrack {
    /// Total width of the scrollable content, in track units
    content_width: f32,
    /// Width of the visible viewport, in track units
    viewport_width: f32,
    /// Current scroll offset, always within `[0, max_offset]`
    offset: f32,
    /// Drag gesture state machine
    drag: DragState,
    /// In-flight eased scroll, if any
    animation: Option<ScrollAnimation>,
    /// Drag amplification factor (track units per pointer pixel)
    sensitivity: f32,
}

impl ScrollTrack {
    pub fn new(sensitivity: f32) -> Self {
        Self {
            content_width: 0.0,
            viewport_width: 0.0,
            offset: 0.0,
            drag: DragState::default(),
            animation: None,
            sensitivity,
        }
    }

    /// Update the measured content and viewport widths.
    ///
    /// Called on layout; re-clamps the offset since the valid range may have
    /// shrunk (e.g. window resize or filter change).
    pub fn set_extents(&mut self, content_width: f32, viewport_width: f32) {
        self.content_width = content_width;
        self.viewport_width = viewport_width;
        self.offset = self.clamp_offset(self.offset);
    }

    /// The scrollable range: zero when the content fits the viewport.
    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Current scroll offset in track units.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Offset normalized over the scrollable range, clamped to `[0, 1]`.
    /// Zero when the content does not overflow the viewport.
    pub fn progress(&self) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 {
            return 0.0;
        }
        (self.offset / max).clamp(0.0, 1.0)
    }

    /// Returns true if a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns true if an eased scroll is in flight.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Target of the in-flight animation, if any. Used by tests and by the
    /// frame tick to decide whether another frame is needed.
    pub fn animation_target(&self) -> Option<f32> {
        self.animation.as_ref().map(|a| a.target())
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Open a drag session at the given pointer x.
    ///
    /// Freezes any in-flight eased scroll at its current sampled position so
    /// drag deltas apply from where the user actually grabbed the track.
    /// No-op if the content fits the viewport or a session is already open.
    pub fn begin_drag(&mut self, pointer_x: f32) {
        if self.max_offset() <= 0.0 || self.drag.is_dragging() {
            return;
        }
        if let Some(anim) = self.animation.take() {
            self.offset = self.clamp_offset(anim.sample());
        }
        self.drag.start(pointer_x, self.offset);
    }

    /// Apply pointer movement to the open drag session.
    ///
    /// Pointer travel is amplified by `sensitivity` and applied against the
    /// session origin, so the mapping is stateless across moves: each event
    /// recomputes from the origin rather than accumulating deltas. No-op
    /// without an active session.
    pub fn update_drag(&mut self, pointer_x: f32) {
        let Some((origin_x, origin_offset)) = self.drag.origin() else {
            return;
        };
        if self.max_offset() <= 0.0 {
            return;
        }
        let delta = (pointer_x - origin_x) * self.sensitivity;
        self.offset = self.clamp_offset(origin_offset - delta);
    }

    /// Close the drag session, restoring eased mode for nav scrolls.
    /// Idempotent: safe to call on pointer-up and pointer-leave alike.
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Start an eased scroll by `amount` track units in `direction`.
    ///
    /// Retargets from the currently sampled position when an animation is
    /// already in flight, so rapid button presses chain smoothly. Ignored
    /// while a drag session is open (drag owns the offset) and when the
    /// content fits the viewport.
    pub fn scroll_by(&mut self, direction: ScrollDirection, amount: f32) {
        if self.max_offset() <= 0.0 || self.drag.is_dragging() {
            return;
        }
        let from = self.current_position();
        let target = match direction {
            ScrollDirection::Left => self.clamp_offset(from - amount),
            ScrollDirection::Right => self.clamp_offset(from + amount),
        };
        self.offset = from;
        self.animation = Some(ScrollAnimation::new(
            from,
            target,
            Duration::from_secs_f64(SCROLL_ANIMATION_DURATION),
        ));
    }

    /// Apply an immediate wheel delta. Cancels any eased scroll; ignored
    /// during a drag (the drag session owns the offset).
    pub fn scroll_immediate(&mut self, delta: f32) {
        if self.max_offset() <= 0.0 || self.drag.is_dragging() {
            return;
        }
        let from = self.current_position();
        self.animation = None;
        self.offset = self.clamp_offset(from + delta);
    }

    /// Advance the in-flight animation, if any. Returns true while another
    /// frame is needed.
    pub fn tick(&mut self) -> bool {
        let Some(anim) = &self.animation else {
            return false;
        };
        self.offset = self.clamp_offset(anim.sample());
        if anim.is_finished() {
            self.animation = None;
            return false;
        }
        true
    }

    /// Where the track currently is, accounting for an in-flight animation.
    fn current_position(&self) -> f32 {
        match &self.animation {
            Some(anim) => self.clamp_offset(anim.sample()),
            None => self.offset,
        }
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }
}
