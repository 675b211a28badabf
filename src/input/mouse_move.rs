//! Mouse move event handling - drag updates and pointer-leave detection.
//!
//! Mouse move fires very frequently during a drag (60+ times per second).
//! The handler exits early when no session is open, and each update maps the
//! pointer position against the session origin, so event arrival order is
//! the only ordering that matters.

use crate::app::Atelier;
use crate::profile_scope;
use gpui::*;

impl Atelier {
    pub fn handle_mouse_move(
        &mut self,
        event: &MouseMoveEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !self.carousel.track.is_dragging() {
            return;
        }

        profile_scope!("carousel_drag");

        // A pointer that leaves the tracked region mid-gesture ends the drag
        // exactly like a release would. Without this, a drag that exits over
        // the header keeps the session stuck active.
        if let Some(region) = self.carousel.region {
            if !region.contains(&event.position) {
                self.carousel.track.end_drag();
                cx.notify();
                return;
            }
        }

        self.carousel.track.update_drag(f32::from(event.position.x));
        cx.notify();
    }
}
