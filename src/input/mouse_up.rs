//! Mouse up event handling - drag session end.

use crate::app::Atelier;
use gpui::*;

impl Atelier {
    pub fn handle_mouse_up(
        &mut self,
        _event: &MouseUpEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.carousel.track.is_dragging() {
            // Idempotent: also runs harmlessly if pointer-leave already
            // closed the session.
            self.carousel.track.end_drag();
            cx.notify();
        }
    }
}
