//! Mouse down event handling - drag session start.

use crate::app::Atelier;
use crate::profile_scope;
use crate::types::AppView;
use gpui::*;

impl Atelier {
    pub fn handle_mouse_down(
        &mut self,
        event: &MouseDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        profile_scope!("handle_mouse_down");

        // Overlays own the pointer while open
        if self.lightbox.is_open() || self.enquiry.is_open() {
            return;
        }

        if self.navigation.view != AppView::Home {
            return;
        }

        let Some(region) = self.carousel.region else {
            return;
        };
        if !region.contains(&event.position) {
            return;
        }

        // Clicking the region also gives it focus so arrow keys work
        window.focus(&self.system.carousel_focus);

        self.carousel.track.begin_drag(f32::from(event.position.x));
        if self.carousel.track.is_dragging() {
            cx.notify();
        }
    }
}
