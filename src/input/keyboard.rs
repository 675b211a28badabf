//! Keyboard navigation - arrow keys for the carousel, Escape for overlays.
//!
//! The arrow handlers are attached to the carousel section element behind a
//! focus handle, so they only fire while the carousel region holds focus.

use crate::app::Atelier;
use crate::carousel::ScrollDirection;
use gpui::*;

impl Atelier {
    /// Arrow-key handler for the focused carousel region.
    pub fn handle_carousel_key_down(
        &mut self,
        event: &KeyDownEvent,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        // Overlays own the arrow keys while open
        if self.lightbox.is_open() || self.enquiry.is_open() {
            return;
        }

        let step = self.settings.data.tuning.scroll_step;
        match event.keystroke.key.as_str() {
            "left" => {
                self.carousel.track.scroll_by(ScrollDirection::Left, step);
                self.request_frame(window, cx);
                cx.notify();
            }
            "right" => {
                self.carousel.track.scroll_by(ScrollDirection::Right, step);
                self.request_frame(window, cx);
                cx.notify();
            }
            _ => {}
        }
    }

    /// Window-level key handler: Escape dismisses overlays, arrows step the
    /// lightbox while it is open.
    pub fn handle_key_down(
        &mut self,
        event: &KeyDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match event.keystroke.key.as_str() {
            "escape" => {
                if self.enquiry.is_open() {
                    self.close_enquiry(cx);
                } else if self.lightbox.is_open() {
                    self.close_lightbox(cx);
                }
            }
            "left" if self.lightbox.is_open() && !self.enquiry.is_open() => {
                self.lightbox_prev(cx);
            }
            "right" if self.lightbox.is_open() && !self.enquiry.is_open() => {
                self.lightbox_next(cx);
            }
            _ => {}
        }
    }

    /// Nav-button handler shared by the on-screen arrows.
    pub fn scroll_carousel(
        &mut self,
        direction: ScrollDirection,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let step = self.settings.data.tuning.scroll_step;
        self.carousel.track.scroll_by(direction, step);
        self.request_frame(window, cx);
        cx.notify();
    }
}
