//! Wheel scrolling - maps wheel deltas onto the carousel track.

use crate::app::Atelier;
use crate::constants::WHEEL_LINE_STEP;
use crate::types::AppView;
use gpui::*;

impl Atelier {
    pub fn handle_scroll(
        &mut self,
        event: &ScrollWheelEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        // Block carousel scroll when any overlay is open
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

        // Horizontal delta wins when present; trackpads report pixel deltas,
        // mouse wheels report lines.
        let delta = match event.delta {
            ScrollDelta::Pixels(delta) => {
                if f32::from(delta.x) != 0.0 {
                    f32::from(delta.x)
                } else {
                    f32::from(delta.y)
                }
            }
            ScrollDelta::Lines(delta) => {
                let lines = if delta.x != 0.0 { delta.x } else { delta.y };
                lines * WHEEL_LINE_STEP
            }
        };

        if delta != 0.0 {
            // Wheel-right (negative delta) advances the track
            self.carousel.track.scroll_immediate(-delta);
            cx.notify();
        }
    }
}
