//! View navigation, filtering, lightbox, and enquiry methods.

use super::state::Atelier;
use crate::constants::LIGHTBOX_HINT_MS;
use crate::enquiry::{self, EnquiryForm};
use crate::notifications::Toast;
use crate::types::{AppView, Artwork, CategoryFilter};
use gpui::*;
use gpui_component::input::InputState;
use std::time::{Duration, Instant};

impl Atelier {
    // ==================== Navigation ====================

    pub fn show_home(&mut self, cx: &mut Context<Self>) {
        self.navigation.view = AppView::Home;
        cx.notify();
    }

    pub fn show_gallery(&mut self, cx: &mut Context<Self>) {
        self.navigation.view = AppView::Gallery;
        cx.notify();
    }

    // ==================== Filtering ====================

    /// Artworks passing the active filter, in catalog order.
    pub fn visible_artworks(&self) -> Vec<Artwork> {
        self.gallery.catalog.filter(&self.gallery.filter)
    }

    /// Featured artworks for the home carousel.
    pub fn featured_artworks(&self) -> Vec<Artwork> {
        self.gallery.catalog.featured()
    }

    /// Select a category. The lightbox closes because its index points into
    /// the filtered set that is about to change.
    pub fn select_filter(&mut self, filter: CategoryFilter, cx: &mut Context<Self>) {
        if self.gallery.filter == filter {
            return;
        }
        self.gallery.filter = filter;
        self.lightbox.current = None;
        self.lightbox.hint_until = None;
        cx.notify();
    }

    // ==================== Lightbox ====================

    pub fn open_lightbox(&mut self, index: usize, window: &mut Window, cx: &mut Context<Self>) {
        let count = self.visible_artworks().len();
        if index >= count {
            return;
        }
        self.lightbox.current = Some(index);
        self.lightbox.hint_until = Some(Instant::now() + Duration::from_millis(LIGHTBOX_HINT_MS));
        // Route key events (Escape, arrows) through the focus path
        window.focus(&self.system.carousel_focus);
        self.request_frame(window, cx);
        cx.notify();
    }

    pub fn close_lightbox(&mut self, cx: &mut Context<Self>) {
        self.lightbox.current = None;
        self.lightbox.hint_until = None;
        cx.notify();
    }

    /// Step to the next artwork, wrapping at the end of the filtered set.
    pub fn lightbox_next(&mut self, cx: &mut Context<Self>) {
        let count = self.visible_artworks().len();
        self.lightbox.step_next(count);
        cx.notify();
    }

    /// Step to the previous artwork, wrapping at the start.
    pub fn lightbox_prev(&mut self, cx: &mut Context<Self>) {
        let count = self.visible_artworks().len();
        self.lightbox.step_prev(count);
        cx.notify();
    }

    /// Open a blank mail to the studio address (gallery CTA).
    pub fn contact_artist(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let url = format!("mailto:{}", crate::constants::ENQUIRY_MAILTO);
        if let Err(e) = open::that(&url) {
            tracing::warn!(error = %e, "Could not open mail client");
            self.ui
                .toast_manager
                .push(Toast::error("Could not open your mail client"));
            self.request_frame(window, cx);
        }
    }

    // ==================== Enquiry Modal ====================

    pub fn open_enquiry(&mut self, artwork_id: u64, window: &mut Window, cx: &mut Context<Self>) {
        if self.gallery.catalog.get(artwork_id).is_none() {
            tracing::warn!(artwork_id, "Enquiry requested for unknown artwork");
            return;
        }

        let name_input = cx.new(|cx| InputState::new(window, cx).placeholder("Your name"));
        let email_input = cx.new(|cx| InputState::new(window, cx).placeholder("your@email.com"));
        let phone_input = cx.new(|cx| InputState::new(window, cx).placeholder("Phone (optional)"));
        let message_input = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Tell us about your interest in this artwork...")
        });

        name_input.update(cx, |state, cx| {
            state.focus(window, cx);
        });

        self.enquiry.artwork_id = Some(artwork_id);
        self.enquiry.form = EnquiryForm::default();
        self.enquiry.name_input = Some(name_input);
        self.enquiry.email_input = Some(email_input);
        self.enquiry.phone_input = Some(phone_input);
        self.enquiry.message_input = Some(message_input);
        self.enquiry.errors.clear();
        self.enquiry.backdrop_clicked = false;
        cx.notify();
    }

    pub fn close_enquiry(&mut self, cx: &mut Context<Self>) {
        self.enquiry.artwork_id = None;
        self.enquiry.name_input = None;
        self.enquiry.email_input = None;
        self.enquiry.phone_input = None;
        self.enquiry.message_input = None;
        self.enquiry.errors.clear();
        cx.notify();
    }

    pub fn toggle_newsletter(&mut self, cx: &mut Context<Self>) {
        self.enquiry.form.newsletter = !self.enquiry.form.newsletter;
        cx.notify();
    }

    pub fn toggle_privacy_consent(&mut self, cx: &mut Context<Self>) {
        self.enquiry.form.privacy_consent = !self.enquiry.form.privacy_consent;
        cx.notify();
    }

    /// Validate the form and dispatch it as a prefilled mailto. Validation
    /// failures stay in the modal, annotated per field.
    pub fn submit_enquiry(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(artwork_id) = self.enquiry.artwork_id else {
            return;
        };
        let Some(artwork) = self.gallery.catalog.get(artwork_id).cloned() else {
            self.close_enquiry(cx);
            return;
        };

        let read = |input: &Option<Entity<InputState>>, cx: &Context<Self>| {
            input
                .as_ref()
                .map(|i| i.read(cx).text().to_string())
                .unwrap_or_default()
        };
        self.enquiry.form.name = read(&self.enquiry.name_input, cx);
        self.enquiry.form.email = read(&self.enquiry.email_input, cx);
        self.enquiry.form.phone = read(&self.enquiry.phone_input, cx);
        self.enquiry.form.message = read(&self.enquiry.message_input, cx);

        match enquiry::dispatch(&artwork, &self.enquiry.form) {
            Ok(()) => {
                self.ui.toast_manager.push(Toast::success(format!(
                    "Enquiry for \"{}\" handed to your mail client",
                    artwork.title
                )));
                self.close_enquiry(cx);
                self.request_frame(window, cx);
            }
            Err(errors) => {
                self.enquiry.errors = errors;
                cx.notify();
            }
        }
    }
}
