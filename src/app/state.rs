//! Application state - the Atelier struct definition and sub-structs.

use crate::carousel::ScrollTrack;
use crate::catalog::Catalog;
use crate::enquiry::{EnquiryForm, ValidationError};
use crate::notifications::ToastManager;
use crate::perf::PerfMonitor;
use crate::settings::Settings;
use crate::types::{AppView, CategoryFilter};
use gpui::{Bounds, Entity, FocusHandle, Pixels};
use gpui_component::input::InputState;
use std::time::Instant;

/// Navigation state - which top-level view is showing
pub struct NavigationState {
    /// Current view (Home or Gallery)
    pub view: AppView,
}

/// Carousel interaction state - the scroll track and its measured region
pub struct CarouselState {
    /// The scroll track driving offset and progress
    pub track: ScrollTrack,
    /// Screen bounds of the carousel region, captured at layout. Used to
    /// detect the pointer leaving mid-drag.
    pub region: Option<Bounds<Pixels>>,
}

/// Gallery state - catalog data and the active category filter
pub struct GalleryState {
    /// The artwork catalog
    pub catalog: Catalog,
    /// Currently selected category filter
    pub filter: CategoryFilter,
}

/// Lightbox overlay state
pub struct LightboxState {
    /// Index of the open artwork within the filtered set, if open
    pub current: Option<usize>,
    /// When the usage hint should disappear
    pub hint_until: Option<Instant>,
    /// Backdrop clicked flag for click-to-close
    pub backdrop_clicked: bool,
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn hint_visible(&self) -> bool {
        self.hint_until.is_some_and(|until| Instant::now() < until)
    }

    /// Step to the next artwork, wrapping at the end of the filtered set.
    /// No-op when closed or when there is nothing to step to.
    pub fn step_next(&mut self, count: usize) {
        if let Some(current) = self.current {
            if count > 1 {
                self.current = Some((current + 1) % count);
            }
        }
    }

    /// Step to the previous artwork, wrapping at the start.
    pub fn step_prev(&mut self, count: usize) {
        if let Some(current) = self.current {
            if count > 1 {
                self.current = Some((current + count - 1) % count);
            }
        }
    }
}

/// Enquiry modal state - form inputs and validation results
pub struct EnquiryState {
    /// Artwork id the modal is bound to, if open
    pub artwork_id: Option<u64>,
    /// Checkbox state mirrored outside the text inputs
    pub form: EnquiryForm,
    /// Input field for the sender's name
    pub name_input: Option<Entity<InputState>>,
    /// Input field for the sender's email
    pub email_input: Option<Entity<InputState>>,
    /// Input field for the sender's phone (optional)
    pub phone_input: Option<Entity<InputState>>,
    /// Input field for the message (optional)
    pub message_input: Option<Entity<InputState>>,
    /// Failed validation rules from the last submit attempt
    pub errors: Vec<ValidationError>,
    /// Backdrop clicked flag for click-to-close
    pub backdrop_clicked: bool,
}

impl EnquiryState {
    pub fn is_open(&self) -> bool {
        self.artwork_id.is_some()
    }
}

/// Settings state
pub struct SettingsState {
    /// Settings data
    pub data: Settings,
}

/// UI state - toasts
pub struct UiState {
    /// Toast notification manager
    pub toast_manager: ToastManager,
}

/// Performance and system state
pub struct SystemState {
    /// Focus handle for the carousel region (keyboard navigation)
    pub carousel_focus: FocusHandle,
    /// Performance monitor
    pub perf_monitor: PerfMonitor,
    /// Whether a frame-tick callback is already queued
    pub frame_queued: bool,
}

/// Main application state - composed of focused sub-structs
pub struct Atelier {
    /// Navigation state
    pub navigation: NavigationState,
    /// Carousel interaction state
    pub carousel: CarouselState,
    /// Gallery state
    pub gallery: GalleryState,
    /// Lightbox overlay state
    pub lightbox: LightboxState,
    /// Enquiry modal state
    pub enquiry: EnquiryState,
    /// Settings state
    pub settings: SettingsState,
    /// UI state
    pub ui: UiState,
    /// System and performance state
    pub system: SystemState,
}
