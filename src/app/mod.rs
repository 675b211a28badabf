//! Application module - the main Atelier application state and logic.
//!
//! This module is organized into several submodules:
//! - `state` - The Atelier struct definition and sub-structs
//! - `lifecycle` - Initialization and the per-frame tick
//! - `handlers` - View navigation, filtering, lightbox, and enquiry methods

mod handlers;
mod lifecycle;
mod state;

pub use state::{
    Atelier, CarouselState, EnquiryState, GalleryState, LightboxState, NavigationState,
    SettingsState, SystemState, UiState,
};
