//! Mouse, wheel, and keyboard input handling for the carousel.
//!
//! This module implements the interaction logic that feeds the scroll track:
//! drag-to-scroll, wheel scrolling, and arrow-key navigation.
//!
//! ## Architecture
//!
//! All handlers are synchronous methods on `Atelier`, invoked from gpui event
//! listeners. The drag gesture is tracked by the carousel's explicit state
//! machine; handlers guard on open overlays so a drag can never start under
//! the lightbox or enquiry modal.
//!
//! ## Modules
//!
//! - `mouse_down` - Drag session start
//! - `mouse_move` - Drag updates and pointer-leave detection
//! - `mouse_up` - Drag session end
//! - `wheel` - Wheel-to-track scrolling
//! - `keyboard` - Arrow-key navigation and Escape handling

mod keyboard;
mod mouse_down;
mod mouse_move;
mod mouse_up;
mod wheel;
