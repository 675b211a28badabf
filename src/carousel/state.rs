//! Drag state machine - explicit state for the carousel's pointer gesture.
//!
//! A single enum replaces scattered boolean flags, making impossible states
//! unrepresentable: a drag session exists if and only if the state is
//! `Dragging`, and the session's origin data lives inside that variant.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging      (pointer down over the track)
//! Dragging -> Idle      (pointer up, or pointer leaving the track region)
//! ```
//!
//! `end()` is idempotent: ending from `Idle` is a no-op, never an error. The
//! pointer-leave path calls it defensively so an abandoned gesture can never
//! leave the track stuck in `Dragging`.

/// State of the carousel drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No active drag session
    Idle,

    /// An active drag session
    Dragging {
        /// Pointer x position at the moment the drag started
        origin_x: f32,
        /// Track offset at the moment the drag started
        origin_offset: f32,
    },
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragState {
    /// Returns true if a drag session is active
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Open a drag session. No-op if one is already active.
    pub fn start(&mut self, origin_x: f32, origin_offset: f32) {
        if self.is_idle() {
            *self = Self::Dragging {
                origin_x,
                origin_offset,
            };
        }
    }

    /// Close the drag session. Idempotent.
    pub fn end(&mut self) {
        *self = Self::Idle;
    }

    /// Get the session origin `(pointer_x, offset)`, if dragging
    pub fn origin(&self) -> Option<(f32, f32)> {
        match self {
            Self::Dragging {
                origin_x,
                origin_offset,
            } => Some((*origin_x, *origin_offset)),
            Self::Idle => None,
        }
    }
}
