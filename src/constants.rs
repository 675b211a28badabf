//! Application-wide constants.
//!
//! Centralizes magic numbers and layout values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Layout Constants
// ============================================================================

/// Height of the header bar in pixels
pub const HEADER_HEIGHT: f32 = 56.0;

/// Height of the footer bar in pixels
pub const FOOTER_HEIGHT: f32 = 32.0;

/// Horizontal gap between carousel cards in pixels
pub const CARD_GAP: f32 = 48.0;

/// Default carousel card width
pub const CARD_WIDTH: f32 = 440.0;

/// Default carousel card height
pub const CARD_HEIGHT: f32 = 580.0;

/// Width reserved for the caption block at the head of the carousel track
pub const CAPTION_BLOCK_WIDTH: f32 = 420.0;

/// Width of the trailing "View All Works" card
pub const VIEW_ALL_CARD_WIDTH: f32 = 350.0;

/// Height of the trailing "View All Works" card
pub const VIEW_ALL_CARD_HEIGHT: f32 = 450.0;

/// Trailing padding after the last card, in track units
pub const TRACK_END_PADDING: f32 = 80.0;

/// Height of the hero block above the carousel on the home view
pub const HERO_HEIGHT: f32 = 180.0;

/// Minimum width of a gallery grid column
pub const GRID_MIN_COLUMN_WIDTH: f32 = 300.0;

/// Gap between gallery grid cells
pub const GRID_GAP: f32 = 32.0;

// ============================================================================
// Carousel Tuning Defaults
// ============================================================================
// Product/UX tuning values carried over from the shipped site. They are the
// defaults for the settings `tuning` block, not hard-wired behavior.

/// Drag amplification: track distance per pixel of pointer travel
pub const DRAG_SENSITIVITY: f32 = 2.0;

/// Distance scrolled by one nav-button press or arrow key, in track units
pub const SCROLL_STEP: f32 = 500.0;

/// Progress at which the intro caption is fully faded out
pub const CAPTION_FADE_END: f32 = 0.3;

/// Progress at which staggered cards have converged to baseline
pub const STAGGER_CONVERGE_END: f32 = 0.35;

/// Initial vertical displacement of staggered cards, in pixels
pub const STAGGER_AMOUNT: f32 = 120.0;

// ============================================================================
// Animation & Timing
// ============================================================================

/// Duration of an eased nav scroll in seconds
pub const SCROLL_ANIMATION_DURATION: f64 = 0.45;

/// How long the lightbox usage hint stays up, in milliseconds
pub const LIGHTBOX_HINT_MS: u64 = 8_000;

/// Default toast lifetime in milliseconds
pub const TOAST_LIFETIME_MS: u64 = 4_000;

/// Wheel line-delta to track-units multiplier
pub const WHEEL_LINE_STEP: f32 = 20.0;

// ============================================================================
// Artwork Display
// ============================================================================

/// Maximum dimension for artwork cards (scaled down if larger)
pub const MAX_IMAGE_DIMENSION: f32 = 800.0;

/// Fallback artwork size when the image file cannot be probed
pub const DEFAULT_IMAGE_SIZE: (f32, f32) = (600.0, 800.0);

// ============================================================================
// Enquiry Form
// ============================================================================

/// Minimum length of a non-empty enquiry message
pub const MIN_MESSAGE_LEN: usize = 10;

/// Address enquiries are sent to when no endpoint is configured
pub const ENQUIRY_MAILTO: &str = "studio@atelier.app";

// ============================================================================
// UI Spacing Constants (for visual consistency)
// ============================================================================

/// Border radius - Small (buttons, inputs)
pub const BORDER_RADIUS_SM: f32 = 4.0;
/// Border radius - Medium (cards, dialogs)
pub const BORDER_RADIUS_MD: f32 = 6.0;
/// Border radius - Large (modals, panels)
pub const BORDER_RADIUS_LG: f32 = 10.0;

/// Padding - Small
pub const PADDING_SM: f32 = 8.0;
/// Padding - Medium
pub const PADDING_MD: f32 = 12.0;
/// Padding - Large
pub const PADDING_LG: f32 = 16.0;

/// Button height - Medium
pub const BUTTON_HEIGHT_MD: f32 = 32.0;
/// Button height - Large
pub const BUTTON_HEIGHT_LG: f32 = 44.0;

// ============================================================================
// Modal Dimensions
// ============================================================================

/// Enquiry modal width
pub const MODAL_WIDTH_MD: f32 = 560.0;

/// Backdrop opacity for modal overlays
pub const MODAL_BACKDROP_OPACITY: f32 = 0.6;

/// Backdrop opacity for the lightbox (darker, per the shipped site)
pub const LIGHTBOX_BACKDROP_OPACITY: f32 = 0.95;
