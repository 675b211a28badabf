//! Core types for the Atelier portfolio viewer.
//!
//! This module defines the fundamental data structures used throughout the
//! application: artworks, category filters, and the top-level view enum.

use crate::constants::{DEFAULT_IMAGE_SIZE, MAX_IMAGE_DIMENSION};
use image::GenericImageView;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Which top-level view is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppView {
    #[default]
    Home,
    Gallery,
}

/// A single artwork in the catalog.
///
/// Catalog data is read-only reference data: the viewer renders it and never
/// mutates it. `featured` marks pieces that appear in the home carousel.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Artwork {
    /// Unique identifier for this artwork
    pub id: u64,
    /// Category slug, e.g. "painting" or "mixed-media"
    pub category: String,
    /// Path to the image file
    pub src: PathBuf,
    /// Display title
    pub title: String,
    /// Year of creation, as displayed
    pub year: String,
    /// Medium, e.g. "Acrylic on Canvas"
    pub medium: String,
    /// Physical dimensions, e.g. "36 x 48 in"
    pub size: String,
    /// Series the piece belongs to
    pub series: String,
    /// Whether this piece appears in the home carousel
    #[serde(default)]
    pub featured: bool,
}

// Probing an image file for dimensions is expensive; cache per path since the
// catalog is immutable for the lifetime of the process.
static DIMENSION_CACHE: Lazy<Mutex<HashMap<PathBuf, Option<(u32, u32)>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

impl Artwork {
    /// Display size for this artwork in layout units, derived from the image
    /// file's aspect ratio and scaled to fit `MAX_IMAGE_DIMENSION`.
    ///
    /// Falls back to `DEFAULT_IMAGE_SIZE` (portrait 3:4) when the file is
    /// missing or unreadable.
    pub fn display_size(&self) -> (f32, f32) {
        let dims = {
            let mut cache = DIMENSION_CACHE.lock();
            *cache
                .entry(self.src.clone())
                .or_insert_with(|| probe_dimensions(&self.src))
        };

        let Some((width, height)) = dims else {
            return DEFAULT_IMAGE_SIZE;
        };

        let aspect_ratio = width as f32 / height as f32;

        if width > height {
            if width as f32 > MAX_IMAGE_DIMENSION {
                (MAX_IMAGE_DIMENSION, MAX_IMAGE_DIMENSION / aspect_ratio)
            } else {
                (width as f32, height as f32)
            }
        } else if height as f32 > MAX_IMAGE_DIMENSION {
            (MAX_IMAGE_DIMENSION * aspect_ratio, MAX_IMAGE_DIMENSION)
        } else {
            (width as f32, height as f32)
        }
    }

    /// One-line caption shown under carousel cards, e.g. "Mixed Media, 2026"
    pub fn caption(&self) -> String {
        format!("{}, {}", self.medium, self.year)
    }

    /// Subject line used for enquiry emails
    pub fn enquiry_subject(&self) -> String {
        format!("Enquiry: {} ({})", self.title, self.year)
    }
}

fn probe_dimensions(path: &PathBuf) -> Option<(u32, u32)> {
    match image::open(path) {
        Ok(img) => Some(img.dimensions()),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Could not probe artwork image");
            None
        }
    }
}

/// Category selector for the gallery filter bar.
///
/// `All` passes every artwork through; `Category` matches the artwork's
/// category slug exactly. Selecting a category with zero matches yields an
/// empty sequence, not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Whether the given artwork passes this filter
    pub fn matches(&self, artwork: &Artwork) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => artwork.category == *c,
        }
    }

    /// Label for the filter bar button
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Category(c) => c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(category: &str) -> Artwork {
        Artwork {
            id: 1,
            category: category.to_string(),
            src: PathBuf::from("/art/piece.jpg"),
            title: "Piece".to_string(),
            year: "2026".to_string(),
            medium: "Oil on Canvas".to_string(),
            size: "36 x 48 in".to_string(),
            series: "Test Series".to_string(),
            featured: false,
        }
    }

    #[test]
    fn test_filter_all_matches_everything() {
        assert!(CategoryFilter::All.matches(&artwork("painting")));
        assert!(CategoryFilter::All.matches(&artwork("sculpture")));
    }

    #[test]
    fn test_filter_category_exact_match() {
        let filter = CategoryFilter::Category("painting".to_string());
        assert!(filter.matches(&artwork("painting")));
        assert!(!filter.matches(&artwork("sculpture")));
        // No substring or case-insensitive matching
        assert!(!filter.matches(&artwork("Painting")));
        assert!(!filter.matches(&artwork("painting-2")));
    }

    #[test]
    fn test_display_size_fallback_for_missing_file() {
        let art = artwork("painting");
        assert_eq!(art.display_size(), DEFAULT_IMAGE_SIZE);
    }

    #[test]
    fn test_caption_format() {
        assert_eq!(artwork("painting").caption(), "Oil on Canvas, 2026");
    }
}
