//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestCatalogBuilder` - Builder pattern for creating test catalogs
//! - `artwork()` - A single artwork fixture
//! - `track()` - A scroll track with measured extents

use atelier::carousel::ScrollTrack;
use atelier::catalog::Catalog;
use atelier::constants::DRAG_SENSITIVITY;
use atelier::types::Artwork;
use std::path::PathBuf;

/// A single artwork fixture with sensible defaults.
pub fn artwork(id: u64, category: &str, featured: bool) -> Artwork {
    Artwork {
        id,
        category: category.to_string(),
        src: PathBuf::from(format!("/art/{id}.jpg")),
        title: format!("Piece {id}"),
        year: "2026".to_string(),
        medium: "Acrylic on Canvas".to_string(),
        size: "30 x 40 in".to_string(),
        series: "Test Series".to_string(),
        featured,
    }
}

/// Builder for creating test catalogs.
///
/// # Example
/// ```ignore
/// let catalog = TestCatalogBuilder::new()
///     .with_artwork("painting", true)
///     .with_artwork("sculpture", false)
///     .build();
/// ```
pub struct TestCatalogBuilder {
    artworks: Vec<Artwork>,
}

impl Default for TestCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCatalogBuilder {
    pub fn new() -> Self {
        Self {
            artworks: Vec::new(),
        }
    }

    /// Add an artwork with an auto-incrementing id.
    pub fn with_artwork(mut self, category: &str, featured: bool) -> Self {
        let id = self.artworks.len() as u64 + 1;
        self.artworks.push(artwork(id, category, featured));
        self
    }

    pub fn build(self) -> Catalog {
        Catalog::from_artworks(self.artworks).expect("test catalog should be valid")
    }
}

/// A scroll track with the default sensitivity and the given extents.
pub fn track(content_width: f32, viewport_width: f32) -> ScrollTrack {
    let mut track = ScrollTrack::new(DRAG_SENSITIVITY);
    track.set_extents(content_width, viewport_width);
    track
}
