//! Artwork catalog - loading, lookup, and category filtering.
//!
//! The catalog is the read-only data backing both views: a JSON file of
//! artwork records, with a compiled-in default so the app always has
//! something to show. All load failures are recoverable; callers fall back
//! to the built-in catalog with a warning rather than aborting.

use crate::types::{Artwork, CategoryFilter};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Default catalog compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog parsed but contains no artworks
    #[error("Empty catalog")]
    Empty,

    /// Two artworks share an id
    #[error("Duplicate artwork id: {0}")]
    DuplicateId(u64),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// The full set of artworks known to the viewer.
#[derive(Clone, Debug)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let artworks: Vec<Artwork> = serde_json::from_str(&raw)?;
        Self::from_artworks(artworks)
    }

    /// Build a catalog from parsed records, validating ids.
    pub fn from_artworks(artworks: Vec<Artwork>) -> CatalogResult<Self> {
        if artworks.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for artwork in &artworks {
            if !seen.insert(artwork.id) {
                return Err(CatalogError::DuplicateId(artwork.id));
            }
        }
        Ok(Self { artworks })
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        serde_json::from_str(BUILTIN_CATALOG)
            .map(|artworks| Self { artworks })
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Built-in catalog is malformed");
                Self {
                    artworks: Vec::new(),
                }
            })
    }

    /// Load from `path` when given, falling back to the built-in catalog on
    /// any failure with a warning.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        match path {
            Some(p) => match Self::load(p) {
                Ok(catalog) => {
                    tracing::info!(path = %p.display(), count = catalog.len(), "Loaded catalog");
                    catalog
                }
                Err(e) => {
                    tracing::warn!(path = %p.display(), error = %e, "Falling back to built-in catalog");
                    Self::builtin()
                }
            },
            None => Self::builtin(),
        }
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// All artworks in catalog order.
    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    /// Look up an artwork by id.
    pub fn get(&self, id: u64) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id)
    }

    /// Artworks marked `featured`, in catalog order. These populate the home
    /// carousel.
    pub fn featured(&self) -> Vec<Artwork> {
        self.artworks
            .iter()
            .filter(|a| a.featured)
            .cloned()
            .collect()
    }

    /// Artworks passing the given category filter, in catalog order.
    ///
    /// Total: an unknown category yields an empty vec, never an error.
    pub fn filter(&self, filter: &CategoryFilter) -> Vec<Artwork> {
        self.artworks
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect()
    }

    /// Distinct category slugs in first-seen order, for the filter bar.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.artworks
            .iter()
            .filter(|a| seen.insert(a.category.clone()))
            .map(|a| a.category.clone())
            .collect()
    }
}
