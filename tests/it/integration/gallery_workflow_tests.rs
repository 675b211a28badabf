//! Gallery Workflow Integration Tests
//!
//! Filtering, lightbox stepping over the filtered set, and catalog loading
//! from disk.

use crate::helpers::{artwork, TestCatalogBuilder};
use atelier::app::LightboxState;
use atelier::catalog::{Catalog, CatalogError};
use atelier::types::CategoryFilter;

#[test]
fn test_filter_then_lightbox_indices_stay_consistent() {
    let catalog = TestCatalogBuilder::new()
        .with_artwork("painting", true) // id 1
        .with_artwork("sculpture", false) // id 2
        .with_artwork("painting", false) // id 3
        .with_artwork("digital", false) // id 4
        .build();

    let filter = CategoryFilter::Category("painting".to_string());
    let visible = catalog.filter(&filter);
    assert_eq!(visible.len(), 2);

    // The lightbox indexes into the filtered set, not the catalog
    let mut lightbox = LightboxState {
        current: Some(0),
        hint_until: None,
        backdrop_clicked: false,
    };
    assert_eq!(visible[lightbox.current.unwrap()].id, 1);

    lightbox.step_next(visible.len());
    assert_eq!(visible[lightbox.current.unwrap()].id, 3);

    // Wraps at the end
    lightbox.step_next(visible.len());
    assert_eq!(visible[lightbox.current.unwrap()].id, 1);

    // And at the start, going backwards
    lightbox.step_prev(visible.len());
    assert_eq!(visible[lightbox.current.unwrap()].id, 3);
}

#[test]
fn test_lightbox_stepping_is_inert_for_single_item() {
    let mut lightbox = LightboxState {
        current: Some(0),
        hint_until: None,
        backdrop_clicked: false,
    };
    lightbox.step_next(1);
    lightbox.step_prev(1);
    assert_eq!(lightbox.current, Some(0));
}

#[test]
fn test_lightbox_stepping_when_closed_is_noop() {
    let mut lightbox = LightboxState {
        current: None,
        hint_until: None,
        backdrop_clicked: false,
    };
    lightbox.step_next(5);
    assert_eq!(lightbox.current, None);
}

#[test]
fn test_catalog_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    let artworks = vec![
        artwork(1, "painting", true),
        artwork(2, "mixed-media", false),
    ];
    std::fs::write(&path, serde_json::to_string_pretty(&artworks).unwrap()).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(2).unwrap().category, "mixed-media");
}

#[test]
fn test_catalog_load_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "[{\"id\": \"not a number\"}]").unwrap();

    assert!(matches!(
        Catalog::load(&path),
        Err(CatalogError::Json(_))
    ));
}

#[test]
fn test_load_or_builtin_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    let catalog = Catalog::load_or_builtin(Some(&missing));
    // Falls back to the compiled-in catalog rather than erroring
    assert!(!catalog.is_empty());
}

#[test]
fn test_selecting_every_derived_category_yields_items() {
    let catalog = TestCatalogBuilder::new()
        .with_artwork("painting", true)
        .with_artwork("sculpture", false)
        .with_artwork("digital", false)
        .build();

    for category in catalog.categories() {
        let visible = catalog.filter(&CategoryFilter::Category(category.clone()));
        assert!(
            !visible.is_empty(),
            "derived category {category} yielded nothing"
        );
        assert!(visible.iter().all(|a| a.category == category));
    }
}
