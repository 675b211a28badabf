//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin the serialized catalog format: artwork records are
//! what a user-supplied catalog.json must contain, so accidental field
//! renames or reorderings should fail loudly here.

use crate::helpers::TestCatalogBuilder;
use atelier::types::Artwork;
use std::path::PathBuf;

#[test]
fn snapshot_artwork_featured() {
    let artwork = Artwork {
        id: 1,
        category: "painting".to_string(),
        src: PathBuf::from("/art/abstract-horizon.jpg"),
        title: "Abstract Horizon".to_string(),
        year: "2026".to_string(),
        medium: "Acrylic on Canvas".to_string(),
        size: "36 x 48 in".to_string(),
        series: "Horizon Series".to_string(),
        featured: true,
    };
    insta::assert_json_snapshot!(artwork, @r###"
    {
      "id": 1,
      "category": "painting",
      "src": "/art/abstract-horizon.jpg",
      "title": "Abstract Horizon",
      "year": "2026",
      "medium": "Acrylic on Canvas",
      "size": "36 x 48 in",
      "series": "Horizon Series",
      "featured": true
    }
    "###);
}

#[test]
fn snapshot_catalog_categories() {
    let catalog = TestCatalogBuilder::new()
        .with_artwork("painting", true)
        .with_artwork("sculpture", false)
        .with_artwork("painting", false)
        .with_artwork("mixed-media", true)
        .build();
    insta::assert_json_snapshot!(catalog.categories(), @r###"
    [
      "painting",
      "sculpture",
      "mixed-media"
    ]
    "###);
}

#[test]
fn test_artwork_featured_defaults_to_false_when_absent() {
    let raw = r#"{
        "id": 9,
        "category": "digital",
        "src": "/art/signal-garden.jpg",
        "title": "Signal Garden",
        "year": "2024",
        "medium": "Digital Print",
        "size": "40 x 40 in",
        "series": "Digital Explorations"
    }"#;
    let artwork: Artwork = serde_json::from_str(raw).unwrap();
    assert!(!artwork.featured);
}
