//! Unit tests for settings module.

use atelier::constants::{
    CAPTION_FADE_END, DRAG_SENSITIVITY, SCROLL_STEP, STAGGER_AMOUNT, STAGGER_CONVERGE_END,
};
use atelier::settings::{CarouselTuning, Settings};
use std::path::PathBuf;

#[test]
fn test_tuning_defaults_match_shipped_constants() {
    let tuning = CarouselTuning::default();
    assert_eq!(tuning.sensitivity, DRAG_SENSITIVITY);
    assert_eq!(tuning.scroll_step, SCROLL_STEP);
    assert_eq!(tuning.caption_fade_end, CAPTION_FADE_END);
    assert_eq!(tuning.stagger_converge_end, STAGGER_CONVERGE_END);
    assert_eq!(tuning.stagger_amount, STAGGER_AMOUNT);
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings::load_from(&path);
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = Settings::default();
    settings.tuning.sensitivity = 3.5;
    settings.tuning.scroll_step = 250.0;
    settings.catalog_path = Some(PathBuf::from("/data/catalog.json"));

    settings.save_to(&path).unwrap();
    let reloaded = Settings::load_from(&path);
    assert_eq!(reloaded, settings);
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"tuning": {"sensitivity": 1.0}}"#).unwrap();

    let settings = Settings::load_from(&path);
    assert_eq!(settings.tuning.sensitivity, 1.0);
    // Unspecified fields keep their defaults
    assert_eq!(settings.tuning.scroll_step, SCROLL_STEP);
    assert_eq!(settings.tuning.caption_fade_end, CAPTION_FADE_END);
    assert_eq!(settings.catalog_path, None);
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{not json at all").unwrap();

    let settings = Settings::load_from(&path);
    assert_eq!(settings, Settings::default());
}
