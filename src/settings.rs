//! Application settings - carousel tuning and catalog location.
//!
//! Settings live in a JSON file under the platform config directory. Every
//! field has a default, so a missing or partial file is fine; a malformed
//! file falls back to defaults with a warning rather than failing startup.

use crate::constants::{
    CAPTION_FADE_END, DRAG_SENSITIVITY, SCROLL_STEP, STAGGER_AMOUNT, STAGGER_CONVERGE_END,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Carousel interaction tuning.
///
/// These mirror the shipped site's UX constants: drag amplified 2x, caption
/// fully faded by progress 0.3, cards converged by 0.35. They are product
/// tuning choices, kept configurable rather than hard-wired.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselTuning {
    /// Track units moved per pixel of pointer travel
    pub sensitivity: f32,
    /// Distance of one nav-button or arrow-key scroll
    pub scroll_step: f32,
    /// Progress at which the intro caption is fully faded
    pub caption_fade_end: f32,
    /// Progress at which staggered cards reach baseline
    pub stagger_converge_end: f32,
    /// Initial vertical displacement of staggered cards
    pub stagger_amount: f32,
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            sensitivity: DRAG_SENSITIVITY,
            scroll_step: SCROLL_STEP,
            caption_fade_end: CAPTION_FADE_END,
            stagger_converge_end: STAGGER_CONVERGE_END,
            stagger_amount: STAGGER_AMOUNT,
        }
    }
}

/// Top-level settings document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Carousel interaction tuning
    pub tuning: CarouselTuning,
    /// Optional catalog file overriding the built-in one
    pub catalog_path: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("No config directory available; using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from a specific file, falling back to defaults.
    ///
    /// A missing file is normal (first run); a malformed one is logged.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Malformed settings; using defaults");
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read settings; using defaults");
                Self::default()
            }
        }
    }

    /// Write settings to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }
}

/// Default settings file path: `<config dir>/atelier/settings.json`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("atelier").join("settings.json"))
}
