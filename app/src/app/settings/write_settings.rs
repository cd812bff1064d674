use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::read_settings::SettingsError;
use crate::app::types::Locale;
use crate::catalog::DEFAULT_CATALOG_URL;

/// User-tunable settings, persisted as TOML. Every field has a default so
/// partial files are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Endpoint returning the JSON product array.
    pub catalog_url: String,
    /// Fraction of a section that must be visible for it to become active.
    pub visibility_threshold: f32,
    /// Multiplier applied to pointer travel when drag-panning the menu.
    pub drag_gain: i32,
    /// Ease-out factor for smooth scrolling, in `(0, 1]`.
    pub smooth_scroll_speed: f64,
    /// Animation frame interval.
    pub tick_ms: u64,
    pub mouse_enabled: bool,
    /// `dark`, `light`, or a path to a TOML palette file.
    pub theme: String,
    pub locale: Locale,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            visibility_threshold: 0.6,
            drag_gain: crate::app::core::menu_strip::DEFAULT_DRAG_GAIN,
            smooth_scroll_speed: 0.35,
            tick_ms: 33,
            mouse_enabled: true,
            theme: "dark".to_string(),
            locale: Locale::En,
        }
    }
}

/// Write `settings` to `path`, creating parent directories.
pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(settings)?;
    fs::write(path, text)?;
    Ok(())
}
