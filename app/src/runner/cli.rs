use clap::Parser;
use std::path::PathBuf;

use crate::app::settings::{load_settings_from, settings_file, Settings, SettingsError};
use crate::app::types::Locale;

/// Command line flags. Every setting flag overrides the settings file.
#[derive(Parser, Debug)]
#[command(name = "storefront", version, about = "Terminal catalog browser with a scroll-synced section menu")]
pub struct Cli {
    /// Settings file (defaults to the per-user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Product catalog endpoint
    #[arg(long)]
    pub url: Option<String>,
    /// Visible fraction at which a section becomes active
    #[arg(long)]
    pub threshold: Option<f32>,
    /// `dark`, `light` or a path to a TOML palette
    #[arg(long)]
    pub theme: Option<String>,
    #[arg(long, value_enum)]
    pub locale: Option<Locale>,
    /// Do not capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
    /// Write the effective settings to the settings file and exit
    #[arg(long)]
    pub init_config: bool,
}

impl Cli {
    pub fn config_path(&self) -> Result<PathBuf, SettingsError> {
        match &self.config {
            Some(p) => Ok(p.clone()),
            None => settings_file(),
        }
    }

    /// Apply flag overrides on top of `settings`.
    pub fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(url) = &self.url {
            settings.catalog_url = url.clone();
        }
        if let Some(t) = self.threshold {
            settings.visibility_threshold = t;
        }
        if let Some(theme) = &self.theme {
            settings.theme = theme.clone();
        }
        if let Some(locale) = self.locale {
            settings.locale = locale;
        }
        if self.no_mouse {
            settings.mouse_enabled = false;
        }
        settings
    }

    /// Settings file contents with flag overrides applied.
    pub fn load_settings(&self) -> Result<Settings, SettingsError> {
        Ok(self.apply(load_settings_from(&self.config_path()?)?))
    }
}
