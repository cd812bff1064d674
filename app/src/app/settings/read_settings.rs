use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use super::write_settings::Settings;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}

/// Parse settings from TOML text. Missing keys take their defaults.
pub fn parse_settings(text: &str) -> Result<Settings, SettingsError> {
    Ok(toml::from_str(text)?)
}

/// Load settings from `path`; a missing file yields the defaults.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    match fs::read_to_string(path) {
        Ok(text) => parse_settings(&text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("no settings at {}, using defaults", path.display());
            Ok(Settings::default())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::types::Locale;
    use assert_fs::prelude::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let s = parse_settings("visibility_threshold = 0.75\nlocale = \"fa\"\n").unwrap();
        assert_eq!(s.visibility_threshold, 0.75);
        assert_eq!(s.locale, Locale::Fa);
        assert_eq!(s.drag_gain, 2);
        assert!(s.mouse_enabled);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = assert_fs::TempDir::new().unwrap();
        let s = load_settings_from(temp.child("absent.toml").path()).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn saved_file_loads_back() {
        let temp = assert_fs::TempDir::new().unwrap();
        let path = temp.child("nested/settings.toml");
        let mut s = Settings::default();
        s.theme = "light".into();
        s.tick_ms = 50;
        crate::app::settings::save_settings_to(&s, path.path()).unwrap();
        let text = std::fs::read_to_string(path.path()).unwrap();
        assert!(text.contains("theme = \"light\""));
        assert_eq!(load_settings_from(path.path()).unwrap(), s);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(parse_settings("tick_ms = \"soon\""), Err(SettingsError::Parse(_))));
    }
}
