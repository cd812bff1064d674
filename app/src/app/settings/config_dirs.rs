use directories_next::ProjectDirs;
use std::path::PathBuf;

use super::read_settings::SettingsError;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "storefront")
}

/// Directory holding `settings.toml`.
pub fn project_config_dir() -> Result<PathBuf, SettingsError> {
    project_dirs()
        .map(|d| d.config_dir().to_path_buf())
        .ok_or(SettingsError::NoConfigDir)
}

/// Directory holding the log file.
pub fn user_cache_dir() -> Result<PathBuf, SettingsError> {
    project_dirs()
        .map(|d| d.cache_dir().to_path_buf())
        .ok_or(SettingsError::NoConfigDir)
}

pub fn settings_file() -> Result<PathBuf, SettingsError> {
    Ok(project_config_dir()?.join("settings.toml"))
}
