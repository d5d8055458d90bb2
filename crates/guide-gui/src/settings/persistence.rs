//! Settings persistence - load and save settings to disk.
//!
//! Settings are stored in the platform-specific application data folder:
//! - macOS: ~/Library/Application Support/org.physics-guide.Physics Guide/
//! - Windows: %APPDATA%/physics-guide/Physics Guide/config/
//! - Linux: ~/.config/physicsguide/

use super::Settings;
use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "physics-guide";
const APP_NAME: &str = "Physics Guide";
const CONFIG_FILENAME: &str = "settings.toml";

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from the platform settings file.
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("could not determine settings path, using defaults");
        return Settings::default();
    };
    load_settings_from(&path)
}

/// Load settings from `path`.
///
/// Returns default settings if the file doesn't exist or cannot be parsed.
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse settings, using defaults");
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings, using defaults");
            Settings::default()
        }
    }
}

/// Save settings to the platform settings file.
pub fn save_settings(settings: &Settings) -> Result<()> {
    let path = settings_path().ok_or_else(|| anyhow!("could not determine settings path"))?;
    save_settings_to(&path, settings)
}

/// Save settings to `path`, creating the parent directory if needed.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config directory {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(settings).context("serialize settings")?;
    fs::write(path, content).with_context(|| format!("write settings {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved settings");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use guide_model::ChapterId;

    #[test]
    fn settings_round_trip_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);
        let settings = Settings {
            dark_mode: true,
            content_dir: PathBuf::from("/srv/capitulos"),
            last_part: Some("waves".to_string()),
            last_chapter: Some(ChapterId::new(16)),
        };
        save_settings_to(&path, &settings).unwrap();
        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn unreadable_settings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        assert_eq!(load_settings_from(&path), Settings::default());

        fs::write(&path, "dark_mode = \"si\"\n").unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());
    }

    #[test]
    fn missing_keys_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "dark_mode = true\n").unwrap();
        let settings = load_settings_from(&path);
        assert!(settings.dark_mode);
        assert_eq!(settings.content_dir, PathBuf::from("json_capitulos"));
        assert_eq!(settings.last_chapter, None);
    }
}
