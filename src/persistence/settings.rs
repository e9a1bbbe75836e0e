use super::files::{atomic_write, read_file};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Length of a new session in minutes (fractions allowed, e.g. 0.1)
    pub default_minutes: f64,
    /// Preset lengths bound to the number keys 1-9, in minutes
    pub presets: Vec<u32>,
    /// Small and large adjust steps, in minutes
    pub adjust_steps: (i64, i64),
    /// Ring the terminal bell on completion
    pub bell: bool,
    /// Show a desktop notification on completion
    pub desktop_notification: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_minutes: 20.0,
            presets: vec![10, 15, 20],
            adjust_steps: (1, 5),
            bell: true,
            desktop_notification: true,
        }
    }
}

/// Load settings from config.json, falling back to defaults
pub fn load_settings<P: AsRef<Path>>(path: P) -> Settings {
    let path = path.as_ref();

    let content = match read_file(path) {
        Ok(Some(content)) => content,
        Ok(None) => return Settings::default(),
        Err(e) => {
            warn!("Failed to read {}: {}; using default settings", path.display(), e);
            return Settings::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Failed to parse {}: {}; using default settings", path.display(), e);
            Settings::default()
        }
    }
}

/// Save settings to config.json
pub fn save_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(settings)?;
    atomic_write(path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_load_nonexistent_settings() {
        let temp_dir = tempdir().unwrap();
        let settings = load_settings(temp_dir.path().join("config.json"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.default_minutes, 20.0);
        assert_eq!(settings.presets, vec![10, 15, 20]);
    }

    #[test]
    fn test_save_and_load_settings() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");

        let settings = Settings {
            default_minutes: 0.1,
            presets: vec![25, 50],
            adjust_steps: (2, 10),
            bell: false,
            desktop_notification: false,
        };
        save_settings(&path, &settings).unwrap();

        assert_eq!(load_settings(&path), settings);
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"default_minutes": 45}"#).unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.default_minutes, 45.0);
        assert_eq!(settings.presets, vec![10, 15, 20]);
        assert!(settings.bell);
    }

    #[test]
    fn test_corrupt_settings_use_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "default_minutes = 45").unwrap();

        assert_eq!(load_settings(&path), Settings::default());
    }
}
