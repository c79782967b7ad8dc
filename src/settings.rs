// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Settings are read from a YAML or JSON file. Every field has a default, so
//! a file only needs to name what it changes.

use crate::annotate::proximity::DEFAULT_PROXIMITY_THRESHOLD;
use anyhow::{bail, ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a settings file.
pub const SETTINGS_ENV: &str = "PINSPEC_SETTINGS";

/// Settings file picked up from the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "pinspec.yaml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub annotation: AnnotationSettings,
    #[serde(default)]
    pub viewport: ViewportSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSettings {
    /// Distance in percentage units below which a double-click selects an
    /// existing point instead of placing a new one
    #[serde(default = "default_proximity_threshold")]
    pub proximity_threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSettings {
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: f32,
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f32,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f32,
    /// Relative zoom change per wheel notch
    #[serde(default = "default_wheel_step")]
    pub wheel_step: f32,
    /// Relative zoom change per zoom button press
    #[serde(default = "default_button_step")]
    pub button_step: f32,
}

fn default_proximity_threshold() -> f64 {
    DEFAULT_PROXIMITY_THRESHOLD
}

fn default_initial_zoom() -> f32 {
    1.0
}

fn default_min_zoom() -> f32 {
    0.5
}

fn default_max_zoom() -> f32 {
    8.0
}

fn default_wheel_step() -> f32 {
    0.1
}

fn default_button_step() -> f32 {
    0.2
}

impl Default for AnnotationSettings {
    fn default() -> Self {
        Self {
            proximity_threshold: default_proximity_threshold(),
        }
    }
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            initial_zoom: default_initial_zoom(),
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
            wheel_step: default_wheel_step(),
            button_step: default_button_step(),
        }
    }
}

impl Settings {
    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.annotation.proximity_threshold;
        ensure!(
            threshold.is_finite() && threshold > 0.0,
            "proximity_threshold must be a positive number, got {}",
            threshold
        );

        let v = &self.viewport;
        ensure!(
            v.min_zoom > 0.0 && v.min_zoom <= v.initial_zoom && v.initial_zoom <= v.max_zoom,
            "zoom limits must satisfy 0 < min_zoom <= initial_zoom <= max_zoom, got {} / {} / {}",
            v.min_zoom,
            v.initial_zoom,
            v.max_zoom
        );
        ensure!(
            v.wheel_step > 0.0 && v.button_step > 0.0,
            "zoom steps must be positive"
        );
        Ok(())
    }
}

/// Load and validate settings from a YAML or JSON file.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;

    let extension = path.extension().and_then(|s| s.to_str());
    let settings: Settings = match extension {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("Invalid YAML in {}", path.display()))?,
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("Invalid JSON in {}", path.display()))?,
        _ => bail!("Unsupported settings file extension: {:?}", extension),
    };

    settings.validate()?;
    Ok(settings)
}

/// Settings file to use: `$PINSPEC_SETTINGS`, else `pinspec.yaml` if present.
pub fn settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(SETTINGS_ENV) {
        return Some(PathBuf::from(path));
    }
    let local = PathBuf::from(DEFAULT_SETTINGS_FILE);
    local.exists().then_some(local)
}

/// Load settings from [`settings_path`], falling back to defaults.
pub fn resolve() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };
    match load_settings(&path) {
        Ok(settings) => {
            log::info!("Loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            log::warn!("{:#}. Using defaults.", e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn write_temp(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.annotation.proximity_threshold, 1.5);
        assert_eq!(settings.viewport.min_zoom, 0.5);
        assert_eq!(settings.viewport.max_zoom, 8.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = write_temp(&dir, "partial.yaml", "annotation:\n  proximity_threshold: 1.8\n");
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.annotation.proximity_threshold, 1.8);
        assert_eq!(settings.viewport, ViewportSettings::default());
    }

    #[test]
    fn test_json_settings() {
        let dir = tempdir().unwrap();
        let path = write_temp(&dir, "settings.json", r#"{"viewport": {"max_zoom": 4.0, "button_step": 0.5}}"#);
        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.viewport.max_zoom, 4.0);
        assert_eq!(settings.viewport.button_step, 0.5);
        assert_eq!(settings.viewport.wheel_step, 0.1);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = tempdir().unwrap();
        let path = write_temp(&dir, "bad.yaml", "annotation:\n  proximity_threshold: -1.0\n");
        assert!(load_settings(&path).is_err());

        let path = write_temp(&dir, "bad-zoom.yaml", "viewport:\n  min_zoom: 2.0\n");
        assert!(load_settings(&path).is_err());
    }

    #[test]
    fn test_unknown_extension_and_missing_file() {
        let dir = tempdir().unwrap();
        let path = write_temp(&dir, "settings.toml", "");
        assert!(load_settings(&path).is_err());

        assert!(load_settings(Path::new("/nonexistent/pinspec.yaml")).is_err());
    }
}
