//! Persisted user preferences.
//!
//! Stored as TOML in the platform config directory. Settings failures
//! degrade to defaults and never abort startup; the transient query state of
//! the browser page is deliberately not persisted.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use onto_api::ApiConfig;

/// Appearance mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// User preferences (persisted to disk).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Appearance mode.
    pub theme_mode: ThemeMode,
    /// Overrides the environment/default API base URL when set.
    pub api_base_url: Option<String>,
}

impl Settings {
    /// Load settings from disk, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|err| {
                tracing::warn!("ignoring malformed settings file: {err}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Write settings to disk, creating the config directory if needed.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = settings_path().context("no config directory available")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Resolve the API endpoint: settings override first, then the
    /// environment variable, then the built-in default.
    pub fn api_config(&self) -> ApiConfig {
        match &self.api_base_url {
            Some(base_url) => ApiConfig::new(base_url.as_str()),
            None => ApiConfig::from_env(),
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = match self.theme_mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }

    pub fn theme(&self) -> iced::Theme {
        match self.theme_mode {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
        }
    }
}

fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "Ontology Browser")
        .map(|dirs| dirs.config_dir().join("settings.toml"))
}
