// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Range Timeline GUI config
//!

use crate::app_colours::ColourTheme;
use directories_next::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const PROJECT_QUALIFIER: &str = "org";
const ORG_NAME: &str = "RangeTimeline";
const APPLICATION_NAME: &str = "RangeTimeline";
const CONFIG_FILE_NAME: &str = "config.json";

/// Errors that can arise when loading or saving the config
#[derive(Error, Debug)]
pub enum GuiError {
    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Couldn't find a config directory")]
    ProjectDirs,
}

/// The config that's saved to disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// GUI colour theme
    #[serde(default)]
    pub colour_theme: ColourTheme,
}

impl Config {
    /// Load the config from the platform config directory
    pub fn load() -> Result<Self, GuiError> {
        Self::load_from(&config_file_path()?)
    }

    /// Load the config from a file
    pub fn load_from(path: &Path) -> Result<Self, GuiError> {
        info!("Loading config from {path:?}");
        let data = fs::read_to_string(path)?;
        let config = Self::from_json(&data)?;
        info!("Config loaded = {config:?}");
        Ok(config)
    }

    /// Parse the config from JSON.  Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, GuiError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load the config, falling back to the default config if it can't be
    /// loaded (e.g. on first run)
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(error) => {
                warn!("Using default config: {error}");
                Self::default()
            }
        }
    }

    /// Save the config to the platform config directory
    pub fn save(&self) -> Result<(), GuiError> {
        self.save_to(&config_file_path()?)
    }

    /// Save the config to a file (creating parent directories as needed)
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        info!("Saving config to {path:?}");
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!("Config saved");
        Ok(())
    }

    pub fn colour_theme(&self) -> ColourTheme {
        self.colour_theme
    }

    pub fn set_colour_theme(&mut self, colour_theme: ColourTheme) {
        self.colour_theme = colour_theme;
    }
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(debug_assertions)]
fn project_dirs() -> Result<ProjectDirs, GuiError> {
    debug!("Getting project directories (dev build)");
    ProjectDirs::from(
        PROJECT_QUALIFIER,
        ORG_NAME,
        &format!("{APPLICATION_NAME} Dev"),
    )
    .ok_or(GuiError::ProjectDirs)
}

/// Get the project directories (e.g. where the config is stored)
#[cfg(not(debug_assertions))]
fn project_dirs() -> Result<ProjectDirs, GuiError> {
    debug!("Getting project directories");
    ProjectDirs::from(PROJECT_QUALIFIER, ORG_NAME, APPLICATION_NAME).ok_or(GuiError::ProjectDirs)
}

/// Get the path to the config
fn config_file_path() -> Result<PathBuf, GuiError> {
    let config_file = project_dirs()?.config_dir().join(CONFIG_FILE_NAME);
    debug!("Config file path = {config_file:?}");
    Ok(config_file)
}

#[cfg(test)]
mod test {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn from_json() {
        let config = Config::from_json(r#"{ "colour_theme": "Dark" }"#).unwrap();
        assert_eq!(config.colour_theme(), ColourTheme::Dark);

        // Missing fields are defaulted
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.colour_theme(), ColourTheme::System);

        // Invalid
        assert!(matches!(
            Config::from_json(r#"{ "colour_theme": "Purple" }"#),
            Err(GuiError::Json(_))
        ));
        assert!(matches!(Config::from_json("not json"), Err(GuiError::Json(_))));
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new("range-timeline-gui-config").unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.set_colour_theme(ColourTheme::Light);
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn load_missing() {
        let dir = TempDir::new("range-timeline-gui-config").unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        assert!(matches!(Config::load_from(&path), Err(GuiError::Io(_))));
    }
}
