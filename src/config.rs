//! Configuration for the size hints updater
//!
//! Loads configuration from TOML file at `~/.config/xupdate-size-hints/config.toml`
//! Auto-generates default config file on first run if missing.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sizehints_codec::SizeHintsFlags;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub property: PropertyConfig,
    #[serde(default)]
    pub update: UpdateConfig,
}

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("Config file not found at {:?}, using defaults", config_path);
            // Auto-generate default config file
            if let Err(e) = Self::save_default(&config_path) {
                warn!("Failed to create default config file: {}", e);
            }
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        info!("Configuration loaded from {:?}", path);
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Get the path to the config file
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("xupdate-size-hints");

        Ok(config_dir.join("config.toml"))
    }

    /// Save default configuration to file
    fn save_default(path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(&Self::default())
            .context("Failed to serialize default config")?;

        fs::write(path, toml_string)
            .context("Failed to write default config file")?;

        info!("Created default config file at {:?}", path);
        Ok(())
    }
}

/// Which window property holds the size hints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyConfig {
    /// Property name (ICCCM: WM_NORMAL_HINTS)
    pub name: String,
    /// Property type written back (ICCCM: WM_SIZE_HINTS)
    pub type_name: String,
}

impl Default for PropertyConfig {
    fn default() -> Self {
        Self {
            name: "WM_NORMAL_HINTS".to_string(),
            type_name: "WM_SIZE_HINTS".to_string(),
        }
    }
}

/// What to change on the window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateConfig {
    /// Flags to clear, e.g. "P_ASPECT | P_RESIZE_INC"
    pub clear: SizeHintsFlags,
    /// Report what would change without writing the property
    pub dry_run: bool,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            clear: SizeHintsFlags::P_ASPECT,
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.property.name, "WM_NORMAL_HINTS");
        assert_eq!(config.property.type_name, "WM_SIZE_HINTS");
        assert_eq!(config.update.clear, SizeHintsFlags::P_ASPECT);
        assert!(!config.update.dry_run);
    }

    #[test]
    fn test_default_roundtrips_through_toml() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(text.contains("P_ASPECT"));
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_parse_flag_names() {
        let config: Config = toml::from_str(
            r#"
            [update]
            clear = "P_ASPECT | P_MIN_SIZE | P_RESIZE_INC"
            dry_run = true
            "#,
        )
        .unwrap();
        assert_eq!(
            config.update.clear,
            SizeHintsFlags::P_ASPECT | SizeHintsFlags::P_MIN_SIZE | SizeHintsFlags::P_RESIZE_INC
        );
        assert!(config.update.dry_run);
        assert_eq!(config.property, PropertyConfig::default());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result: Result<Config, _> = toml::from_str("[update]\nclear = \"P_SQUARE\"\ndry_run = false\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::save_default(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
