//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::FontSize;
use crate::preview::{is_known_theme, DEFAULT_THEME};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default preview theme id
    pub theme: Option<String>,

    /// Default preview font size in pixels
    pub font_size: Option<FontSize>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))?;

        if let Some(theme) = config.theme.as_deref() {
            if !is_known_theme(theme) {
                tracing::warn!(theme, "config names an unknown theme; the default will be used");
            }
        }
        Ok(config)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/mdpane/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mdpane")
            .join("config.toml")
    }

    /// Resolve the preview theme, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--theme` argument
    /// 2. Config file `theme` setting
    /// 3. The default theme
    pub fn theme(&self, cli_theme: Option<&str>) -> String {
        cli_theme
            .or(self.theme.as_deref())
            .unwrap_or(DEFAULT_THEME)
            .to_string()
    }

    /// Resolve the font size, with CLI argument taking precedence.
    ///
    /// Out-of-range CLI values are clamped.
    pub fn font_size(&self, cli_size: Option<u32>) -> FontSize {
        cli_size
            .map(FontSize::new)
            .or(self.font_size)
            .unwrap_or_default()
    }
}
