use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::banner::{BannerMetadata, Frame, LayoutOptions};
use crate::output::OutputFormat;

/// Configuration file structure for verbanner.
///
/// Lets a project keep its banner title, credits and layout next to its
/// sources instead of repeating them on every invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Application identity
    #[serde(default)]
    pub app: AppConfig,

    /// Credits shown under the version line
    #[serde(default)]
    pub metadata: BannerMetadata,

    /// Banner sizing and decoration
    #[serde(default)]
    pub layout: LayoutOptions,

    /// Border drawing constants
    #[serde(default)]
    pub frame: Frame,

    /// Font lookup
    #[serde(default)]
    pub fonts: FontsConfig,

    /// Output format preferences
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    /// Banner title; may span several lines
    pub name: Option<String>,

    /// Default version string, e.g. "1.2.3:abc123-beta"
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FontsConfig {
    /// Directory holding `<style>.flf` FIGlet fonts
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

const CANDIDATES: [&str; 4] = [
    "verbanner.toml",
    "verbanner.json",
    "verbanner.yaml",
    "verbanner.yml",
];

impl Config {
    /// Load configuration from a file.
    ///
    /// Searches for configuration files in this order:
    /// 1. Specified path
    /// 2. ./verbanner.toml, ./verbanner.json, ./verbanner.yaml, ./verbanner.yml
    /// 3. `<user config dir>/verbanner/config.toml`
    ///
    /// Returns default configuration if no file is found.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }

        for candidate in &CANDIDATES {
            let path = Path::new(candidate);
            if path.exists() {
                return Self::load_from_path(path);
            }
        }

        if let Some(path) = user_config_path().filter(|p| p.exists()) {
            return Self::load_from_path(&path);
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file path.
    fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");

        let config = match extension {
            "toml" => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?,
            "json" => serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?,
            _ => toml::from_str(&contents)
                .or_else(|_| serde_json::from_str(&contents))
                .or_else(|_| serde_yaml::from_str(&contents))
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
        };

        info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("yaml" | "yml") => serde_yaml::to_string(self)?,
            _ => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("verbanner").join("config.toml"))
}
