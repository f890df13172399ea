use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
///
/// Loaded from `<config dir>/pudding/config.toml`. Every field has a
/// default, so an empty or missing file is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
}

impl Config {
    /// Load config from the default location, falling back to defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path; a missing file means defaults
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| {
            crate::Error::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config to the default location
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the config file path
    /// Uses XDG on Linux, Application Support on macOS, AppData on Windows
    pub fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?;

        Ok(config_dir.join("pudding").join("config.toml"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BrowserConfig {
    /// Program to open docs with (e.g. "firefox"); unset uses the system default
    pub command: Option<String>,
}

/// Executables the docs backends shell out to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_mix")]
    pub mix: String,

    #[serde(default = "default_gem")]
    pub gem: String,
}

fn default_mix() -> String {
    "mix".to_string()
}

fn default_gem() -> String {
    "gem".to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            mix: default_mix(),
            gem: default_gem(),
        }
    }
}
