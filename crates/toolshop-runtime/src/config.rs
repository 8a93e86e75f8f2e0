use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use toolshop_engine::ControllerOptions;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TOOLSHOP_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.toolshop/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("TOOLSHOP_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("toolshop").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".toolshop").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_seed() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Start each controller with the bundled sample records
    #[serde(default = "default_seed")]
    pub seed_sample_data: bool,

    #[serde(default)]
    pub controller: ControllerOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed(),
            controller: ControllerOptions::default(),
        }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    /// Missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
