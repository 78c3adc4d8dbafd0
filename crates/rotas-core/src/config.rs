//! Configuration for rotas (stored in ~/.config/rotas/config.toml)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RotasError};
use crate::graph::Frontier;

const CONFIG_DIR: &str = "rotas";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ROTAS_CONFIG_DIR";

pub const DEFAULT_PATH_SEPARATOR: &str = " → ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotasConfig {
    /// Network used when no `--network` is given (built-in sample otherwise)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_network: Option<PathBuf>,

    /// Frontier strategy for the routing engine
    #[serde(default)]
    pub frontier: Frontier,

    /// Extra or overriding glyphs, keyed by transport mode label
    #[serde(default)]
    pub glyphs: BTreeMap<String, String>,

    /// Separator between cities when rendering a route
    #[serde(default = "default_path_separator")]
    pub path_separator: String,
}

fn default_path_separator() -> String {
    DEFAULT_PATH_SEPARATOR.to_string()
}

impl Default for RotasConfig {
    fn default() -> Self {
        Self {
            default_network: None,
            frontier: Frontier::default(),
            glyphs: BTreeMap::new(),
            path_separator: default_path_separator(),
        }
    }
}

impl RotasConfig {
    fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RotasError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user configuration, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RotasError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            RotasError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Glyph override for a mode label, if configured
    pub fn glyph_for(&self, label: &str) -> Option<&str> {
        self.glyphs.get(label).map(String::as_str)
    }
}
