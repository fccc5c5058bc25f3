//! Loader configuration (`roadnet.toml`)

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::parser::ParseOptions;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE: &str = "roadnet.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Directory that load paths are resolved against.
    pub resource_root: PathBuf,
    /// Reject zero ids and attributes.
    pub require_positive: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            resource_root: PathBuf::from("."),
            require_positive: true,
        }
    }
}

impl LoaderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Read `path` if given, else `./roadnet.toml` if present, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            require_positive: self.require_positive,
        }
    }
}
