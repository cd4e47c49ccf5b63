//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bintree/bintree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `BINTREE_*` prefix, `__` between sections
//!    (e.g. `BINTREE_CODEC__SENTINEL=~`)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::codec::{DEFAULT_DELIMITER, DEFAULT_SENTINEL};
use crate::domain::{DomainError, TreeCodec};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("config error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("cannot render settings: {0}")]
    Render(#[from] toml::ser::Error),

    #[error(transparent)]
    Codec(#[from] DomainError),
}

/// Token choices for the string encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CodecSettings {
    pub delimiter: String,
    pub sentinel: String,
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub codec: CodecSettings,
}

/// Get the XDG config directory for bintree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bintree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bintree.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// `config_file`, when given, must exist; the global file is optional.
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("codec.delimiter", defaults.codec.delimiter)?
            .set_default("codec.sentinel", defaults.codec.sentinel)?;

        if let Some(global_path) = global_config_path() {
            debug!(path = %global_path.display(), "global config");
            builder = builder.add_source(File::from(global_path).required(false));
        }

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("BINTREE")
                .prefix_separator("_")
                .separator("__"),
        );

        let settings: Self = builder.build()?.try_deserialize()?;
        debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Validated codec for the configured tokens.
    pub fn codec(&self) -> Result<TreeCodec, ConfigError> {
        Ok(TreeCodec::new(
            self.codec.delimiter.as_str(),
            self.codec.sentinel.as_str(),
        )?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
