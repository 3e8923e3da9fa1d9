use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use crate::error::*;
use crate::html::Classifier;
use crate::util;

use super::*;

pub const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_CONFIG_TOML: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RedactorConfig {
    #[serde(default = "default_input_tags")]
    pub input_tags: Vec<String>,
    #[serde(default = "default_container_tags")]
    pub container_tags: Vec<String>,
}

/// Used to specify serde default value for the "input_tags" field.
fn default_input_tags() -> Vec<String> {
    vec!["input".to_owned()]
}

/// Used to specify serde default value for the "container_tags" field.
fn default_container_tags() -> Vec<String> {
    vec!["div".to_owned()]
}

impl Default for RedactorConfig {
    fn default() -> Self {
        Self {
            input_tags: default_input_tags(),
            container_tags: default_container_tags(),
        }
    }
}

impl RedactorConfig {
    pub fn from_file(path: &Path) -> Result<Self, RedactorError> {
        let mut file = util::open_file(path).map_err(RedactorError::OpenFile)?;

        let mut toml_str = String::new();
        file.read_to_string(&mut toml_str).map_err(RedactorError::ReadConfig)?;

        Self::from_str(&toml_str)
    }

    pub fn default_location() -> Option<PathBuf> {
        get_default_config_path()
    }

    fn path_from_location(path: &Path) -> PathBuf {
        path.join(CONFIG_FILENAME)
    }

    pub fn from_location(path: &Path) -> Result<Self, RedactorError> {
        let config_file_path = Self::path_from_location(path);

        if config_file_path.exists() {
            debug!("Loading config from {}", config_file_path.display());
            Ok(Self::from_file(&config_file_path)?)
        } else {
            debug!("No config file at {}, using defaults.", config_file_path.display());
            Ok(Self::default())
        }
    }

    pub fn from_default_location() -> Result<Self, RedactorError> {
        if let Some(path) = Self::default_location() {
            Self::from_location(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn write_default() -> Result<(), RedactorError> {
        if let Some(config_location) = Self::default_location() {
            Self::write_default_to(&config_location)?;
        }

        Ok(())
    }

    /// Write the bundled default config into `location`, unless a config file already exists there.
    pub fn write_default_to(location: &Path) -> Result<(), RedactorError> {
        let config_file_path = Self::path_from_location(location);

        if !config_file_path.exists() {
            // Create config directory if necessary.
            util::create_parent_dir(&config_file_path).map_err(|err| RedactorError::Other(err.to_string().into()))?;

            // Write config file.
            let mut file = util::create_file(&config_file_path).map_err(RedactorError::CreateFile)?;
            file.write_all(DEFAULT_CONFIG_TOML.as_bytes())
                .map_err(RedactorError::WriteFile)?;
        }

        Ok(())
    }

    pub fn classifier(&self) -> Result<Classifier, RedactorError> {
        if self.container_tags.is_empty() && self.input_tags.is_empty() {
            return Err(RedactorError::Config(
                "At least one input or container tag must be configured.".into(),
            ));
        }

        Ok(Classifier::new(self.input_tags.as_slice(), self.container_tags.as_slice()))
    }
}

impl FromStr for RedactorConfig {
    type Err = RedactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(s).map_err(|err| RedactorError::ParseConfig(err.to_string().into()))?;

        Ok(config)
    }
}
