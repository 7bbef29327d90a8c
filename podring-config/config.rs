use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::{ConfigError, Persistable, load_or_create_default};

#[cfg(test)]
#[path = "./config.tests.rs"]
mod config_tests;

pub const APP_NAME: &str = "podring";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Format used to print the derived pod ring label.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
}

/// Application configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputFormat,

    #[serde(default = "default_true")]
    pub enable_scaling: bool,

    #[serde(default = "default_true")]
    pub check_access: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impersonate: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            enable_scaling: true,
            check_access: true,
            impersonate: None,
        }
    }
}

impl Config {
    /// Loads the configuration from a file or creates a default one if the file does not exist.
    pub async fn load_or_create() -> Result<Self, ConfigError> {
        load_or_create_default(&Self::default_path()).await
    }
}

impl Persistable<Config> for Config {
    /// Returns the default configuration path: `HOME/.podring/config.yaml`.
    fn default_path() -> PathBuf {
        match std::env::home_dir() {
            Some(path) => path.join(format!(".{APP_NAME}")).join("config.yaml"),
            None => PathBuf::from("config.yaml"),
        }
    }

    async fn load(path: &Path) -> Result<Config, ConfigError> {
        let mut file = File::open(path).await?;

        let mut config_str = String::new();
        file.read_to_string(&mut config_str).await?;

        Ok(serde_yaml::from_str::<Config>(&config_str)?)
    }

    async fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let config_str = serde_yaml::to_string(self)?;

        let mut file = File::create(path).await?;
        file.write_all(config_str.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
