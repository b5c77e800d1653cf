//! Configuration loading for Reptor.
//! Reads reptor.toml from the current directory or the path in REPTOR_CONFIG.
//! A missing default file is not an error; every field has a default.

use reptor_ranker::ScoringProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "REPTOR_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "reptor.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scoring: ScoringProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log")]
    pub log: String,
}

fn default_address() -> String { "localhost".to_string() }
fn default_port()    -> u16    { 8000 }
fn default_log()     -> String { "reptor=debug,info".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            log: default_log(),
        }
    }
}


impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` (or REPTOR_CONFIG) must exist. Without either,
    /// reptor.toml is read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let config = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                Self::from_toml_str(&std::fs::read_to_string(&path)?)?
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_toml_str(&std::fs::read_to_string(path)?)?
                } else {
                    Self::default()
                }
            }
        };
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.scoring.validate()?;
        Ok(config)
    }
}
