// ABOUTME: Configuration management for hostenv
// ABOUTME: Handles loading configuration from files and overriding it from environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CLUSTER_FILE: &str = "Clusterfile";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cluster_file: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file(),
        };

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&contents)?
        } else {
            Config::default()
        };

        config.merge_env();
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> PathBuf {
        let possible_paths = vec![
            PathBuf::from("hostenv.yaml"),
            PathBuf::from("hostenv.yml"),
            PathBuf::from(".hostenv.yaml"),
            PathBuf::from(".hostenv.yml"),
        ];

        for path in possible_paths {
            if path.exists() {
                return path;
            }
        }

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".hostenv").join("config.yaml");
            if home_config.exists() {
                return home_config;
            }
        }

        // Default path (may not exist)
        PathBuf::from("hostenv.yaml")
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) {
        if let Ok(cluster_file) = std::env::var("HOSTENV_CLUSTERFILE") {
            self.cluster_file = Some(PathBuf::from(cluster_file));
        }
        if let Ok(level) = std::env::var("HOSTENV_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("HOSTENV_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Cluster file to load: the command line wins, then config, then the default name
    pub fn cluster_file(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.cluster_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CLUSTER_FILE))
    }
}
