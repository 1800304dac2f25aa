use serde::{Deserialize, Serialize};

use super::catalog::CatalogConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::{CliOverrides, ServerConfig};

const LOCAL_CONFIG_PATH: &str = "helm-broker.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/helm-broker/config.toml";

/// Main configuration structure for the Helm Broker
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Catalog source and scope
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. helm-broker.toml in current directory
    /// 3. /etc/helm-broker/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(file) = overrides.addons_file {
            self.catalog.addons_file = Some(file);
        }
        if let Some(ns) = overrides.namespace {
            self.catalog.namespace = Some(ns);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Server port cannot be 0".to_string()));
        }

        if let Some(ns) = &self.catalog.namespace {
            if ns.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Catalog namespace cannot be empty; omit it for cluster-wide scope"
                        .to_string(),
                ));
            }
        }

        if let Some(file) = &self.catalog.addons_file {
            if file.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Addons file path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}
