use super::{ConfigError, LoggingConfig, RefreshConfig, RpcConfig, ServerConfig};
use crate::validators::{validate_non_zero, validate_url};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub rpc: RpcConfig,

    #[serde(default)]
    pub refresh: RefreshConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub rpc_url: Option<String>,
}

impl Config {
    /// Loads the config file if one is given, otherwise starts from defaults,
    /// then applies CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| {
                    ConfigError::FileRead {
                        path: path.to_string(),
                        source,
                    }
                })?;
                Self::from_toml(&raw)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind_address) = overrides.bind_address {
            self.server.bind_address = bind_address;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(rpc_url) = overrides.rpc_url {
            self.rpc.url = rpc_url;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "server.bind_address cannot be empty".to_string(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be greater than zero".to_string(),
            ));
        }

        validate_url(&self.rpc.url).map_err(ConfigError::Validation)?;
        validate_non_zero(self.rpc.timeout_secs, "rpc.timeout_secs")
            .map_err(ConfigError::Validation)?;
        validate_non_zero(self.refresh.interval_secs, "refresh.interval_secs")
            .map_err(ConfigError::Validation)?;
        validate_non_zero(self.refresh.stale_after_secs, "refresh.stale_after_secs")
            .map_err(ConfigError::Validation)?;

        Ok(())
    }
}
