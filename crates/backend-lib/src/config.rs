// ============================
// userdesk-backend-lib/src/config.rs
// ============================
//! Configuration management.
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

/// Environment variables read on top of the config file
pub const ENV_KEYS: [&str; 5] = [
    "listen_addr",
    "env",
    "version",
    "access_token_secret",
    "log_level",
];

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Listen address, `host:port` or `:port`
    pub listen_addr: String,
    /// Deployment environment, reported by the health check
    pub env: String,
    /// Build version, reported by the health check
    pub version: String,
    /// HMAC key for access tokens
    pub access_token_secret: SecretString,
    /// Log level
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_addr: ":8080".to_string(),
            env: "development".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            access_token_secret: SecretString::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load defaults, then `path` (if it exists), then the environment
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings: Settings = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::raw().only(&ENV_KEYS))
            .extract()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Settings with the given signing secret and defaults for the rest
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            access_token_secret: SecretString::from(secret.into()),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_token_secret.expose_secret().is_empty() {
            return Err(ConfigError::Invalid(
                "access_token_secret must be set".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level {:?}",
                self.log_level
            )));
        }

        self.bind_addr()?;
        Ok(())
    }

    /// Socket address to bind; a bare `:port` listens on every interface
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = if self.listen_addr.starts_with(':') {
            format!("0.0.0.0{}", self.listen_addr)
        } else {
            self.listen_addr.clone()
        };

        addr.parse().map_err(|_| {
            ConfigError::Invalid(format!("invalid listen address {:?}", self.listen_addr))
        })
    }

    pub fn is_production(&self) -> bool {
        self.env == "production"
    }
}
