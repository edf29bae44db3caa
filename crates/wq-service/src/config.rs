//! Server configuration, read once from the process environment.

use std::env::VarError;
use std::num::ParseIntError;

use serde::Deserialize;

/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "PORT";

/// Startup configuration. Built once in `main` and passed by reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    /// Listen address (all interfaces by default).
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Rejected `PORT` values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must not be 0")]
    ZeroPort,

    #[error("invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("PORT is not valid unicode: {value:?}")]
    NotUnicode { value: String },
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

impl ApiConfig {
    /// Load config from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(PORT_VAR) {
            Ok(port) => Self::from_port_var(Some(&port)),
            Err(VarError::NotPresent) => Self::from_port_var(None),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::NotUnicode {
                value: raw.to_string_lossy().into_owned(),
            }),
        }
    }

    /// Apply the `PORT` rules to an already looked-up value.
    ///
    /// Unset or empty falls back to the default port. Anything else must be
    /// a decimal port in `1..=65535`; there is no silent fallback.
    pub fn from_port_var(value: Option<&str>) -> Result<Self, ConfigError> {
        let port = match value {
            None | Some("") => default_port(),
            Some(raw) => parse_port(raw)?,
        };
        Ok(Self {
            port,
            ..Self::default()
        })
    }

    /// `host:port` string handed to the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.parse::<u16>() {
        Ok(0) => Err(ConfigError::ZeroPort),
        Ok(port) => Ok(port),
        Err(source) => Err(ConfigError::InvalidPort {
            value: raw.to_string(),
            source,
        }),
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
