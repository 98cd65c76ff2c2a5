//! Server configuration types for Appraiser.
//!
//! `ServerConfig` is the shape of the optional `appraiser.toml` file and the
//! value the CLI resolves after layering environment variables and flags on
//! top of it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Listening port when neither the config file nor `PORT` sets one.
pub const DEFAULT_PORT: u16 = 7860;

/// Settings for the HTTP server. All fields have defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the frontend bundle. Served only if it exists.
    #[serde(default = "default_web_dir")]
    pub web_dir: PathBuf,

    /// Fixed seed for reproducible score draws. `None` uses OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_web_dir() -> PathBuf {
    PathBuf::from("public")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            web_dir: default_web_dir(),
            seed: None,
        }
    }
}

impl ServerConfig {
    /// Reject settings the server cannot bind with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port));
        }
        Ok(())
    }

    /// `host:port` string for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
