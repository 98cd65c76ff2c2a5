//! Server configuration loader for Appraiser.
//!
//! Reads an optional TOML file and deserializes it into [`ServerConfig`].
//! Falls back to defaults when the file is missing or malformed; any other
//! read failure is returned to the caller.

use std::path::Path;

use appraiser_types::config::ServerConfig;
use appraiser_types::error::ConfigError;

/// Load server configuration from `path`.
///
/// - If the file does not exist, returns [`ServerConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file cannot be read for another reason, returns [`ConfigError::Read`].
pub async fn load_server_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(ServerConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source: err,
            });
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            Ok(ServerConfig::default())
        }
    }
}
