use thiserror::Error;

/// Errors raised by the appraisal operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppraisalError {
    /// The request carried no content, `null`, or an empty string.
    #[error("NFT content required")]
    InvalidInput,
}

/// Errors related to server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid port: {0}")]
    InvalidPort(u16),

    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        assert_eq!(AppraisalError::InvalidInput.to_string(), "NFT content required");
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(ConfigError::InvalidPort(0).to_string(), "invalid port: 0");

        let err = ConfigError::Read {
            path: "/etc/appraiser.toml".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/etc/appraiser.toml"));
    }
}
