//! Application configuration module
//!
//! Provides configuration types for the application.

use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Base URL of the REST services
    pub server_url: Option<String>,
    /// WebSocket URL of the message relay
    pub relay_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if let Some(url) = &self.relay_url {
            if !url.starts_with("ws://") && !url.starts_with("wss://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    relay_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the REST base URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the relay WebSocket URL
    pub fn relay_url(mut self, url: impl Into<String>) -> Self {
        self.relay_url = Some(url.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url,
            relay_url: self.relay_url,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accepts_valid_urls() {
        let config = AppConfig::builder()
            .server_url("http://localhost:3000")
            .relay_url("ws://localhost:3001/relay")
            .build()
            .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(
            config.relay_url.as_deref(),
            Some("ws://localhost:3001/relay")
        );
    }

    #[test]
    fn test_builder_rejects_bad_scheme() {
        assert!(AppConfig::builder().server_url("ftp://nope").build().is_err());
        assert!(AppConfig::builder().relay_url("http://nope").build().is_err());
    }

    #[test]
    fn test_empty_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
