use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};
use serde::Deserialize;
use std::path::PathBuf;

/// Default REST base URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";
/// Default relay WebSocket URL
const DEFAULT_RELAY_URL: &str = "ws://127.0.0.1:3001/relay";

/// On-disk configuration (`murmur/config.toml` in the platform config dir).
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    server_url: Option<String>,
    relay_url: Option<String>,
    user_id: Option<String>,
    display_name: Option<String>,
    silent: Option<bool>,
}

/// Runtime configuration wrapper.
///
/// Environment variables (`MURMUR_SERVER_URL`, `MURMUR_RELAY_URL`,
/// `MURMUR_USER_ID`, `MURMUR_DISPLAY_NAME`, `MURMUR_SILENT`) override the
/// config file, which overrides the built-in defaults.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    user_id: Option<String>,
    display_name: Option<String>,
    silent: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(ConfigFile::default())
    }
}

impl Config {
    /// Create a new configuration from environment and defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the config file if present, then apply environment overrides.
    pub fn load() -> Self {
        let file = config_path()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|raw| match toml::from_str::<ConfigFile>(&raw) {
                Ok(file) => Some(file),
                Err(e) => {
                    tracing::warn!("ignoring malformed config file: {}", e);
                    None
                }
            })
            .unwrap_or_default();
        Self::from_file(file)
    }

    fn from_file(file: ConfigFile) -> Self {
        let server_url = std::env::var("MURMUR_SERVER_URL")
            .ok()
            .or(file.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let relay_url = std::env::var("MURMUR_RELAY_URL")
            .ok()
            .or(file.relay_url)
            .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string());
        let app = match AppConfig::builder()
            .server_url(server_url)
            .relay_url(relay_url)
            .build()
        {
            Ok(app) => app,
            Err(e) => {
                tracing::warn!("invalid configured URL, using defaults: {}", e);
                AppConfig::builder()
                    .server_url(DEFAULT_SERVER_URL)
                    .relay_url(DEFAULT_RELAY_URL)
                    .build()
                    .expect("default app config is valid")
            }
        };
        let user_id = std::env::var("MURMUR_USER_ID").ok().or(file.user_id);
        let display_name = std::env::var("MURMUR_DISPLAY_NAME")
            .ok()
            .or(file.display_name);
        let silent = std::env::var("MURMUR_SILENT")
            .map(|v| v == "1")
            .unwrap_or_else(|_| file.silent.unwrap_or(false));
        Self {
            app,
            user_id,
            display_name,
            silent,
        }
    }

    /// Build a configuration programmatically (harnesses and tests).
    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self {
            app: builder.build()?,
            user_id: None,
            display_name: None,
            silent: false,
        })
    }

    /// Override the identity fields.
    pub fn with_identity(
        mut self,
        user_id: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        self.user_id = Some(user_id.into());
        self.display_name = Some(display_name.into());
        self
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn relay_url(&self) -> &str {
        self.app.relay_url.as_deref().unwrap_or(DEFAULT_RELAY_URL)
    }

    /// Get the full URL for a REST endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    /// Configured user id, if any
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Configured display name, if any
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Whether the notification cue is muted
    pub fn silent(&self) -> bool {
        self.silent
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("murmur").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "MURMUR_SERVER_URL",
            "MURMUR_RELAY_URL",
            "MURMUR_USER_ID",
            "MURMUR_DISPLAY_NAME",
            "MURMUR_SILENT",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::new();
        assert_eq!(config.server_url(), "http://127.0.0.1:3000");
        assert_eq!(config.relay_url(), "ws://127.0.0.1:3001/relay");
        assert!(config.user_id().is_none());
        assert!(!config.silent());
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        std::env::set_var("MURMUR_SERVER_URL", "http://example.test:8080");
        std::env::set_var("MURMUR_USER_ID", "u9");
        std::env::set_var("MURMUR_SILENT", "1");
        let config = Config::new();
        assert_eq!(config.server_url(), "http://example.test:8080");
        assert_eq!(config.user_id(), Some("u9"));
        assert!(config.silent());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_env_url_falls_back_to_defaults() {
        clear_env();
        std::env::set_var("MURMUR_SERVER_URL", "not-a-url");
        let config = Config::new();
        assert_eq!(config.server_url(), "http://127.0.0.1:3000");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_api_url() {
        clear_env();
        let config = Config::new();
        assert_eq!(
            config.api_url("/api/users"),
            "http://127.0.0.1:3000/api/users"
        );
    }
}
