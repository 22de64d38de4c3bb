//! Client configuration.
//!
//! Configuration is read once at startup, environment-sourced with sensible
//! development defaults. The environment name only selects branding; nothing
//! in the core branches on it.

use std::time::Duration;

use thiserror::Error;

/// Default API base URL used when `LOCKHAVEN_API_URL` is unset.
const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Default network timeout applied to every request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Deployment environment, branding only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Self {
        match value {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_development(self) -> bool {
        self == Self::Development
    }

    /// Display name shown in page chrome.
    pub fn app_name(self) -> &'static str {
        match self {
            Self::Development => "LockHaven (dev)",
            Self::Production => "LockHaven",
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    api_url: String,
    environment: Environment,
    request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// `LOCKHAVEN_API_URL` sets the API base URL and
    /// `LOCKHAVEN_ENVIRONMENT` selects `development` (default) or
    /// `production`.
    pub fn from_env() -> Self {
        let api_url = std::env::var("LOCKHAVEN_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let environment = std::env::var("LOCKHAVEN_ENVIRONMENT")
            .map(|v| Environment::parse(&v))
            .unwrap_or_default();
        Self {
            api_url,
            environment,
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a new ConfigBuilder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// API base URL, without a trailing slash.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Get the full URL for an API endpoint
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

/// Builder for Config
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    api_url: Option<String>,
    environment: Option<Environment>,
    request_timeout: Option<Duration>,
}

impl ConfigBuilder {
    /// Set the API base URL
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the deployment environment
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Set the per-request network timeout
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_url = self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(api_url));
        }
        Ok(Config {
            api_url: api_url.trim_end_matches('/').to_string(),
            environment: self.environment.unwrap_or_default(),
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}
