//! Configuration for the health API client.

use std::env;

use report_core::SourceError;

/// Default health-status service endpoint.
pub const DEFAULT_HEALTH_API_URL: &str = "https://health.us-east-1.amazonaws.com";

/// Default account-directory endpoint.
pub const DEFAULT_DIRECTORY_API_URL: &str = "https://organizations.us-east-1.amazonaws.com";

/// Configuration for [`HealthApiClient`](crate::HealthApiClient).
#[derive(Debug, Clone)]
pub struct HealthClientConfig {
    /// Health-status service endpoint.
    pub health_api_url: String,
    /// Account-directory endpoint.
    pub directory_api_url: String,
    /// Bearer token presented to the gateway.
    pub auth_token: String,
}

impl Default for HealthClientConfig {
    fn default() -> Self {
        Self {
            health_api_url: DEFAULT_HEALTH_API_URL.to_string(),
            directory_api_url: DEFAULT_DIRECTORY_API_URL.to_string(),
            auth_token: String::new(),
        }
    }
}

impl HealthClientConfig {
    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `HEALTH_API_TOKEN` - bearer token for the gateway
    ///
    /// Optional (with defaults):
    /// - `HEALTH_API_URL` - Default: https://health.us-east-1.amazonaws.com
    /// - `DIRECTORY_API_URL` - Default: https://organizations.us-east-1.amazonaws.com
    pub fn from_env() -> Result<Self, SourceError> {
        let auth_token = env::var("HEALTH_API_TOKEN")
            .map_err(|_| SourceError::MissingEnvVar("HEALTH_API_TOKEN".to_string()))?;

        let health_api_url =
            env::var("HEALTH_API_URL").unwrap_or_else(|_| DEFAULT_HEALTH_API_URL.to_string());

        let directory_api_url = env::var("DIRECTORY_API_URL")
            .unwrap_or_else(|_| DEFAULT_DIRECTORY_API_URL.to_string());

        Ok(Self {
            health_api_url,
            directory_api_url,
            auth_token,
        })
    }

    /// Builder method to set the health endpoint.
    pub fn with_health_api_url(mut self, url: impl Into<String>) -> Self {
        self.health_api_url = url.into();
        self
    }

    /// Builder method to set the directory endpoint.
    pub fn with_directory_api_url(mut self, url: impl Into<String>) -> Self {
        self.directory_api_url = url.into();
        self
    }

    /// Builder method to set the bearer token.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = token.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HealthClientConfig::default();

        assert_eq!(config.health_api_url, DEFAULT_HEALTH_API_URL);
        assert_eq!(config.directory_api_url, DEFAULT_DIRECTORY_API_URL);
        assert!(config.auth_token.is_empty());
    }

    #[test]
    fn test_builder_methods() {
        let config = HealthClientConfig::default()
            .with_health_api_url("https://health.test")
            .with_directory_api_url("https://directory.test")
            .with_auth_token("token-1");

        assert_eq!(config.health_api_url, "https://health.test");
        assert_eq!(config.directory_api_url, "https://directory.test");
        assert_eq!(config.auth_token, "token-1");
    }
}
