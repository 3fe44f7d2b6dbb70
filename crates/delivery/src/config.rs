//! Configuration for the delivery adapters.

use std::env;

use report_core::DeliveryError;
use secrecy::{ExposeSecret, SecretString};

/// Configuration for the SMTP relay.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP host.
    pub host: String,
    /// SMTP port (default: 587).
    pub port: u16,
    /// Sender address, also used as the login username.
    pub from_address: String,
    /// Relay password.
    password: SecretString,
}

impl SmtpConfig {
    /// Create a new configuration with explicit values.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        from_address: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            from_address: from_address.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `SMTP_FROM` - sender address / login username
    /// - `SMTP_PASSWORD` - relay password
    ///
    /// Optional (with defaults):
    /// - `SMTP_HOST` - Default: 127.0.0.1
    /// - `SMTP_PORT` - Default: 587
    pub fn from_env() -> Result<Self, DeliveryError> {
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse::<u16>()
            .map_err(|e| DeliveryError::Config(format!("Invalid SMTP_PORT: {}", e)))?;

        let from_address =
            env::var("SMTP_FROM").map_err(|_| DeliveryError::MissingEnvVar("SMTP_FROM".to_string()))?;

        let password = env::var("SMTP_PASSWORD")
            .map_err(|_| DeliveryError::MissingEnvVar("SMTP_PASSWORD".to_string()))?;

        Ok(Self {
            host,
            port,
            from_address,
            password: SecretString::from(password),
        })
    }

    /// Get the password (exposes the secret).
    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

/// Configuration for the object-store sink.
#[derive(Debug, Clone)]
pub struct ObjectStoreConfig {
    /// Store base URL.
    pub base_url: String,
    /// Bucket the report is uploaded into.
    pub bucket: String,
    /// Bearer token presented to the store.
    pub auth_token: String,
}

impl ObjectStoreConfig {
    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `OBJECT_STORE_URL` - store base URL
    /// - `OBJECT_STORE_BUCKET` - target bucket
    ///
    /// Optional:
    /// - `OBJECT_STORE_TOKEN` - bearer token (default: empty)
    pub fn from_env() -> Result<Self, DeliveryError> {
        let base_url = env::var("OBJECT_STORE_URL")
            .map_err(|_| DeliveryError::MissingEnvVar("OBJECT_STORE_URL".to_string()))?;

        let bucket = env::var("OBJECT_STORE_BUCKET")
            .map_err(|_| DeliveryError::MissingEnvVar("OBJECT_STORE_BUCKET".to_string()))?;

        let auth_token = env::var("OBJECT_STORE_TOKEN").unwrap_or_default();

        Ok(Self {
            base_url,
            bucket,
            auth_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smtp_config_new() {
        let config = SmtpConfig::new("smtp.example.com", 465, "reports@example.com", "secret");

        assert_eq!(config.host, "smtp.example.com");
        assert_eq!(config.port, 465);
        assert_eq!(config.from_address, "reports@example.com");
        assert_eq!(config.password(), "secret");
    }

    #[test]
    fn test_smtp_password_not_in_debug_output() {
        let config = SmtpConfig::new("smtp.example.com", 465, "reports@example.com", "secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
    }
}
