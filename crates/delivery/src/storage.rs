//! HTTP object-store sink.

use report_core::{async_trait, DeliveryError, ReportSink};
use reqwest::Client;
use tracing::{debug, info};

use crate::config::ObjectStoreConfig;

/// Client uploading the rendered report to an HTTP object store.
///
/// Objects land at `<base>/<bucket>/<key>` via PUT with bearer auth.
pub struct ObjectStoreClient {
    client: Client,
    config: ObjectStoreConfig,
}

impl ObjectStoreClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ObjectStoreConfig) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .build()
            .map_err(|e| DeliveryError::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            base_url = %config.base_url,
            bucket = %config.bucket,
            "Created object-store client"
        );

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`ObjectStoreConfig::from_env`] for the variables consumed.
    pub fn from_env() -> Result<Self, DeliveryError> {
        Self::new(ObjectStoreConfig::from_env()?)
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.bucket,
            key
        )
    }
}

#[async_trait]
impl ReportSink for ObjectStoreClient {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), DeliveryError> {
        let url = self.object_url(key);
        debug!(url = %url, size = bytes.len(), "Uploading report");

        let response = self
            .client
            .put(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.auth_token),
            )
            .header("Content-Type", "text/plain")
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Upload {
                status: status.as_u16(),
                message,
            });
        }

        info!(key, "Report uploaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_url_joins_segments() {
        let client = ObjectStoreClient::new(ObjectStoreConfig {
            base_url: "https://store.test/".to_string(),
            bucket: "reports".to_string(),
            auth_token: String::new(),
        })
        .unwrap();

        assert_eq!(
            client.object_url("health-report.txt"),
            "https://store.test/reports/health-report.txt"
        );
    }
}
