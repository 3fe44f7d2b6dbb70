//! Delivery traits and test implementations.

use async_trait::async_trait;

use crate::DeliveryError;

/// An email attachment.
#[derive(Debug, Clone)]
pub struct Attachment {
    /// File name presented to the recipient.
    pub filename: String,
    /// MIME content type.
    pub content_type: String,
    /// Attachment bytes.
    pub data: Vec<u8>,
}

/// Trait for persisting a rendered report to object storage.
///
/// Abstracted to support different stores (HTTP object store, tests, etc.)
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Store the report bytes under the given key.
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), DeliveryError>;
}

/// Trait for sending a rendered report by email.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Send a plain-text email, optionally with an attachment.
    async fn send_with_attachment(
        &self,
        subject: &str,
        to: &str,
        body: &str,
        attachment: Option<&Attachment>,
    ) -> Result<(), DeliveryError>;

    /// Send an HTML email.
    ///
    /// Default implementation sends the markup as a plain body.
    async fn send_html(
        &self,
        subject: &str,
        to: &str,
        html_body: &str,
    ) -> Result<(), DeliveryError> {
        self.send_with_attachment(subject, to, html_body, None).await
    }
}

/// A no-op delivery target for testing that discards everything.
#[derive(Debug, Clone, Default)]
pub struct NoOpDelivery;

#[async_trait]
impl ReportSink for NoOpDelivery {
    async fn put(&self, _key: &str, _bytes: &[u8]) -> Result<(), DeliveryError> {
        Ok(())
    }
}

#[async_trait]
impl MailTransport for NoOpDelivery {
    async fn send_with_attachment(
        &self,
        _subject: &str,
        _to: &str,
        _body: &str,
        _attachment: Option<&Attachment>,
    ) -> Result<(), DeliveryError> {
        Ok(())
    }
}

/// A logging delivery target for debugging that logs all operations.
#[derive(Debug, Clone, Default)]
pub struct LoggingDelivery;

#[async_trait]
impl ReportSink for LoggingDelivery {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<(), DeliveryError> {
        tracing::info!(key, size = bytes.len(), "Storing report");
        Ok(())
    }
}

#[async_trait]
impl MailTransport for LoggingDelivery {
    async fn send_with_attachment(
        &self,
        subject: &str,
        to: &str,
        body: &str,
        attachment: Option<&Attachment>,
    ) -> Result<(), DeliveryError> {
        let attached = attachment.map(|a| a.filename.as_str()).unwrap_or("none");
        tracing::info!(subject, to, attached, "Sending report email: {}", body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_delivery() {
        let delivery = NoOpDelivery;

        // Should not error
        delivery.put("report.txt", b"content").await.unwrap();
        delivery
            .send_with_attachment("subject", "ops@example.com", "body", None)
            .await
            .unwrap();
        delivery
            .send_html("subject", "ops@example.com", "<p>body</p>")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_logging_delivery() {
        let delivery = LoggingDelivery;
        let attachment = Attachment {
            filename: "report.txt".to_string(),
            content_type: "text/plain".to_string(),
            data: b"content".to_vec(),
        };

        // Should not error
        delivery.put("report.txt", b"content").await.unwrap();
        delivery
            .send_with_attachment("subject", "ops@example.com", "body", Some(&attachment))
            .await
            .unwrap();
    }
}
