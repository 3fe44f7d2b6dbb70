//! Configuration for the report pipeline.

use std::env;

use crate::ReporterError;

/// Default console base URL for deep links.
pub const DEFAULT_CONSOLE_BASE_URL: &str = "https://health.aws.amazon.com/health";

/// Default email subject line.
pub const DEFAULT_SUBJECT: &str = "Organization Health Events Report";

/// Default storage key for the uploaded report.
pub const DEFAULT_OBJECT_KEY: &str = "health-report.txt";

/// Configuration for [`Pipeline`](crate::Pipeline).
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// Base URL deep links are built from.
    pub console_base_url: String,
    /// Report email recipient.
    pub recipient: String,
    /// Report email subject.
    pub subject: String,
    /// Storage key the rendered report is uploaded under.
    pub object_key: String,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            console_base_url: DEFAULT_CONSOLE_BASE_URL.to_string(),
            recipient: String::new(),
            subject: DEFAULT_SUBJECT.to_string(),
            object_key: DEFAULT_OBJECT_KEY.to_string(),
        }
    }
}

impl ReporterConfig {
    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `REPORT_RECIPIENT` - email address the report is sent to
    ///
    /// Optional (with defaults):
    /// - `HEALTH_CONSOLE_URL` - Default: https://health.aws.amazon.com/health
    /// - `REPORT_SUBJECT` - Default: Organization Health Events Report
    /// - `REPORT_OBJECT_KEY` - Default: health-report.txt
    pub fn from_env() -> Result<Self, ReporterError> {
        let recipient = env::var("REPORT_RECIPIENT")
            .map_err(|_| ReporterError::MissingEnvVar("REPORT_RECIPIENT".to_string()))?;

        let console_base_url =
            env::var("HEALTH_CONSOLE_URL").unwrap_or_else(|_| DEFAULT_CONSOLE_BASE_URL.to_string());

        let subject = env::var("REPORT_SUBJECT").unwrap_or_else(|_| DEFAULT_SUBJECT.to_string());

        let object_key =
            env::var("REPORT_OBJECT_KEY").unwrap_or_else(|_| DEFAULT_OBJECT_KEY.to_string());

        Ok(Self {
            console_base_url,
            recipient,
            subject,
            object_key,
        })
    }

    /// Builder method to set the console base URL.
    pub fn with_console_base_url(mut self, url: impl Into<String>) -> Self {
        self.console_base_url = url.into();
        self
    }

    /// Builder method to set the recipient.
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    /// Builder method to set the subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Builder method to set the storage key.
    pub fn with_object_key(mut self, key: impl Into<String>) -> Self {
        self.object_key = key.into();
        self
    }
}
