//! Error types for collaborator seams.

use thiserror::Error;

/// Errors from the remote health-status service or account directory.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("service error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A cursor chain never terminated within the page ceiling.
    #[error("pagination exceeded {0} pages without a terminal cursor")]
    PageLimit(usize),

    /// Client configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Missing required environment variable.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Errors from report delivery (storage upload or email send).
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Failed to build the SMTP transport.
    #[error("SMTP transport error: {0}")]
    Transport(String),

    /// Failed to send email.
    #[error("failed to send email: {0}")]
    Send(String),

    /// Failed to build the email message.
    #[error("failed to build email: {0}")]
    BuildEmail(String),

    /// Invalid email address.
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    /// Storage upload was rejected.
    #[error("upload failed ({status}): {message}")]
    Upload { status: u16, message: String },

    /// Could not reach the storage service.
    #[error("storage network error: {0}")]
    Network(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Missing required environment variable.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
}
