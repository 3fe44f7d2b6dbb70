//! Report delivery adapters.
//!
//! Real implementations of the [`report_core::ReportSink`] and
//! [`report_core::MailTransport`] traits: an HTTP object-store client and
//! an SMTP email client with attachment support.

mod config;
mod email;
mod storage;

pub use config::{ObjectStoreConfig, SmtpConfig};
pub use email::EmailClient;
pub use storage::ObjectStoreClient;
