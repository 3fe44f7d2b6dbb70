//! Error types for the report engine.

use report_core::SourceError;
use thiserror::Error;

/// Errors that abort a report run.
///
/// Sub-resource failures (accounts, detail, entities) and delivery
/// failures never surface here; they degrade or get logged at the point
/// of occurrence.
#[derive(Debug, Error)]
pub enum ReporterError {
    /// The top-level event listing failed; no report is emitted.
    #[error("failed to list health events: {0}")]
    EventList(#[from] SourceError),

    /// Missing required environment variable.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),
}
