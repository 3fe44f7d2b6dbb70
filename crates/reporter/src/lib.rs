//! Event enrichment, aggregation, and report rendering engine.
//!
//! The engine turns raw health events into a delivered report in four
//! stages:
//!
//! 1. [`Enricher`] - per event, fetches affected accounts, detail, and
//!    per-account entities, tolerating partial failure
//! 2. [`AggregatedReport`] - folds the enrichment stream into a two-level
//!    grouping keyed by [`GroupKey`] and [`EntitySignature`]
//! 3. [`render`] - walks the grouping in arrival order and produces the
//!    report text
//! 4. [`Pipeline`] - wires the stages to the collaborators and hands the
//!    rendered report to storage and email

mod aggregate;
mod config;
mod enrich;
mod error;
mod model;
mod pipeline;
mod render;

pub use aggregate::AggregatedReport;
pub use config::ReporterConfig;
pub use enrich::Enricher;
pub use error::ReporterError;
pub use model::{AccountRef, Enrichment, EntitySignature, GroupKey, UNKNOWN_ACCOUNT_NAME};
pub use pipeline::Pipeline;
pub use render::{render, FALLBACK_START_TIME, TIME_FORMAT};
