//! HTTP client for the health-status service and account directory.
//!
//! Implements the [`report_core::HealthEventSource`] and
//! [`report_core::AccountDirectory`] traits against the AWS-Health-shaped
//! JSON RPC protocol: one POST endpoint per service, with the operation
//! named in the `X-Amz-Target` header. Request signing is owned by the
//! transport gateway; this client authenticates with a bearer token.

mod api_types;
mod client;
mod config;

pub use client::HealthApiClient;
pub use config::HealthClientConfig;
