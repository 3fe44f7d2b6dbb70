//! Core traits and types for the organization health event reporter.
//!
//! This crate provides the shared interface between the report engine and
//! its collaborators:
//!
//! - [`HealthEventSource`] / [`AccountDirectory`] - the remote services
//!   that events and account names are fetched from
//! - [`ReportSink`] / [`MailTransport`] - delivery targets for a rendered
//!   report
//! - [`paginate`] - the cursor-following fetch loop shared by every
//!   list-style remote call
//! - [`SourceError`] / [`DeliveryError`] - error kinds at each seam
//!
//! # Example
//!
//! ```rust
//! use report_core::{paginate, Page, SourceError};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), SourceError> {
//!     let pages = vec![
//!         Page { items: vec![1, 2], next_token: Some("t1".to_string()) },
//!         Page { items: vec![3], next_token: None },
//!     ];
//!     let mut pages = pages.into_iter();
//!     let all = paginate(|_cursor| {
//!         let page = pages.next().unwrap();
//!         async move { Ok(page) }
//!     })
//!     .await?;
//!     assert_eq!(all, vec![1, 2, 3]);
//!     Ok(())
//! }
//! ```

mod delivery;
mod error;
mod page;
mod source;
mod types;

pub use delivery::{Attachment, LoggingDelivery, MailTransport, NoOpDelivery, ReportSink};
pub use error::{DeliveryError, SourceError};
pub use page::{paginate, Page, MAX_PAGES, PAGE_SIZE};
pub use source::{AccountDirectory, AccountRecord, HealthEventSource};
pub use types::{EventCategory, EventDetail, HealthEvent, NO_DESCRIPTION};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
