//! Collaborator traits for the remote services events are fetched from.

use async_trait::async_trait;

use crate::{EventDetail, HealthEvent, Page, SourceError};

/// Source of organization health events and their per-event sub-resources.
///
/// All listing calls are cursor-driven and meant to be consumed through
/// [`paginate`](crate::paginate). Implementations fix the event-status
/// filter to open/upcoming and the entity-status filter to
/// IMPAIRED/UNIMPAIRED/UNKNOWN/PENDING.
#[async_trait]
pub trait HealthEventSource: Send + Sync {
    /// List open and upcoming events for the whole organization.
    async fn list_events(&self, cursor: Option<String>)
        -> Result<Page<HealthEvent>, SourceError>;

    /// List account ids affected by one event.
    async fn list_affected_accounts(
        &self,
        event_arn: &str,
        cursor: Option<String>,
    ) -> Result<Page<String>, SourceError>;

    /// Fetch event detail using one representative affected account.
    async fn event_detail(
        &self,
        event_arn: &str,
        sample_account_id: &str,
    ) -> Result<EventDetail, SourceError>;

    /// List entity identifiers affected for one (event, account) pair.
    async fn list_affected_entities(
        &self,
        event_arn: &str,
        account_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<String>, SourceError>;
}

/// One account known to the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    /// Account id.
    pub id: String,
    /// Display name, if the directory has one.
    pub name: Option<String>,
}

/// Directory resolving account ids to display names.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    /// List all accounts in the organization.
    async fn list_accounts(
        &self,
        cursor: Option<String>,
    ) -> Result<Page<AccountRecord>, SourceError>;
}
