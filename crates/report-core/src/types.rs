//! Domain types shared across the reporting pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Description used when an event's detail query fails or carries no text.
pub const NO_DESCRIPTION: &str = "No description";

/// Category of a health event, as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventCategory {
    /// Operational issue affecting running resources.
    Issue,
    /// Planned maintenance or lifecycle change.
    ScheduledChange,
    /// Everything else, including unrecognized wire values.
    #[default]
    #[serde(other)]
    AccountNotification,
}

impl EventCategory {
    /// Console path segment for this category's deep link.
    pub fn console_path(&self) -> &'static str {
        match self {
            Self::Issue => "open-issues",
            Self::ScheduledChange => "scheduled-changes",
            Self::AccountNotification => "other-notifications",
        }
    }
}

/// One organization health event as returned by the event listing.
///
/// Immutable once fetched; the arn is the event's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthEvent {
    /// Opaque unique identifier.
    pub arn: String,
    /// Event type code, e.g. `AWS_EC2_OPERATIONAL_ISSUE`.
    pub event_type_code: String,
    /// Event category.
    pub category: EventCategory,
    /// Region the event is scoped to, if any.
    pub region: Option<String>,
    /// Start time from the listing, if any.
    pub start_time: Option<DateTime<Utc>>,
}

/// Per-event detail fetched with one representative affected account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetail {
    /// Human-readable description.
    pub description: String,
    /// Start time, may override the listing's value.
    pub start_time: Option<DateTime<Utc>>,
}

impl Default for EventDetail {
    fn default() -> Self {
        Self {
            description: NO_DESCRIPTION.to_string(),
            start_time: None,
        }
    }
}
