//! Grouping keys and enriched record types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use report_core::EventCategory;

/// Display name used when the directory cannot resolve an account id.
pub const UNKNOWN_ACCOUNT_NAME: &str = "Unknown";

/// Composite identity of one reportable event section.
///
/// The arn guarantees uniqueness even when two events share type,
/// description, and start time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    /// Event type code.
    pub event_type_code: String,
    /// Resolved description.
    pub description: String,
    /// Resolved start time.
    pub start_time: Option<DateTime<Utc>>,
    /// Event identifier.
    pub arn: String,
    /// Event category.
    pub category: EventCategory,
}

/// Normalized key for the entity set of one account under one event.
///
/// Two accounts with the same resource set collapse to the same signature
/// regardless of the order entities were reported in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntitySignature {
    /// Sorted, deduplicated entity identifiers.
    Entities(Vec<String>),
    /// The event affects the account at the region level only.
    NoEntity {
        /// Region reported for the event, `"N/A"` when it has none.
        region: String,
    },
}

impl EntitySignature {
    /// Normalize an entity sequence into a signature.
    pub fn from_entities(mut entities: Vec<String>, region: Option<&str>) -> Self {
        entities.sort();
        entities.dedup();

        if entities.is_empty() {
            Self::NoEntity {
                region: region.unwrap_or("N/A").to_string(),
            }
        } else {
            Self::Entities(entities)
        }
    }
}

/// One affected account, resolved for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRef {
    /// Account id.
    pub id: String,
    /// Display name from the directory, `"Unknown"` when unresolved.
    pub display_name: String,
    /// Deep link to the account's events.
    pub url: String,
}

impl AccountRef {
    /// Resolve an account id against the directory name map.
    pub fn resolve(id: &str, names: &HashMap<String, String>, console_base: &str) -> Self {
        let display_name = names
            .get(id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_ACCOUNT_NAME.to_string());

        Self {
            id: id.to_string(),
            display_name,
            url: format!("{}/account/{}/events", console_base, id),
        }
    }
}

/// One enriched (event, account) record, ready for aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    /// Section identity.
    pub key: GroupKey,
    /// Entity signature for this account.
    pub signature: EntitySignature,
    /// Affected account id.
    pub account_id: String,
}
