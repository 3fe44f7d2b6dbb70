//! Health-status service and directory request/response types.
//!
//! The health service speaks camelCase JSON; the account directory speaks
//! PascalCase. Timestamps arrive as epoch seconds.

use chrono::{DateTime, Utc};
use report_core::{EventCategory, EventDetail, HealthEvent, NO_DESCRIPTION};
use serde::{Deserialize, Serialize};

/// Event statuses included in the report.
pub const EVENT_STATUS_FILTER: [&str; 2] = ["open", "upcoming"];

/// Entity statuses included in the report.
pub const ENTITY_STATUS_FILTER: [&str; 4] = ["IMPAIRED", "UNIMPAIRED", "UNKNOWN", "PENDING"];

/// Convert epoch seconds to a UTC timestamp.
pub fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(seconds as i64, 0)
}

/// Filter for the organization event listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
    /// Event status codes to include.
    pub event_status_codes: Vec<String>,
}

impl EventFilter {
    /// Filter for open and upcoming events.
    pub fn open_and_upcoming() -> Self {
        Self {
            event_status_codes: EVENT_STATUS_FILTER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Request for one page of the organization event listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeEventsRequest {
    /// Status filter.
    pub filter: EventFilter,
    /// Page size bound.
    pub max_results: u32,
    /// Continuation cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of the organization event listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeEventsResponse {
    /// Events on this page.
    #[serde(default)]
    pub events: Vec<ApiEvent>,
    /// Continuation cursor, absent on the last page.
    pub next_token: Option<String>,
}

/// An event as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEvent {
    /// Opaque unique identifier.
    pub arn: String,
    /// Event type code.
    #[serde(default)]
    pub event_type_code: String,
    /// Event category.
    #[serde(default)]
    pub event_type_category: EventCategory,
    /// Region the event is scoped to.
    pub region: Option<String>,
    /// Start time as epoch seconds.
    pub start_time: Option<f64>,
}

impl From<ApiEvent> for HealthEvent {
    fn from(event: ApiEvent) -> Self {
        Self {
            arn: event.arn,
            event_type_code: event.event_type_code,
            category: event.event_type_category,
            region: event.region,
            start_time: event.start_time.and_then(from_epoch_seconds),
        }
    }
}

/// Request for one page of an event's affected accounts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeAffectedAccountsRequest {
    /// Event identifier.
    pub event_arn: String,
    /// Page size bound.
    pub max_results: u32,
    /// Continuation cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of an event's affected accounts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeAffectedAccountsResponse {
    /// Account ids on this page.
    #[serde(default)]
    pub affected_accounts: Vec<String>,
    /// Continuation cursor, absent on the last page.
    pub next_token: Option<String>,
}

/// Filter selecting one (event, account) pair for the detail query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailFilter {
    /// Event identifier.
    pub event_arn: String,
    /// Sample account id.
    pub aws_account_id: String,
}

/// Request for per-event detail.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeEventDetailsRequest {
    /// Filters, one per (event, account) pair.
    pub organization_event_detail_filters: Vec<EventDetailFilter>,
}

/// Response to the per-event detail query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeEventDetailsResponse {
    /// Successfully resolved details.
    #[serde(default)]
    pub successful_set: Vec<OrganizationEventDetails>,
}

/// Detail entry for one (event, account) pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationEventDetails {
    /// The event, with a possibly more precise start time.
    pub event: Option<ApiEvent>,
    /// Description texts.
    pub event_description: Option<EventDescription>,
}

/// Description texts for one event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDescription {
    /// Full, most recent description.
    pub latest_description: Option<String>,
    /// Shorter summary.
    pub short_description: Option<String>,
}

impl DescribeEventDetailsResponse {
    /// Collapse the response into an [`EventDetail`].
    ///
    /// Description falls through latest → short → "No description".
    /// Returns `None` when the service resolved nothing for the pair.
    pub fn into_detail(self) -> Option<EventDetail> {
        let first = self.successful_set.into_iter().next()?;

        let description = first
            .event_description
            .and_then(|d| d.latest_description.or(d.short_description))
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        let start_time = first
            .event
            .and_then(|e| e.start_time)
            .and_then(from_epoch_seconds);

        Some(EventDetail {
            description,
            start_time,
        })
    }
}

/// Filter selecting entities for one (event, account) pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityFilter {
    /// Event identifier.
    pub event_arn: String,
    /// Account id.
    pub aws_account_id: String,
    /// Entity statuses to include.
    pub status_codes: Vec<String>,
}

/// Request for one page of affected entities.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeAffectedEntitiesRequest {
    /// Filters, one per (event, account) pair.
    pub organization_entity_account_filters: Vec<EntityFilter>,
    /// Page size bound.
    pub max_results: u32,
    /// Continuation cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of affected entities.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeAffectedEntitiesResponse {
    /// Entities on this page.
    #[serde(default)]
    pub entities: Vec<ApiEntity>,
    /// Continuation cursor, absent on the last page.
    pub next_token: Option<String>,
}

/// An affected entity as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEntity {
    /// Resource identifier.
    pub entity_value: Option<String>,
}

/// Request for one page of the directory account listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAccountsRequest {
    /// Page size bound.
    pub max_results: u32,
    /// Continuation cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// One page of the directory account listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAccountsResponse {
    /// Accounts on this page.
    #[serde(default)]
    pub accounts: Vec<ApiAccount>,
    /// Continuation cursor, absent on the last page.
    pub next_token: Option<String>,
}

/// An account as the directory reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiAccount {
    /// Account id.
    pub id: String,
    /// Display name.
    pub name: Option<String>,
}

/// Service error body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Error type discriminator.
    #[serde(rename = "__type")]
    pub error_type: Option<String>,
    /// Error message.
    #[serde(alias = "Message")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_events_response() {
        let json = r#"{
            "events": [
                {
                    "arn": "arn:aws:health:us-east-1::event/EC2/E1",
                    "eventTypeCode": "AWS_EC2_OPERATIONAL_ISSUE",
                    "eventTypeCategory": "issue",
                    "region": "us-east-1",
                    "startTime": 1714564800.0
                }
            ],
            "nextToken": "page-2"
        }"#;

        let response: DescribeEventsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.events.len(), 1);
        assert_eq!(response.next_token.as_deref(), Some("page-2"));

        let event = HealthEvent::from(response.events[0].clone());
        assert_eq!(event.arn, "arn:aws:health:us-east-1::event/EC2/E1");
        assert_eq!(event.event_type_code, "AWS_EC2_OPERATIONAL_ISSUE");
        assert_eq!(event.category, EventCategory::Issue);
        assert_eq!(event.region.as_deref(), Some("us-east-1"));
        assert_eq!(
            event.start_time.unwrap().to_rfc3339(),
            "2024-05-01T12:00:00+00:00"
        );
    }

    #[test]
    fn test_decode_event_without_optional_fields() {
        let json = r#"{"events": [{"arn": "E1"}]}"#;
        let response: DescribeEventsResponse = serde_json::from_str(json).unwrap();
        let event = HealthEvent::from(response.events[0].clone());

        assert_eq!(event.arn, "E1");
        assert_eq!(event.category, EventCategory::AccountNotification);
        assert!(event.region.is_none());
        assert!(event.start_time.is_none());
    }

    #[test]
    fn test_detail_uses_latest_description() {
        let json = r#"{
            "successfulSet": [{
                "event": {"arn": "E1", "startTime": 1714564800.0},
                "eventDescription": {
                    "latestDescription": "Full text",
                    "shortDescription": "Short text"
                }
            }]
        }"#;

        let detail = serde_json::from_str::<DescribeEventDetailsResponse>(json)
            .unwrap()
            .into_detail()
            .unwrap();
        assert_eq!(detail.description, "Full text");
        assert!(detail.start_time.is_some());
    }

    #[test]
    fn test_detail_falls_back_to_short_description() {
        let json = r#"{
            "successfulSet": [{
                "eventDescription": {"shortDescription": "Short text"}
            }]
        }"#;

        let detail = serde_json::from_str::<DescribeEventDetailsResponse>(json)
            .unwrap()
            .into_detail()
            .unwrap();
        assert_eq!(detail.description, "Short text");
        assert!(detail.start_time.is_none());
    }

    #[test]
    fn test_detail_falls_back_to_literal() {
        let json = r#"{"successfulSet": [{"eventDescription": {"latestDescription": "  "}}]}"#;

        let detail = serde_json::from_str::<DescribeEventDetailsResponse>(json)
            .unwrap()
            .into_detail()
            .unwrap();
        assert_eq!(detail.description, NO_DESCRIPTION);
    }

    #[test]
    fn test_detail_empty_successful_set() {
        let json = r#"{"successfulSet": []}"#;
        let detail = serde_json::from_str::<DescribeEventDetailsResponse>(json)
            .unwrap()
            .into_detail();
        assert!(detail.is_none());
    }

    #[test]
    fn test_decode_entities_response() {
        let json = r#"{
            "entities": [
                {"entityValue": "i-123"},
                {"entityValue": "i-999"},
                {}
            ]
        }"#;

        let response: DescribeAffectedEntitiesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.entities.len(), 3);
        assert_eq!(response.entities[0].entity_value.as_deref(), Some("i-123"));
        assert!(response.entities[2].entity_value.is_none());
    }

    #[test]
    fn test_decode_directory_response() {
        let json = r#"{
            "Accounts": [
                {"Id": "111111111111", "Name": "Prod"},
                {"Id": "222222222222"}
            ],
            "NextToken": "more"
        }"#;

        let response: ListAccountsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.accounts.len(), 2);
        assert_eq!(response.accounts[0].name.as_deref(), Some("Prod"));
        assert!(response.accounts[1].name.is_none());
        assert_eq!(response.next_token.as_deref(), Some("more"));
    }

    #[test]
    fn test_request_serialization_skips_absent_cursor() {
        let request = DescribeEventsRequest {
            filter: EventFilter::open_and_upcoming(),
            max_results: 50,
            next_token: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["maxResults"], 50);
        assert_eq!(json["filter"]["eventStatusCodes"][0], "open");
        assert_eq!(json["filter"]["eventStatusCodes"][1], "upcoming");
        assert!(json.get("nextToken").is_none());
    }

    #[test]
    fn test_entities_request_field_names() {
        let request = DescribeAffectedEntitiesRequest {
            organization_entity_account_filters: vec![EntityFilter {
                event_arn: "E1".to_string(),
                aws_account_id: "A1".to_string(),
                status_codes: ENTITY_STATUS_FILTER.iter().map(|s| s.to_string()).collect(),
            }],
            max_results: 50,
            next_token: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        let filter = &json["organizationEntityAccountFilters"][0];
        assert_eq!(filter["eventArn"], "E1");
        assert_eq!(filter["awsAccountId"], "A1");
        assert_eq!(filter["statusCodes"][0], "IMPAIRED");
        assert_eq!(filter["statusCodes"][3], "PENDING");
    }

    #[test]
    fn test_error_body_aliases() {
        let health: ApiErrorBody =
            serde_json::from_str(r#"{"__type": "Throttling", "message": "slow down"}"#).unwrap();
        assert_eq!(health.message.as_deref(), Some("slow down"));

        let directory: ApiErrorBody =
            serde_json::from_str(r#"{"Message": "denied"}"#).unwrap();
        assert_eq!(directory.message.as_deref(), Some("denied"));
    }
}
