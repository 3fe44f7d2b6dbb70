//! HealthApiClient implementation over the JSON RPC protocol.

use report_core::{
    async_trait, AccountDirectory, AccountRecord, EventDetail, HealthEvent, HealthEventSource,
    Page, SourceError, PAGE_SIZE,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::api_types::{
    ApiErrorBody, DescribeAffectedAccountsRequest, DescribeAffectedAccountsResponse,
    DescribeAffectedEntitiesRequest, DescribeAffectedEntitiesResponse,
    DescribeEventDetailsRequest, DescribeEventDetailsResponse, DescribeEventsRequest,
    DescribeEventsResponse, EntityFilter, EventDetailFilter, EventFilter, ListAccountsRequest,
    ListAccountsResponse, ENTITY_STATUS_FILTER,
};
use crate::config::HealthClientConfig;

const DESCRIBE_EVENTS: &str = "AWSHealth_20160804.DescribeEventsForOrganization";
const DESCRIBE_AFFECTED_ACCOUNTS: &str =
    "AWSHealth_20160804.DescribeAffectedAccountsForOrganization";
const DESCRIBE_EVENT_DETAILS: &str = "AWSHealth_20160804.DescribeEventDetailsForOrganization";
const DESCRIBE_AFFECTED_ENTITIES: &str =
    "AWSHealth_20160804.DescribeAffectedEntitiesForOrganization";
const LIST_ACCOUNTS: &str = "AWSOrganizationsV20161128.ListAccounts";

/// Client for the health-status service and the account directory.
///
/// One reqwest client is shared across both endpoints; every operation is
/// a POST with the operation named in the `X-Amz-Target` header.
pub struct HealthApiClient {
    client: Client,
    config: HealthClientConfig,
}

impl HealthApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: HealthClientConfig) -> Result<Self, SourceError> {
        let client = Client::builder().build().map_err(|e| {
            SourceError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        info!(
            health_api_url = %config.health_api_url,
            directory_api_url = %config.directory_api_url,
            "HealthApiClient initialized"
        );

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`HealthClientConfig::from_env`] for the variables consumed.
    pub fn from_env() -> Result<Self, SourceError> {
        Self::new(HealthClientConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &HealthClientConfig {
        &self.config
    }

    /// Issue one JSON RPC call and decode the response.
    async fn post_target<Req, Resp>(
        &self,
        url: &str,
        target: &str,
        request: &Req,
    ) -> Result<Resp, SourceError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        debug!(target, "Calling remote service");

        let response = self
            .client
            .post(url)
            .header("X-Amz-Target", target)
            .header("Content-Type", "application/x-amz-json-1.1")
            .header(
                "Authorization",
                format!("Bearer {}", self.config.auth_token),
            )
            .json(request)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as the service error shape
            if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&error_text) {
                let kind = body.error_type.unwrap_or_else(|| "unknown".to_string());
                let message = body.message.unwrap_or_default();
                return Err(SourceError::Api {
                    status: status.as_u16(),
                    message: format!("{}: {}", kind, message),
                });
            }

            return Err(SourceError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        response
            .json()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

/// The service sometimes hands back an empty-string cursor on the last page.
fn normalize_cursor(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.is_empty())
}

#[async_trait]
impl HealthEventSource for HealthApiClient {
    async fn list_events(
        &self,
        cursor: Option<String>,
    ) -> Result<Page<HealthEvent>, SourceError> {
        let request = DescribeEventsRequest {
            filter: EventFilter::open_and_upcoming(),
            max_results: PAGE_SIZE,
            next_token: cursor,
        };

        let response: DescribeEventsResponse = self
            .post_target(&self.config.health_api_url, DESCRIBE_EVENTS, &request)
            .await?;

        Ok(Page {
            items: response.events.into_iter().map(HealthEvent::from).collect(),
            next_token: normalize_cursor(response.next_token),
        })
    }

    async fn list_affected_accounts(
        &self,
        event_arn: &str,
        cursor: Option<String>,
    ) -> Result<Page<String>, SourceError> {
        let request = DescribeAffectedAccountsRequest {
            event_arn: event_arn.to_string(),
            max_results: PAGE_SIZE,
            next_token: cursor,
        };

        let response: DescribeAffectedAccountsResponse = self
            .post_target(
                &self.config.health_api_url,
                DESCRIBE_AFFECTED_ACCOUNTS,
                &request,
            )
            .await?;

        Ok(Page {
            items: response.affected_accounts,
            next_token: normalize_cursor(response.next_token),
        })
    }

    async fn event_detail(
        &self,
        event_arn: &str,
        sample_account_id: &str,
    ) -> Result<EventDetail, SourceError> {
        let request = DescribeEventDetailsRequest {
            organization_event_detail_filters: vec![EventDetailFilter {
                event_arn: event_arn.to_string(),
                aws_account_id: sample_account_id.to_string(),
            }],
        };

        let response: DescribeEventDetailsResponse = self
            .post_target(
                &self.config.health_api_url,
                DESCRIBE_EVENT_DETAILS,
                &request,
            )
            .await?;

        response.into_detail().ok_or_else(|| {
            SourceError::Decode("event detail response had no successful entries".to_string())
        })
    }

    async fn list_affected_entities(
        &self,
        event_arn: &str,
        account_id: &str,
        cursor: Option<String>,
    ) -> Result<Page<String>, SourceError> {
        let request = DescribeAffectedEntitiesRequest {
            organization_entity_account_filters: vec![EntityFilter {
                event_arn: event_arn.to_string(),
                aws_account_id: account_id.to_string(),
                status_codes: ENTITY_STATUS_FILTER.iter().map(|s| s.to_string()).collect(),
            }],
            max_results: PAGE_SIZE,
            next_token: cursor,
        };

        let response: DescribeAffectedEntitiesResponse = self
            .post_target(
                &self.config.health_api_url,
                DESCRIBE_AFFECTED_ENTITIES,
                &request,
            )
            .await?;

        Ok(Page {
            items: response
                .entities
                .into_iter()
                .filter_map(|e| e.entity_value)
                .collect(),
            next_token: normalize_cursor(response.next_token),
        })
    }
}

#[async_trait]
impl AccountDirectory for HealthApiClient {
    async fn list_accounts(
        &self,
        cursor: Option<String>,
    ) -> Result<Page<AccountRecord>, SourceError> {
        let request = ListAccountsRequest {
            max_results: PAGE_SIZE,
            next_token: cursor,
        };

        let response: ListAccountsResponse = self
            .post_target(&self.config.directory_api_url, LIST_ACCOUNTS, &request)
            .await?;

        Ok(Page {
            items: response
                .accounts
                .into_iter()
                .map(|a| AccountRecord {
                    id: a.id,
                    name: a.name,
                })
                .collect(),
            next_token: normalize_cursor(response.next_token),
        })
    }
}
