//! Per-event enrichment: dependent queries merged into one record stream.

use report_core::{paginate, EventDetail, HealthEvent, HealthEventSource};
use tracing::{debug, warn};

use crate::model::{Enrichment, EntitySignature, GroupKey};

/// Fans out the dependent queries for one event and merges the results.
///
/// Every sub-query is independently fault tolerant: a failure fetching
/// accounts drops the event, a failed detail query degrades to the
/// default description, and a failed entity query for one account
/// degrades to the "no entity" signature. None of these abort the batch.
pub struct Enricher<'a> {
    source: &'a dyn HealthEventSource,
}

impl<'a> Enricher<'a> {
    /// Create an enricher over the given event source.
    pub fn new(source: &'a dyn HealthEventSource) -> Self {
        Self { source }
    }

    /// Enrich one event into `(key, signature, account)` records.
    ///
    /// Returns an empty vector when the event has no affected accounts,
    /// or when the account listing itself fails.
    pub async fn enrich(&self, event: &HealthEvent) -> Vec<Enrichment> {
        let accounts = match paginate(|cursor| {
            self.source.list_affected_accounts(&event.arn, cursor)
        })
        .await
        {
            Ok(accounts) => accounts,
            Err(e) => {
                warn!(arn = %event.arn, error = %e, "Failed to list affected accounts, dropping event");
                return Vec::new();
            }
        };

        if accounts.is_empty() {
            debug!(arn = %event.arn, "Event has no affected accounts, skipping");
            return Vec::new();
        }

        // Detail is fetched once, with the first account as the sample.
        let detail = match self.source.event_detail(&event.arn, &accounts[0]).await {
            Ok(detail) => detail,
            Err(e) => {
                warn!(arn = %event.arn, error = %e, "Failed to fetch event detail, using defaults");
                EventDetail::default()
            }
        };

        let key = GroupKey {
            event_type_code: event.event_type_code.clone(),
            description: detail.description,
            start_time: detail.start_time.or(event.start_time),
            arn: event.arn.clone(),
            category: event.category,
        };

        let mut enrichments = Vec::with_capacity(accounts.len());
        for account_id in accounts {
            let entities = match paginate(|cursor| {
                self.source
                    .list_affected_entities(&event.arn, &account_id, cursor)
            })
            .await
            {
                Ok(entities) => entities,
                Err(e) => {
                    warn!(
                        arn = %event.arn,
                        account_id = %account_id,
                        error = %e,
                        "Failed to list affected entities, treating as no entity"
                    );
                    Vec::new()
                }
            };

            enrichments.push(Enrichment {
                key: key.clone(),
                signature: EntitySignature::from_entities(entities, event.region.as_deref()),
                account_id,
            });
        }

        enrichments
    }
}
