//! End-to-end report pipeline: fetch, enrich, aggregate, render, deliver.

use std::collections::HashMap;
use std::sync::Arc;

use report_core::{
    paginate, AccountDirectory, Attachment, HealthEventSource, MailTransport, ReportSink,
};
use tracing::{info, warn};

use crate::aggregate::AggregatedReport;
use crate::config::ReporterConfig;
use crate::enrich::Enricher;
use crate::error::ReporterError;
use crate::render::render;

/// Body line of the report email.
const EMAIL_BODY: &str = "Please find attached the latest organization health events report.";

/// Coordinates one report run against the collaborators.
///
/// Only the top-level event listing is fatal; everything downstream
/// degrades or is logged. Events are enriched sequentially in arrival
/// order so the rendered output is reproducible.
pub struct Pipeline {
    source: Arc<dyn HealthEventSource>,
    directory: Arc<dyn AccountDirectory>,
    sink: Arc<dyn ReportSink>,
    mailer: Arc<dyn MailTransport>,
    config: ReporterConfig,
}

impl Pipeline {
    /// Create a pipeline over the given collaborators.
    pub fn new(
        source: Arc<dyn HealthEventSource>,
        directory: Arc<dyn AccountDirectory>,
        sink: Arc<dyn ReportSink>,
        mailer: Arc<dyn MailTransport>,
        config: ReporterConfig,
    ) -> Self {
        Self {
            source,
            directory,
            sink,
            mailer,
            config,
        }
    }

    /// Run one report cycle and return the rendered report.
    ///
    /// Delivery failures are logged and do not fail the run; the report
    /// content is already complete at that point.
    pub async fn run(&self) -> Result<String, ReporterError> {
        let events = paginate(|cursor| self.source.list_events(cursor)).await?;
        info!(count = events.len(), "Fetched organization health events");

        let names = self.account_names().await;

        let enricher = Enricher::new(self.source.as_ref());
        let mut report = AggregatedReport::default();
        for event in &events {
            for enrichment in enricher.enrich(event).await {
                report.insert(enrichment, &names, &self.config.console_base_url);
            }
        }
        info!(sections = report.len(), "Aggregated report");

        let rendered = render(&report, &self.config.console_base_url);

        self.deliver(&rendered).await;

        Ok(rendered)
    }

    /// Fetch the directory name map once per run.
    ///
    /// A directory failure degrades to an empty map; display names then
    /// fall back to "Unknown" instead of failing the run.
    async fn account_names(&self) -> HashMap<String, String> {
        match paginate(|cursor| self.directory.list_accounts(cursor)).await {
            Ok(records) => records
                .into_iter()
                .filter_map(|record| record.name.map(|name| (record.id, name)))
                .collect(),
            Err(e) => {
                warn!(error = %e, "Failed to list directory accounts, display names degrade");
                HashMap::new()
            }
        }
    }

    /// Upload and email the rendered report.
    async fn deliver(&self, rendered: &str) {
        match self.sink.put(&self.config.object_key, rendered.as_bytes()).await {
            Ok(()) => info!(key = %self.config.object_key, "Report uploaded"),
            Err(e) => warn!(error = %e, "Failed to upload report"),
        }

        let attachment = Attachment {
            filename: self.config.object_key.clone(),
            content_type: "text/plain".to_string(),
            data: rendered.as_bytes().to_vec(),
        };

        match self
            .mailer
            .send_with_attachment(
                &self.config.subject,
                &self.config.recipient,
                EMAIL_BODY,
                Some(&attachment),
            )
            .await
        {
            Ok(()) => info!(recipient = %self.config.recipient, "Report emailed"),
            Err(e) => warn!(error = %e, "Failed to send report email"),
        }
    }
}
