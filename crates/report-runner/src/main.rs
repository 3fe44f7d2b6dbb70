use std::sync::Arc;

use delivery::{EmailClient, ObjectStoreClient};
use health_client::HealthApiClient;
use reporter::{Pipeline, ReporterConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = Arc::new(HealthApiClient::from_env()?);
    let sink = Arc::new(ObjectStoreClient::from_env()?);
    let mailer = Arc::new(EmailClient::from_env()?);
    let config = ReporterConfig::from_env()?;

    let pipeline = Pipeline::new(client.clone(), client, sink, mailer, config);

    match pipeline.run().await {
        Ok(report) => {
            info!(bytes = report.len(), "Report run complete");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Report run failed");
            Err(e.into())
        }
    }
}
