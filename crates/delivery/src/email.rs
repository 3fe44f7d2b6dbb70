//! SMTP email delivery with attachment support.

use lettre::{
    message::{header::ContentType, Attachment as LettreAttachment, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use report_core::{async_trait, Attachment, DeliveryError, MailTransport};
use tracing::{info, instrument};

use crate::config::SmtpConfig;

/// Client for sending the report email over SMTP.
///
/// Uses connection pooling; a run sends at most one message, but the pool
/// keeps retried wiring cheap.
pub struct EmailClient {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl EmailClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SmtpConfig) -> Result<Self, DeliveryError> {
        let creds = Credentials::new(config.from_address.clone(), config.password().to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .port(config.port)
            .credentials(creds)
            .build();

        info!(
            host = %config.host,
            port = config.port,
            from = %config.from_address,
            "Created SMTP client"
        );

        Ok(Self {
            transport,
            from_address: config.from_address,
        })
    }

    /// Create a client from environment variables.
    ///
    /// See [`SmtpConfig::from_env`] for the variables consumed.
    pub fn from_env() -> Result<Self, DeliveryError> {
        Self::new(SmtpConfig::from_env()?)
    }

    fn builder(&self, subject: &str, to: &str) -> Result<lettre::message::MessageBuilder, DeliveryError> {
        let from = self
            .from_address
            .parse()
            .map_err(|e| DeliveryError::InvalidAddress(format!("From: {}", e)))?;
        let to = to
            .parse()
            .map_err(|e| DeliveryError::InvalidAddress(format!("To: {}", e)))?;

        Ok(Message::builder().from(from).to(to).subject(subject))
    }

    fn build_message(
        &self,
        subject: &str,
        to: &str,
        body: &str,
        attachment: Option<&Attachment>,
    ) -> Result<Message, DeliveryError> {
        let builder = self.builder(subject, to)?;

        let message = match attachment {
            None => builder
                .body(body.to_string())
                .map_err(|e| DeliveryError::BuildEmail(e.to_string()))?,
            Some(attachment) => {
                let content_type: ContentType = attachment
                    .content_type
                    .parse()
                    .map_err(|e| DeliveryError::BuildEmail(format!("Invalid content type: {}", e)))?;

                let part = LettreAttachment::new(attachment.filename.clone())
                    .body(attachment.data.clone(), content_type);

                builder
                    .multipart(
                        MultiPart::mixed()
                            .singlepart(SinglePart::plain(body.to_string()))
                            .singlepart(part),
                    )
                    .map_err(|e| DeliveryError::BuildEmail(e.to_string()))?
            }
        };

        Ok(message)
    }
}

#[async_trait]
impl MailTransport for EmailClient {
    #[instrument(skip(self, body, attachment), fields(to = %to, subject = %subject))]
    async fn send_with_attachment(
        &self,
        subject: &str,
        to: &str,
        body: &str,
        attachment: Option<&Attachment>,
    ) -> Result<(), DeliveryError> {
        let message = self.build_message(subject, to, body, attachment)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| DeliveryError::Send(e.to_string()))?;

        info!("Report email sent");
        Ok(())
    }

    async fn send_html(
        &self,
        subject: &str,
        to: &str,
        html_body: &str,
    ) -> Result<(), DeliveryError> {
        let message = self
            .builder(subject, to)?
            .multipart(MultiPart::alternative().singlepart(SinglePart::html(html_body.to_string())))
            .map_err(|e| DeliveryError::BuildEmail(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| DeliveryError::Send(e.to_string()))?;

        info!(to = %to, "HTML report email sent");
        Ok(())
    }
}
