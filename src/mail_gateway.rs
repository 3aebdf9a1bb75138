use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;
use uuid::Uuid;

use crate::configuration::SmtpSettings;
use crate::domain::Envelope;

#[derive(thiserror::Error, Debug)]
pub enum GatewayError {
    #[error("SMTP configuration is missing")]
    Configuration,
    #[error(transparent)]
    Dispatch(#[from] anyhow::Error),
}

/// Capability interface over the outbound mail transport. The production
/// implementation talks SMTP; the test suite substitutes a recording stub.
#[async_trait]
pub trait MailGateway: Send + Sync {
    async fn send(&self, envelope: Envelope) -> Result<String, GatewayError>;
}

#[derive(Clone)]
pub struct SmtpGateway {
    settings: SmtpSettings,
}

impl SmtpGateway {
    pub fn new(settings: SmtpSettings) -> Self {
        Self { settings }
    }

    /// Built per call, mirroring the per-request configuration check: an
    /// incomplete deployment fails every dispatch identically.
    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, GatewayError> {
        if !self.settings.is_complete() {
            return Err(GatewayError::Configuration);
        }

        let builder = if self.settings.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.settings.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.settings.host)
        }
        .map_err(anyhow::Error::from)?;

        Ok(builder
            .port(self.settings.port)
            .credentials(Credentials::new(
                self.settings.username.clone(),
                self.settings.password.expose_secret().to_owned(),
            ))
            .build())
    }
}

#[async_trait]
impl MailGateway for SmtpGateway {
    #[tracing::instrument(name = "Dispatching email via SMTP gateway", skip(self, envelope))]
    async fn send(&self, envelope: Envelope) -> Result<String, GatewayError> {
        let transport = self.transport()?;

        let Envelope {
            from,
            to,
            reply_to,
            subject,
            html_body,
            text_body,
        } = envelope;

        let message_id = format!("<{}@{}>", Uuid::new_v4(), self.settings.host);
        let message = Message::builder()
            .from(parse_mailbox(&from)?)
            .to(parse_mailbox(&to)?)
            .reply_to(parse_mailbox(reply_to.as_ref())?)
            .subject(subject)
            .message_id(Some(message_id.clone()))
            .multipart(MultiPart::alternative_plain_html(text_body, html_body))
            .map_err(anyhow::Error::from)?;

        transport
            .send(message)
            .await
            .map_err(anyhow::Error::from)?;

        Ok(message_id)
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, GatewayError> {
    address
        .parse()
        .map_err(|e: lettre::address::AddressError| GatewayError::Dispatch(e.into()))
}
