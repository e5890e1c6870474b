use crate::config::EmailConfig;
use crate::email::OutgoingEmail;
use crate::AlertError;
use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::debug;

/// Port on which the relay expects implicit TLS
const IMPLICIT_TLS_PORT: u16 = 465;

/// Somewhere a finished email can be sent
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    fn channel_name(&self) -> &str;

    async fn deliver(&self, email: &OutgoingEmail) -> Result<(), AlertError>;
}

/// Sends through an authenticated SMTP relay
pub struct SmtpChannel {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    receiver: Mailbox,
}

impl SmtpChannel {
    pub fn new(config: &EmailConfig) -> Result<Self, AlertError> {
        let sender: Mailbox = config.sender.parse()?;
        let receiver: Mailbox = config.receiver.parse()?;

        let builder = if config.smtp_port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
        };

        let transport = builder
            .port(config.smtp_port)
            // Login with the bare address even when the sender has a display name
            .credentials(Credentials::new(
                sender.email.to_string(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            sender,
            receiver,
        })
    }

    /// Build the MIME message without sending it.
    pub fn build_message(&self, email: &OutgoingEmail) -> Result<Message, AlertError> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(self.receiver.clone())
            .subject(email.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                email.html.clone(),
            ))?;
        Ok(message)
    }
}

#[async_trait]
impl DeliveryChannel for SmtpChannel {
    fn channel_name(&self) -> &str {
        "smtp"
    }

    async fn deliver(&self, email: &OutgoingEmail) -> Result<(), AlertError> {
        let message = self.build_message(email)?;
        let response = self.transport.send(message).await?;
        debug!("SMTP response: {:?}", response.code());
        Ok(())
    }
}
