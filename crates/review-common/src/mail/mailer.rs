//! SMTP mail dispatch
//!
//! Delivery is best-effort and fire-and-forget: callers never observe a
//! failure, it is only logged. Without a configured SMTP host the mailer
//! logs the message instead, which is enough for development.

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, error, warn};

use crate::config::MailConfig;
use crate::error::AppError;

/// Fire-and-forget mail dispatcher
#[derive(Clone)]
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: Mailbox,
}

impl Mailer {
    /// Build a mailer from configuration.
    ///
    /// # Errors
    /// Returns an error if the from-address or SMTP relay is malformed.
    pub fn from_config(config: &MailConfig) -> Result<Self, AppError> {
        let from: Mailbox = config
            .from_address
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid from address: {}", config.from_address)))?;

        let transport = match &config.smtp_host {
            Some(host) => {
                let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                    .map_err(|e| AppError::Config(format!("Invalid SMTP relay {host}: {e}")))?
                    .port(config.smtp_port);

                if let (Some(username), Some(password)) =
                    (&config.smtp_username, &config.smtp_password)
                {
                    builder = builder
                        .credentials(Credentials::new(username.clone(), password.clone()));
                }

                Some(builder.build())
            }
            None => {
                warn!("No SMTP host configured; outgoing mail will only be logged");
                None
            }
        };

        Ok(Self { transport, from })
    }

    /// Create a log-only mailer (used in tests)
    #[must_use]
    pub fn log_only(from: Mailbox) -> Self {
        Self {
            transport: None,
            from,
        }
    }

    /// Send a message in the background.
    ///
    /// Returns immediately; delivery failures are logged, never surfaced.
    pub fn send(&self, recipient: &str, subject: &str, body: &str) {
        let Ok(to) = recipient.parse::<Mailbox>() else {
            warn!(recipient, "Dropping mail to unparsable recipient address");
            return;
        };

        let Some(transport) = self.transport.clone() else {
            debug!(recipient, subject, body, "Mail dispatch (log only)");
            return;
        };

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .body(body.to_string());

        let message = match message {
            Ok(m) => m,
            Err(e) => {
                error!(error = %e, recipient, "Failed to build mail message");
                return;
            }
        };

        let recipient = recipient.to_string();
        tokio::spawn(async move {
            if let Err(e) = transport.send(message).await {
                error!(error = %e, recipient = %recipient, "Mail delivery failed");
            } else {
                debug!(recipient = %recipient, "Mail delivered");
            }
        });
    }
}

impl std::fmt::Debug for Mailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mailer")
            .field("from", &self.from.to_string())
            .field("smtp", &self.transport.is_some())
            .finish()
    }
}
