use std::time::Duration;

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use crate::config::EmailConfig;
use crate::domain::Notification;
use crate::errors::FeedwatchResult;
use crate::notify::traits::Notifier;

const SEND_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends one plain-text mail per article over an authenticated
/// STARTTLS submission session.
pub struct EmailNotifier {
    transport: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl EmailNotifier {
    pub fn new(config: &EmailConfig) -> FeedwatchResult<Self> {
        let transport = SmtpTransport::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(SEND_TIMEOUT))
            .build();

        Ok(Self {
            transport,
            from: config.from.parse()?,
            to: config.to.parse()?,
        })
    }

    fn build_message(&self, notification: &Notification) -> FeedwatchResult<Message> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(notification.subject())
            .body(notification.body())?;

        Ok(message)
    }
}

impl Notifier for EmailNotifier {
    fn name(&self) -> &'static str {
        "email"
    }

    fn notify(&self, notification: &Notification) -> FeedwatchResult<()> {
        let message = self.build_message(notification)?;
        self.transport.send(&message)?;
        Ok(())
    }
}
