use crate::config::Config;
use crate::domain::Notification;
use crate::errors::FeedwatchResult;
use crate::notify::email::EmailNotifier;
use crate::notify::telegram::TelegramNotifier;
use crate::notify::traits::Notifier;

/// The set of enabled notification channels. Channels are independent;
/// any combination can be active at once.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    pub fn new() -> Self {
        Self {
            notifiers: Vec::new(),
        }
    }

    /// Build the registry from configuration; a channel is enabled by the
    /// presence of its config section.
    pub fn from_config(config: &Config) -> FeedwatchResult<Self> {
        let mut registry = Self::new();

        if let Some(email) = &config.email {
            registry.register(Box::new(EmailNotifier::new(email)?));
        }

        if let Some(telegram) = &config.telegram {
            registry.register(Box::new(TelegramNotifier::new(telegram)?));
        }

        Ok(registry)
    }

    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    pub fn channel_names(&self) -> Vec<&'static str> {
        self.notifiers.iter().map(|n| n.name()).collect()
    }

    /// Deliver one notification through every channel, in registration
    /// order. The first failing channel aborts delivery of this
    /// notification; earlier channels have already sent.
    pub fn notify(&self, notification: &Notification) -> FeedwatchResult<()> {
        for notifier in &self.notifiers {
            notifier.notify(notification)?;
        }
        Ok(())
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EmailConfig, TelegramConfig};

    fn base_config() -> Config {
        Config {
            feed_url: "https://example.com/feed".to_string(),
            feed_title: "Example".to_string(),
            db_path: ":memory:".to_string(),
            email: None,
            telegram: None,
        }
    }

    #[test]
    fn test_no_channels_configured() {
        let registry = NotifierRegistry::from_config(&base_config()).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_both_channels_enabled_in_order() {
        let mut config = base_config();
        config.email = Some(EmailConfig {
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            username: "watcher".to_string(),
            password: "secret".to_string(),
            from: "watcher@example.com".to_string(),
            to: "reader@example.com".to_string(),
        });
        config.telegram = Some(TelegramConfig {
            bot_token: "123456:test-token".to_string(),
            chat_id: "-1000".to_string(),
            api_url: "https://api.telegram.org".to_string(),
        });

        let registry = NotifierRegistry::from_config(&config).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.channel_names(), vec!["email", "telegram"]);
    }

    #[test]
    fn test_telegram_only() {
        let mut config = base_config();
        config.telegram = Some(TelegramConfig {
            bot_token: "123456:test-token".to_string(),
            chat_id: "-1000".to_string(),
            api_url: "https://api.telegram.org".to_string(),
        });

        let registry = NotifierRegistry::from_config(&config).unwrap();

        assert_eq!(registry.channel_names(), vec!["telegram"]);
    }
}
