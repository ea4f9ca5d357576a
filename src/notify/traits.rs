use crate::domain::Notification;
use crate::errors::FeedwatchResult;

/// A channel capable of delivering one notification to a human.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    /// Channel name used in output and errors
    fn name(&self) -> &'static str;

    /// Deliver one notification. Blocks until sent or failed.
    fn notify(&self, notification: &Notification) -> FeedwatchResult<()>;
}
