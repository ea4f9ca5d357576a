use crate::domain::SeenArticle;
use crate::errors::FeedwatchResult;

#[cfg_attr(test, mockall::automock)]
pub trait SeenRepository: Send + Sync {
    /// True iff this exact (title, date) pair has already been notified.
    fn exists(&self, title: &str, date: &str) -> FeedwatchResult<bool>;

    /// Claim a (title, date) pair. Returns true when the pair was newly
    /// inserted, false when an earlier run already recorded it.
    fn record(&self, title: &str, date: &str) -> FeedwatchResult<bool>;

    /// Most recently notified entries, newest first.
    fn recent(&self, limit: u32) -> FeedwatchResult<Vec<SeenArticle>>;
}
