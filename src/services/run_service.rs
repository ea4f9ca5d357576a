use crate::domain::{Article, Notification};
use crate::errors::{FeedwatchError, FeedwatchResult};
use crate::feed::FeedFetcher;
use crate::notify::NotifierRegistry;
use crate::storage::traits::SeenRepository;

/// Per-article outcome of one fetch-and-notify pass.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Titles notified and recorded, in send order
    pub notified: Vec<String>,
    /// Articles skipped because they were already recorded
    pub skipped: usize,
    /// Articles whose delivery failed; these were not recorded and will be
    /// re-attempted on the next run
    pub failures: Vec<(String, FeedwatchError)>,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct RunService<F: FeedFetcher, S: SeenRepository> {
    fetcher: F,
    seen: S,
    registry: NotifierRegistry,
    feed_title: String,
}

impl<F: FeedFetcher, S: SeenRepository> RunService<F, S> {
    pub fn new(fetcher: F, seen: S, registry: NotifierRegistry, feed_title: &str) -> Self {
        Self {
            fetcher,
            seen,
            registry,
            feed_title: feed_title.to_string(),
        }
    }

    /// One pass: fetch, then for each article in feed order skip if already
    /// recorded, otherwise deliver through every channel and record on
    /// success. A failed delivery is collected and the pass continues.
    pub fn run(&self) -> FeedwatchResult<RunSummary> {
        let articles = self.fetcher.fetch()?;
        let mut summary = RunSummary::default();

        for article in articles {
            if self.seen.exists(&article.title, article.date_key())? {
                summary.skipped += 1;
                continue;
            }

            let notification = Notification::from_article(&self.feed_title, &article);

            match self.registry.notify(&notification) {
                Ok(()) => match self.seen.record(&article.title, article.date_key()) {
                    Ok(_) => summary.notified.push(article.title),
                    Err(e) => {
                        // The article was sent but could not be recorded, so
                        // the next run will notify it again.
                        eprintln!("Error recording {}: {}", article.title, e);
                        return Err(e);
                    }
                },
                Err(e) => {
                    summary.failures.push((article.title, e));
                }
            }
        }

        Ok(summary)
    }

    /// Fetch and return the articles a run would notify, without sending or
    /// recording anything.
    pub fn pending(&self) -> FeedwatchResult<Vec<Article>> {
        let articles = self.fetcher.fetch()?;
        let mut pending = Vec::new();

        for article in articles {
            if !self.seen.exists(&article.title, article.date_key())? {
                pending.push(article);
            }
        }

        Ok(pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::feed::fetcher::MockFeedFetcher;
    use crate::notify::Notifier;
    use crate::storage::sqlite::{SqliteSeenRepository, SqliteStorage};

    /// Records delivered titles; fails any title it was told to reject.
    struct ScriptedNotifier {
        sent: Arc<Mutex<Vec<String>>>,
        fail_on: Option<String>,
    }

    impl Notifier for ScriptedNotifier {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn notify(&self, notification: &Notification) -> FeedwatchResult<()> {
            if self.fail_on.as_deref() == Some(notification.article_title.as_str()) {
                return Err(FeedwatchError::TelegramSend("boom".to_string()));
            }
            self.sent
                .lock()
                .unwrap()
                .push(notification.article_title.clone());
            Ok(())
        }
    }

    fn articles_abc() -> Vec<Article> {
        ["Article A", "Article B", "Article C"]
            .iter()
            .enumerate()
            .map(|(i, title)| {
                Article::new(title.to_string())
                    .with_url(Some(format!("https://example.com/{}", i)))
                    .with_published(Some(format!("2024-01-0{}T00:00:00+00:00", i + 1)))
            })
            .collect()
    }

    fn fetcher_returning(articles: Vec<Article>) -> MockFeedFetcher {
        let mut fetcher = MockFeedFetcher::new();
        fetcher.expect_fetch().returning(move || Ok(articles.clone()));
        fetcher
    }

    fn service_with(
        articles: Vec<Article>,
        fail_on: Option<&str>,
    ) -> (
        RunService<MockFeedFetcher, SqliteSeenRepository>,
        Arc<Mutex<Vec<String>>>,
        SqliteStorage,
    ) {
        let storage = SqliteStorage::in_memory().unwrap();
        let seen = SqliteSeenRepository::new(storage.clone());

        let sent = Arc::new(Mutex::new(Vec::new()));
        let mut registry = NotifierRegistry::new();
        registry.register(Box::new(ScriptedNotifier {
            sent: sent.clone(),
            fail_on: fail_on.map(str::to_string),
        }));

        let service = RunService::new(fetcher_returning(articles), seen, registry, "Example");
        (service, sent, storage)
    }

    #[test]
    fn test_all_new_articles_notified_in_feed_order() {
        let (service, sent, _) = service_with(articles_abc(), None);

        let summary = service.run().unwrap();

        assert_eq!(summary.notified, vec!["Article A", "Article B", "Article C"]);
        assert_eq!(summary.skipped, 0);
        assert!(summary.is_clean());
        assert_eq!(*sent.lock().unwrap(), vec!["Article A", "Article B", "Article C"]);
    }

    #[test]
    fn test_failed_article_not_recorded_and_run_continues() {
        let (service, sent, storage) = service_with(articles_abc(), Some("Article B"));

        let summary = service.run().unwrap();

        assert_eq!(summary.notified, vec!["Article A", "Article C"]);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].0, "Article B");
        assert_eq!(*sent.lock().unwrap(), vec!["Article A", "Article C"]);

        // A and C recorded, B not
        let seen = SqliteSeenRepository::new(storage);
        assert!(seen.exists("Article A", "2024-01-01T00:00:00+00:00").unwrap());
        assert!(!seen.exists("Article B", "2024-01-02T00:00:00+00:00").unwrap());
        assert!(seen.exists("Article C", "2024-01-03T00:00:00+00:00").unwrap());
    }

    #[test]
    fn test_next_run_reattempts_only_the_failed_article() {
        let storage = SqliteStorage::in_memory().unwrap();

        // First run: B fails
        let sent1 = Arc::new(Mutex::new(Vec::new()));
        let mut registry1 = NotifierRegistry::new();
        registry1.register(Box::new(ScriptedNotifier {
            sent: sent1.clone(),
            fail_on: Some("Article B".to_string()),
        }));
        let service1 = RunService::new(
            fetcher_returning(articles_abc()),
            SqliteSeenRepository::new(storage.clone()),
            registry1,
            "Example",
        );
        service1.run().unwrap();

        // Second run over the same feed content: everything works
        let sent2 = Arc::new(Mutex::new(Vec::new()));
        let mut registry2 = NotifierRegistry::new();
        registry2.register(Box::new(ScriptedNotifier {
            sent: sent2.clone(),
            fail_on: None,
        }));
        let service2 = RunService::new(
            fetcher_returning(articles_abc()),
            SqliteSeenRepository::new(storage),
            registry2,
            "Example",
        );
        let summary = service2.run().unwrap();

        assert_eq!(summary.notified, vec!["Article B"]);
        assert_eq!(summary.skipped, 2);
        assert_eq!(*sent2.lock().unwrap(), vec!["Article B"]);
    }

    #[test]
    fn test_second_run_with_same_content_notifies_nothing() {
        let storage = SqliteStorage::in_memory().unwrap();

        for expected_notified in [3usize, 0] {
            let sent = Arc::new(Mutex::new(Vec::new()));
            let mut registry = NotifierRegistry::new();
            registry.register(Box::new(ScriptedNotifier {
                sent,
                fail_on: None,
            }));
            let service = RunService::new(
                fetcher_returning(articles_abc()),
                SqliteSeenRepository::new(storage.clone()),
                registry,
                "Example",
            );

            let summary = service.run().unwrap();
            assert_eq!(summary.notified.len(), expected_notified);
        }
    }

    #[test]
    fn test_same_title_different_date_is_a_new_article() {
        let storage = SqliteStorage::in_memory().unwrap();
        let seen = SqliteSeenRepository::new(storage.clone());
        seen.record("Article A", "2024-01-01T00:00:00+00:00").unwrap();

        let articles = vec![Article::new("Article A".to_string())
            .with_published(Some("2024-02-01T00:00:00+00:00".to_string()))];

        let sent = Arc::new(Mutex::new(Vec::new()));
        let mut registry = NotifierRegistry::new();
        registry.register(Box::new(ScriptedNotifier {
            sent: sent.clone(),
            fail_on: None,
        }));
        let service = RunService::new(
            fetcher_returning(articles),
            SqliteSeenRepository::new(storage),
            registry,
            "Example",
        );

        let summary = service.run().unwrap();

        assert_eq!(summary.notified, vec!["Article A"]);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn test_empty_feed_writes_and_sends_nothing() {
        let (service, sent, storage) = service_with(Vec::new(), None);

        let summary = service.run().unwrap();

        assert!(summary.notified.is_empty());
        assert_eq!(summary.skipped, 0);
        assert!(summary.is_clean());
        assert!(sent.lock().unwrap().is_empty());

        let seen = SqliteSeenRepository::new(storage);
        assert!(seen.recent(10).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_failure_aborts_the_run() {
        let mut fetcher = MockFeedFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|| Err(FeedwatchError::FeedParse("bad payload".to_string())));

        let storage = SqliteStorage::in_memory().unwrap();
        let service = RunService::new(
            fetcher,
            SqliteSeenRepository::new(storage),
            NotifierRegistry::new(),
            "Example",
        );

        assert!(matches!(service.run(), Err(FeedwatchError::FeedParse(_))));
    }

    #[test]
    fn test_pending_lists_without_recording() {
        let (service, sent, storage) = service_with(articles_abc(), None);

        let pending = service.pending().unwrap();

        assert_eq!(pending.len(), 3);
        assert!(sent.lock().unwrap().is_empty());
        let seen = SqliteSeenRepository::new(storage);
        assert!(seen.recent(10).unwrap().is_empty());
    }
}
