use std::time::Duration;

use chrono::{DateTime, Utc};
use feed_rs::parser;
use reqwest::blocking::Client;

use crate::domain::Article;
use crate::errors::{FeedwatchError, FeedwatchResult};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[cfg_attr(test, mockall::automock)]
pub trait FeedFetcher: Send + Sync {
    /// Retrieve the feed and return its articles in feed order.
    fn fetch(&self) -> FeedwatchResult<Vec<Article>>;
}

pub struct RssFetcher {
    client: Client,
    feed_url: String,
}

impl RssFetcher {
    pub fn new(feed_url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            feed_url: feed_url.to_string(),
        }
    }

    fn parse_articles(bytes: &[u8]) -> FeedwatchResult<Vec<Article>> {
        let parsed = parser::parse(bytes).map_err(|e| FeedwatchError::FeedParse(e.to_string()))?;

        let articles: Vec<Article> = parsed
            .entries
            .into_iter()
            .map(|entry| {
                let title = entry
                    .title
                    .map(|t| t.content)
                    .unwrap_or_else(|| "Untitled".to_string());

                let url = entry.links.into_iter().next().map(|l| l.href);

                let published: Option<DateTime<Utc>> = entry.published.or(entry.updated);

                Article::new(title)
                    .with_url(url)
                    .with_published(published.map(|dt| dt.to_rfc3339()))
            })
            .collect();

        Ok(articles)
    }
}

impl FeedFetcher for RssFetcher {
    fn fetch(&self) -> FeedwatchResult<Vec<Article>> {
        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(FeedwatchError::Fetch)?;
        let bytes = response.bytes().map_err(FeedwatchError::Fetch)?;

        Self::parse_articles(&bytes)
    }
}
