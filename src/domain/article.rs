use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: Option<String>,
    pub published: Option<String>,
}

impl Article {
    pub fn new(title: String) -> Self {
        Self {
            title,
            url: None,
            published: None,
        }
    }

    /// Date half of the (title, date) dedup key. Entries without any
    /// timestamp all share the empty-string key.
    pub fn date_key(&self) -> &str {
        self.published.as_deref().unwrap_or("")
    }

    pub fn with_url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    pub fn with_published(mut self, published: Option<String>) -> Self {
        self.published = published;
        self
    }
}
