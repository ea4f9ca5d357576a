use super::Article;

#[derive(Debug, Clone)]
pub struct Notification {
    pub feed_title: String,
    pub article_title: String,
    pub url: Option<String>,
}

impl Notification {
    pub fn from_article(feed_title: &str, article: &Article) -> Self {
        Self {
            feed_title: feed_title.to_string(),
            article_title: article.title.clone(),
            url: article.url.clone(),
        }
    }

    /// Mail subject line.
    pub fn subject(&self) -> String {
        format!("New {} article available", self.feed_title)
    }

    /// Mail body text.
    pub fn body(&self) -> String {
        let mut message = format!(
            "Hi, there is a new {} article: {}.",
            self.feed_title, self.article_title
        );

        if let Some(url) = &self.url {
            message.push_str("\nYou can read it here ");
            message.push_str(url);
        }

        message
    }

    /// Format: "New {feedTitle} article: {articleTitle} {url (if any)}"
    /// One-line form used for chat channels and console output.
    pub fn format(&self) -> String {
        let mut message = format!("New {} article: {}", self.feed_title, self.article_title);

        if let Some(url) = &self.url {
            message.push(' ');
            message.push_str(url);
        }

        message
    }
}
