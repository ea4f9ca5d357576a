use serde::{Deserialize, Serialize};

/// A persisted (title, date) pair that has already been notified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeenArticle {
    pub title: String,
    pub date: String,
    pub notified_at: Option<String>,
}
