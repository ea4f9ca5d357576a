use crate::domain::SeenArticle;
use crate::errors::FeedwatchResult;
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::SeenRepository;

pub struct SqliteSeenRepository {
    storage: SqliteStorage,
}

impl SqliteSeenRepository {
    pub fn new(storage: SqliteStorage) -> Self {
        Self { storage }
    }
}

impl SeenRepository for SqliteSeenRepository {
    fn exists(&self, title: &str, date: &str) -> FeedwatchResult<bool> {
        let conn = self.storage.connection()?;
        let mut stmt = conn
            .prepare("SELECT EXISTS(SELECT 1 FROM seen_articles WHERE title = ?1 AND date = ?2)")?;
        let exists: bool = stmt.query_row((title, date), |row| row.get(0))?;
        Ok(exists)
    }

    fn record(&self, title: &str, date: &str) -> FeedwatchResult<bool> {
        let conn = self.storage.connection()?;
        // The UNIQUE(title, date) index arbitrates the claim; a second
        // insert of the same pair is a no-op reported to the caller.
        let changed = conn.execute(
            "INSERT OR IGNORE INTO seen_articles (title, date) VALUES (?1, ?2)",
            (title, date),
        )?;
        Ok(changed > 0)
    }

    fn recent(&self, limit: u32) -> FeedwatchResult<Vec<SeenArticle>> {
        let conn = self.storage.connection()?;
        let mut stmt = conn.prepare(
            "SELECT title, date, notified_at FROM seen_articles ORDER BY id DESC LIMIT ?1",
        )?;

        let entries = stmt.query_map([limit], |row| {
            Ok(SeenArticle {
                title: row.get(0)?,
                date: row.get(1)?,
                notified_at: row.get(2)?,
            })
        })?;

        entries
            .collect::<Result<Vec<_>, _>>()
            .map_err(crate::errors::FeedwatchError::from)
    }
}
