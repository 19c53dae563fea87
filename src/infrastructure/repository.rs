//! SQLite review repository

use crate::domain::review::{format_timestamp, parse_timestamp};
use crate::domain::{Review, Sentiment, SentimentStats};
use crate::error::{Result, ReviewError};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, TransactionBehavior};
use std::path::{Path, PathBuf};
use std::time::Duration;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    sentiment TEXT NOT NULL CHECK (sentiment IN ('neutral', 'positive', 'negative')),
    created_at TEXT NOT NULL
);";

/// How long a connection waits on a locked database before failing
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Abstract storage for reviews
pub trait ReviewRepository {
    /// Append a review and return it with its assigned id.
    /// The write is committed before this returns.
    fn insert(&self, text: &str, sentiment: Sentiment, created_at: DateTime<Utc>)
        -> Result<Review>;

    /// All reviews with the given sentiment, oldest first
    fn list_by_sentiment(&self, sentiment: Sentiment) -> Result<Vec<Review>>;

    /// Review totals per sentiment, read in one statement
    fn stats(&self) -> Result<SentimentStats>;
}

/// SQLite implementation of ReviewRepository.
///
/// Each operation opens its own connection and drops it on return, so one
/// repository can be shared between threads. SQLite serializes writers.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    path: PathBuf,
}

impl SqliteRepository {
    /// Open the database at `path`, creating the file and schema if missing
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let repository = SqliteRepository { path: path.into() };

        let conn = repository.connect()?;
        conn.execute_batch(SCHEMA)?;
        log::info!("Review schema ready at {}", repository.path.display());

        Ok(repository)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}

/// Raw column values of one `reviews` row
struct StoredRow {
    id: i64,
    text: String,
    sentiment: String,
    created_at: String,
}

impl StoredRow {
    fn into_review(self) -> Result<Review> {
        // Only reachable for tables created without the CHECK constraint
        let sentiment = self.sentiment.parse::<Sentiment>().map_err(|_| {
            ReviewError::Persistence(format!(
                "Review {} has unknown sentiment '{}'",
                self.id, self.sentiment
            ))
        })?;

        Ok(Review {
            id: self.id,
            text: self.text,
            sentiment,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

impl ReviewRepository for SqliteRepository {
    fn insert(
        &self,
        text: &str,
        sentiment: Sentiment,
        created_at: DateTime<Utc>,
    ) -> Result<Review> {
        let mut conn = self.connect()?;
        // Dropping the transaction on any early return rolls it back
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            "INSERT INTO reviews (text, sentiment, created_at) VALUES (?1, ?2, ?3)",
            params![text, sentiment.as_str(), format_timestamp(&created_at)],
        )?;

        let id = tx.last_insert_rowid();
        if id <= 0 {
            return Err(ReviewError::Persistence(
                "Database did not assign an id to the new review".to_string(),
            ));
        }

        tx.commit()?;
        log::debug!("Stored review {} as {}", id, sentiment);

        Ok(Review {
            id,
            text: text.to_string(),
            sentiment,
            created_at,
        })
    }

    fn list_by_sentiment(&self, sentiment: Sentiment) -> Result<Vec<Review>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, text, sentiment, created_at FROM reviews
             WHERE sentiment = ?1
             ORDER BY id",
        )?;

        let rows = stmt.query_map(params![sentiment.as_str()], |row| {
            Ok(StoredRow {
                id: row.get(0)?,
                text: row.get(1)?,
                sentiment: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?;

        let reviews = rows
            .map(|row| row.map_err(ReviewError::from).and_then(StoredRow::into_review))
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Found {} {} reviews", reviews.len(), sentiment);
        Ok(reviews)
    }

    fn stats(&self) -> Result<SentimentStats> {
        let conn = self.connect()?;
        let mut stmt =
            conn.prepare("SELECT sentiment, COUNT(*) FROM reviews GROUP BY sentiment")?;

        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut stats = SentimentStats::default();
        for row in rows {
            let (label, count) = row?;
            let sentiment = label.parse::<Sentiment>().map_err(|_| {
                ReviewError::Persistence(format!("Stored sentiment '{}' is unknown", label))
            })?;
            stats.set(sentiment, count as u64);
        }
        Ok(stats)
    }
}
