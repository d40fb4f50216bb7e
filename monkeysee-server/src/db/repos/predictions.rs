//! Prediction repository
//!
//! Handles prediction inserts, reads, and the two aggregate queries:
//! - summary: total plus per-status bucket counts
//! - stats: per-second histogram of creation timestamps

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use crate::models::{AuthorName, Elo, PredictionContent, PredictionStatus};

/// Prediction record from the database.
///
/// `status` stays a plain string here; the validation boundary is at
/// construction time, and rows written outside the API (or by older
/// versions) must still be readable.
#[derive(Debug, Clone, FromRow)]
pub struct Prediction {
    pub id: i64,
    pub content: String,
    pub author_name: String,
    pub elo: i64,
    pub status: String,
    pub outcome: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields for a prediction insert
#[derive(Debug, Clone)]
pub struct NewPrediction {
    pub content: PredictionContent,
    pub author_name: AuthorName,
    pub elo: Elo,
}

/// Status bucket counts for GET /predictions/summary.
///
/// `total` counts every row; the buckets only count the three known
/// statuses, so a row carrying an out-of-set status value inflates
/// `total` without landing in any bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub total: i64,
    pub open: i64,
    pub resolved: i64,
    pub archived: i64,
}

/// One per-second histogram bucket for GET /predictions/stats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedBucket {
    pub datetime: String,
    pub count: i64,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Prediction repository
pub struct PredictionRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PredictionRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a prediction, assigning id and timestamps.
    ///
    /// Status starts as "open", outcome as NULL, and created_at equals
    /// updated_at (both the same instant, taken once).
    pub async fn create(&self, new: NewPrediction) -> Result<Prediction, DbError> {
        let now = Utc::now();

        let prediction = sqlx::query_as::<_, Prediction>(
            r#"
            INSERT INTO predictions (content, author_name, elo, status, outcome, created_at, updated_at)
            VALUES (?, ?, ?, ?, NULL, ?, ?)
            RETURNING id, content, author_name, elo, status, outcome, created_at, updated_at
            "#,
        )
        .bind(new.content.as_str())
        .bind(new.author_name.as_str())
        .bind(new.elo.value())
        .bind(PredictionStatus::default().as_str())
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(prediction)
    }

    /// List all predictions ordered by creation time, oldest first.
    /// No pagination.
    pub async fn list(&self) -> Result<Vec<Prediction>, DbError> {
        let predictions = sqlx::query_as::<_, Prediction>(
            r#"
            SELECT id, content, author_name, elo, status, outcome, created_at, updated_at
            FROM predictions
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(predictions)
    }

    /// Get a single prediction by primary key.
    pub async fn get(&self, id: i64) -> Result<Prediction, DbError> {
        sqlx::query_as::<_, Prediction>(
            r#"
            SELECT id, content, author_name, elo, status, outcome, created_at, updated_at
            FROM predictions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "prediction",
            id: id.to_string(),
        })
    }

    /// Count rows overall and per status bucket.
    ///
    /// Unknown status values are dropped from the buckets but still count
    /// toward the total.
    pub async fn summary(&self) -> Result<StatusSummary, DbError> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM predictions")
            .fetch_one(self.pool)
            .await?;

        let counts: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM predictions GROUP BY status")
                .fetch_all(self.pool)
                .await?;

        let mut summary = StatusSummary {
            total,
            ..StatusSummary::default()
        };
        for (status, count) in counts {
            match status.as_str() {
                "open" => summary.open = count,
                "resolved" => summary.resolved = count,
                "archived" => summary.archived = count,
                _ => {}
            }
        }

        Ok(summary)
    }

    /// Histogram of creation timestamps truncated to whole seconds.
    ///
    /// Buckets come back sorted ascending by the formatted string. The
    /// granularity is seconds, not hours; the format string is load-bearing.
    pub async fn stats(&self) -> Result<Vec<CreatedBucket>, DbError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT strftime('%Y-%m-%d %H:%M:%S', created_at) AS datetime, COUNT(*) AS count
            FROM predictions
            GROUP BY strftime('%Y-%m-%d %H:%M:%S', created_at)
            ORDER BY datetime ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(datetime, count)| CreatedBucket { datetime, count })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn new_prediction(content: &str, author: &str, elo: i64) -> NewPrediction {
        NewPrediction {
            content: PredictionContent::new(content).unwrap(),
            author_name: AuthorName::new(author),
            elo: Elo::new(elo).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_assigns_defaults() {
        let pool = test_pool().await;
        let repo = PredictionRepo::new(&pool);

        let p = repo
            .create(new_prediction("it will rain tomorrow", "Ada", 100))
            .await
            .unwrap();

        assert!(p.id >= 1);
        assert_eq!(p.status, "open");
        assert_eq!(p.outcome, None);
        assert_eq!(p.elo, 100);
        assert_eq!(p.author_name, "Ada");
        assert_eq!(p.created_at, p.updated_at);
    }

    #[tokio::test]
    async fn list_orders_by_created_at_ascending() {
        let pool = test_pool().await;
        let repo = PredictionRepo::new(&pool);

        // Force distinct timestamps so the ordering is unambiguous
        for (i, ts) in ["2024-01-02 00:00:00", "2024-01-01 00:00:00", "2024-01-03 00:00:00"]
            .into_iter()
            .enumerate()
        {
            sqlx::query(
                "INSERT INTO predictions (content, author_name, elo, status, created_at, updated_at)
                 VALUES (?, 'x', 800, 'open', ?, ?)",
            )
            .bind(format!("prediction {}", i))
            .bind(ts)
            .bind(ts)
            .execute(&pool)
            .await
            .unwrap();
        }

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 3);
        assert!(listed.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = PredictionRepo::new(&pool);

        let err = repo.get(999_999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "prediction", .. }));
    }

    #[tokio::test]
    async fn summary_counts_buckets() {
        let pool = test_pool().await;
        let repo = PredictionRepo::new(&pool);

        for i in 0..3 {
            repo.create(new_prediction(&format!("p{}", i), "x", 800))
                .await
                .unwrap();
        }
        sqlx::query("UPDATE predictions SET status = 'resolved' WHERE id = 1")
            .execute(&pool)
            .await
            .unwrap();

        let s = repo.summary().await.unwrap();
        assert_eq!(s.total, 3);
        assert_eq!(s.open, 2);
        assert_eq!(s.resolved, 1);
        assert_eq!(s.archived, 0);
    }

    #[tokio::test]
    async fn summary_drops_unknown_status_from_buckets() {
        let pool = test_pool().await;
        let repo = PredictionRepo::new(&pool);

        repo.create(new_prediction("known", "x", 800)).await.unwrap();

        // Bypass validation: statuses are only checked at the API boundary
        sqlx::query(
            "INSERT INTO predictions (content, author_name, elo, status, created_at, updated_at)
             VALUES ('rogue', 'x', 800, 'pending', '2024-01-01 00:00:00', '2024-01-01 00:00:00')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let s = repo.summary().await.unwrap();
        assert_eq!(s.total, 2);
        assert_eq!(s.open + s.resolved + s.archived, 1);
        assert!(s.total > s.open + s.resolved + s.archived);
    }

    #[tokio::test]
    async fn stats_buckets_by_second_sorted_ascending() {
        let pool = test_pool().await;
        let repo = PredictionRepo::new(&pool);

        for ts in [
            "2024-06-01 10:00:05",
            "2024-06-01 10:00:05",
            "2024-06-01 09:59:59",
        ] {
            sqlx::query(
                "INSERT INTO predictions (content, author_name, elo, status, created_at, updated_at)
                 VALUES ('p', 'x', 800, 'open', ?, ?)",
            )
            .bind(ts)
            .bind(ts)
            .execute(&pool)
            .await
            .unwrap();
        }

        let buckets = repo.stats().await.unwrap();
        assert_eq!(
            buckets,
            vec![
                CreatedBucket {
                    datetime: "2024-06-01 09:59:59".into(),
                    count: 1
                },
                CreatedBucket {
                    datetime: "2024-06-01 10:00:05".into(),
                    count: 2
                },
            ]
        );
    }

    #[tokio::test]
    async fn stats_truncates_subsecond_precision() {
        let pool = test_pool().await;
        let repo = PredictionRepo::new(&pool);

        // Two inserts in (almost certainly) the same second land in one bucket;
        // either way each bucket count matches rows truncating to that second.
        repo.create(new_prediction("a", "x", 800)).await.unwrap();
        repo.create(new_prediction("b", "x", 800)).await.unwrap();

        let buckets = repo.stats().await.unwrap();
        let total: i64 = buckets.iter().map(|bkt| bkt.count).sum();
        assert_eq!(total, 2);
        for bucket in &buckets {
            // Formatted string is second-granular: no fractional part
            assert_eq!(bucket.datetime.len(), "YYYY-MM-DD HH:MM:SS".len());
        }
    }
}
