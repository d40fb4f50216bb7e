//! Question repository
//!
//! Records pairwise ranking prompts shown to a user. No HTTP endpoint
//! writes questions yet; the table and repository back the ranking flow
//! the frontend is building toward.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Question record from the database
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: i64,
    pub prediction_id_a: i64,
    pub prediction_id_b: i64,
    pub askee: String,
    pub created_at: DateTime<Utc>,
    pub answered: bool,
    pub winner_prediction_id: Option<i64>,
}

/// Fields for a question insert
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub prediction_id_a: i64,
    pub prediction_id_b: i64,
    pub askee: String,
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a question, assigning id and created_at.
    /// Starts unanswered with no winner.
    pub async fn create(&self, new: NewQuestion) -> Result<Question, DbError> {
        let now = Utc::now();

        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (prediction_id_a, prediction_id_b, askee, created_at, answered, winner_prediction_id)
            VALUES (?, ?, ?, ?, 0, NULL)
            RETURNING id, prediction_id_a, prediction_id_b, askee, created_at, answered, winner_prediction_id
            "#,
        )
        .bind(new.prediction_id_a)
        .bind(new.prediction_id_b)
        .bind(&new.askee)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(question)
    }

    /// Get a single question by primary key.
    pub async fn get(&self, id: i64) -> Result<Question, DbError> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, prediction_id_a, prediction_id_b, askee, created_at, answered, winner_prediction_id
            FROM questions
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "question",
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn create_and_get_round_trip() {
        let pool = test_pool().await;
        let repo = QuestionRepo::new(&pool);

        let created = repo
            .create(NewQuestion {
                prediction_id_a: 1,
                prediction_id_b: 2,
                askee: "ada@example.com".into(),
            })
            .await
            .unwrap();

        assert!(created.id >= 1);
        assert!(!created.answered);
        assert_eq!(created.winner_prediction_id, None);

        let fetched = repo.get(created.id).await.unwrap();
        assert_eq!(fetched.prediction_id_a, 1);
        assert_eq!(fetched.prediction_id_b, 2);
        assert_eq!(fetched.askee, "ada@example.com");
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = QuestionRepo::new(&pool);

        let err = repo.get(42).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "question", .. }));
    }
}
