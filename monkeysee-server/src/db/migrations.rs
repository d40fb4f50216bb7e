//! Schema setup for the predictions and questions tables
//!
//! Create-if-absent only; there is no migration diffing. Safe to run on
//! every startup. Status membership is enforced at the validation
//! boundary, not as a CHECK constraint.

use sqlx::SqlitePool;

/// Create tables and indexes if they don't exist yet.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring database schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS predictions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT NOT NULL,
            author_name TEXT NOT NULL,
            elo INTEGER NOT NULL DEFAULT 800,
            status TEXT NOT NULL DEFAULT 'open',
            outcome TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            prediction_id_a INTEGER NOT NULL,
            prediction_id_b INTEGER NOT NULL,
            askee TEXT NOT NULL,
            created_at TEXT NOT NULL,
            answered INTEGER NOT NULL DEFAULT 0,
            winner_prediction_id INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_predictions_status ON predictions (status)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_predictions_created_at ON predictions (created_at)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_prediction_a ON questions (prediction_id_a)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_prediction_b ON questions (prediction_id_b)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_askee ON questions (askee)")
        .execute(pool)
        .await?;

    Ok(())
}
