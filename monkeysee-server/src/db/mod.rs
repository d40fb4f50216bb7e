//! Database layer - connection pool, schema setup, and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Idempotent CREATE TABLE IF NOT EXISTS schema, run once at startup
//! - Repositories borrow the pool; one repository call per handler step

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    // Single connection so every statement sees the same in-memory database
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    migrations::run(&pool).await.expect("migrations");
    pool
}
