//! Repository implementations for database access
//!
//! Each repository borrows the pool and exposes the queries one endpoint
//! needs. Aggregations (summary, stats) are pushed down to SQL.

pub mod predictions;
pub mod questions;

pub use predictions::{CreatedBucket, DbError, NewPrediction, Prediction, PredictionRepo, StatusSummary};
pub use questions::{NewQuestion, Question, QuestionRepo};
