//! Prediction endpoints: create, list, get, summary, stats

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{CreatedBucket, NewPrediction, Prediction, PredictionRepo, StatusSummary};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{AuthorName, Elo, PredictionContent, REDACTED_AUTHOR};

/// Create prediction request
#[derive(Deserialize)]
pub struct CreatePredictionRequest {
    pub content: String,
    pub author_name: String,
    pub elo: Option<i64>,
}

/// Prediction response
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub id: i64,
    pub content: String,
    pub author_name: String,
    pub elo: i64,
    pub status: String,
    pub outcome: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Prediction> for PredictionResponse {
    fn from(p: Prediction) -> Self {
        Self {
            id: p.id,
            content: p.content,
            author_name: p.author_name,
            elo: p.elo,
            status: p.status,
            outcome: p.outcome,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

impl PredictionResponse {
    /// Convert with the author name overwritten by the redaction
    /// placeholder. Response shaping only; the stored row keeps the
    /// real value.
    pub fn redacted(p: Prediction) -> Self {
        let mut response = Self::from(p);
        response.author_name = REDACTED_AUTHOR.to_owned();
        response
    }
}

/// Summary response: total row count plus per-status buckets
#[derive(Serialize)]
pub struct SummaryResponse {
    pub total: i64,
    pub open: i64,
    pub resolved: i64,
    pub archived: i64,
}

impl From<StatusSummary> for SummaryResponse {
    fn from(s: StatusSummary) -> Self {
        Self {
            total: s.total,
            open: s.open,
            resolved: s.resolved,
            archived: s.archived,
        }
    }
}

/// One stats histogram bucket
#[derive(Serialize)]
pub struct StatsBucketResponse {
    pub datetime: String,
    pub count: i64,
}

impl From<CreatedBucket> for StatsBucketResponse {
    fn from(b: CreatedBucket) -> Self {
        Self {
            datetime: b.datetime,
            count: b.count,
        }
    }
}

/// POST /predictions - create a new prediction
///
/// The created record is returned unredacted; only reads redact.
async fn create_prediction(
    State(state): State<AppState>,
    Json(req): Json<CreatePredictionRequest>,
) -> Result<(StatusCode, Json<PredictionResponse>), ApiError> {
    let content = PredictionContent::new(&req.content)?;
    let author_name = AuthorName::new(&req.author_name);
    let elo = match req.elo {
        Some(value) => Elo::new(value)?,
        None => Elo::default(),
    };

    let prediction = PredictionRepo::new(&state.pool)
        .create(NewPrediction {
            content,
            author_name,
            elo,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(PredictionResponse::from(prediction))))
}

/// GET /predictions - list all predictions, oldest first, authors redacted
async fn list_predictions(
    State(state): State<AppState>,
) -> Result<Json<Vec<PredictionResponse>>, ApiError> {
    let predictions = PredictionRepo::new(&state.pool).list().await?;

    Ok(Json(
        predictions
            .into_iter()
            .map(PredictionResponse::redacted)
            .collect(),
    ))
}

/// GET /predictions/{id} - get a single prediction, author redacted
async fn get_prediction(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let prediction = PredictionRepo::new(&state.pool).get(id).await?;
    Ok(Json(PredictionResponse::redacted(prediction)))
}

/// GET /predictions/summary - total plus per-status bucket counts
async fn prediction_summary(
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let summary = PredictionRepo::new(&state.pool).summary().await?;
    Ok(Json(SummaryResponse::from(summary)))
}

/// GET /predictions/stats - per-second creation histogram
async fn prediction_stats(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatsBucketResponse>>, ApiError> {
    let buckets = PredictionRepo::new(&state.pool).stats().await?;
    Ok(Json(
        buckets.into_iter().map(StatsBucketResponse::from).collect(),
    ))
}

/// Prediction routes
///
/// `summary` and `stats` are static segments; axum prefers them over the
/// `{id}` capture at the same position.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/predictions", get(list_predictions).post(create_prediction))
        .route("/predictions/summary", get(prediction_summary))
        .route("/predictions/stats", get(prediction_stats))
        .route("/predictions/{id}", get(get_prediction))
}
