//! Ranking question endpoint (stub)
//!
//! Returns the lowest-elo prediction in both slots of the pair. The
//! deployed behavior pairs the record with itself; a real matchup (two
//! distinct records) is deliberately not introduced here until the
//! product decides what the pairing rule should be.

use axum::{extract::State, routing::get, Json, Router};

use super::predictions::PredictionResponse;
use crate::db::repos::PredictionRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// GET /rankings/question - pair of predictions to rank
async fn get_ranking_question(
    State(state): State<AppState>,
) -> Result<Json<(PredictionResponse, PredictionResponse)>, ApiError> {
    let mut predictions = PredictionRepo::new(&state.pool).list().await?;
    predictions.sort_by_key(|p| p.elo);

    let lowest = predictions.into_iter().next().ok_or(ApiError::Internal {
        message: "no predictions available for ranking".into(),
    })?;

    let response = PredictionResponse::redacted(lowest);
    Ok(Json((response.clone(), response)))
}

/// Ranking routes
pub fn router() -> Router<AppState> {
    Router::new().route("/rankings/question", get(get_ranking_question))
}
