use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::HistoryEntry;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct RecordVisitRequest {
    pub user_id: Uuid,
    pub path: String,
}

#[derive(Serialize)]
pub struct RecordVisitResponse {
    pub recorded: bool,
}

/// GET /api/v1/history?user_id=
pub async fn handle_list_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    Ok(Json(state.history.list(params.user_id).await?))
}

/// POST /api/v1/history
pub async fn handle_record_visit(
    State(state): State<AppState>,
    Json(req): Json<RecordVisitRequest>,
) -> Result<Json<RecordVisitResponse>, AppError> {
    let path = req.path.trim();
    if !path.starts_with('/') {
        return Err(AppError::Validation(format!(
            "path must start with '/', got '{path}'"
        )));
    }
    let recorded = state.history.record_visit(req.user_id, path).await?;
    Ok(Json(RecordVisitResponse { recorded }))
}

/// DELETE /api/v1/history?user_id=
pub async fn handle_clear_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryQuery>,
) -> Result<StatusCode, AppError> {
    state.history.clear(params.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
