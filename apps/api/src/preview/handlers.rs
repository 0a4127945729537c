//! Axum route handlers for the Preview API.

use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::letter::handlers::today;
use crate::letter::models::LetterRequest;
use crate::preview::hub::PreviewSnapshot;
use crate::preview::{render_preview, PreviewRender};
use crate::state::AppState;

/// Long-poll ceiling for `GET /api/v1/preview/sessions/:id?after=N`.
const MAX_WAIT_MS: u64 = 30_000;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreated {
    pub session_id: Uuid,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotQuery {
    /// Wait for a revision newer than this one.
    pub after: Option<u64>,
    pub wait_ms: Option<u64>,
}

/// POST /api/v1/letters/preview
///
/// Renders immediately. Partial forms render with placeholders; never validates.
pub async fn handle_preview(Json(request): Json<LetterRequest>) -> Json<PreviewRender> {
    let request = request.with_issue_date_or(today());
    Json(render_preview(&request))
}

/// POST /api/v1/preview/sessions
pub async fn handle_open_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionCreated>), AppError> {
    let session_id = state.previews.open().await?;
    Ok((StatusCode::CREATED, Json(SessionCreated { session_id })))
}

/// PUT /api/v1/preview/sessions/:id
///
/// Accepted, not rendered: the render happens once input goes quiet.
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<LetterRequest>,
) -> Result<StatusCode, AppError> {
    let request = request.with_issue_date_or(today());
    state.previews.submit(session_id, request).await?;
    Ok(StatusCode::ACCEPTED)
}

/// GET /api/v1/preview/sessions/:id
pub async fn handle_snapshot(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<SnapshotQuery>,
) -> Result<Json<PreviewSnapshot>, AppError> {
    let wait = Duration::from_millis(query.wait_ms.unwrap_or(MAX_WAIT_MS).min(MAX_WAIT_MS));
    let snapshot = state.previews.snapshot(session_id, query.after, wait).await?;
    Ok(Json(snapshot))
}

/// DELETE /api/v1/preview/sessions/:id
pub async fn handle_close_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.previews.close(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
