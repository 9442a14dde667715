//! Reading session endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use reading_core::ReadingSession;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{NavigateRequest, SessionResponse, TextRequest};
use crate::routes::parse_request;
use crate::AppState;

/// POST /api/sessions
/// Starts a reading session on the first card of the parsed text
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<TextRequest>,
) -> Result<(StatusCode, Json<SessionResponse>)> {
    let deck = parse_request(&state, &payload)?;
    let response = state.sessions.create(ReadingSession::new(deck)).await;

    tracing::info!(
        "Started session {} with {} cards",
        response.session_id,
        response.len
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/sessions/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    Ok(Json(state.sessions.get(id).await?))
}

/// POST /api/sessions/:id/navigate
pub async fn navigate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<NavigateRequest>,
) -> Result<Json<SessionResponse>> {
    let response = state.sessions.navigate(id, payload.action).await?;
    tracing::debug!(
        "Session {} {:?} -> {}",
        id,
        payload.action,
        response.position
    );
    Ok(Json(response))
}

/// DELETE /api/sessions/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    state.sessions.remove(id).await?;
    tracing::info!("Closed session {}", id);
    Ok(StatusCode::NO_CONTENT)
}
