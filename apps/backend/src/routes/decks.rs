//! Deck endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{DeckResponse, TextRequest};
use crate::routes::parse_request;
use crate::AppState;

/// POST /api/decks/parse
/// Expands an annotated text into its full card deck
pub async fn parse(
    State(state): State<AppState>,
    Json(payload): Json<TextRequest>,
) -> Result<Json<DeckResponse>> {
    let deck = parse_request(&state, &payload)?;
    let len = deck.len();

    tracing::debug!("Parsed {} bytes into {} cards", payload.text.len(), len);

    Ok(Json(DeckResponse {
        cards: deck.into_cards(),
        len,
    }))
}
