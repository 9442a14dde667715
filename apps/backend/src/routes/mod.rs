pub mod decks;
pub mod sessions;

use reading_core::{count_cards, parse_with, Deck};

use crate::error::{ApiError, Result};
use crate::models::TextRequest;
use crate::AppState;

/// Parse a request text after checking it against the configured size limits.
///
/// The deck size is counted before any card is built, so a short text with
/// large repetition counts is rejected without expanding it.
pub(crate) fn parse_request(state: &AppState, request: &TextRequest) -> Result<Deck> {
    let limit = state.config.max_text_bytes;
    if request.text.len() > limit {
        return Err(ApiError::PayloadTooLarge(format!(
            "text is {} bytes, limit is {}",
            request.text.len(),
            limit
        )));
    }

    let options = request.parse_options();
    let cards = count_cards(&request.text, options);
    let max_cards = state.config.max_cards;
    if cards > max_cards {
        tracing::warn!("Rejected text expanding to {} cards", cards);
        return Err(ApiError::PayloadTooLarge(format!(
            "text expands to {} cards, limit is {}",
            cards, max_cards
        )));
    }

    Ok(parse_with(&request.text, options))
}
