//! API request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from reading-core
pub use reading_core::{Card, CardView, NavigationAction, PanelProgress, ParseOptions, Progress};

/// Body shared by deck parsing and session creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
    #[serde(default)]
    pub decode_entities: bool,
}

impl TextRequest {
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            decode_entities: self.decode_entities,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeckResponse {
    pub cards: Vec<Card>,
    pub len: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NavigateRequest {
    pub action: NavigationAction,
}

/// Current state of a reading session.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub position: usize,
    pub len: usize,
    pub card: Card,
    pub view: CardView,
}
