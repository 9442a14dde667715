//! Core types for reading drills.

use serde::{Deserialize, Serialize};

/// Upper bound for any inline repetition count.
pub const MAX_REPETITIONS: usize = 1000;

/// Position within a counted sequence (0-based index out of `count`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub index: usize,
    pub count: usize,
}

impl Progress {
    pub fn new(index: usize, count: usize) -> Self {
        Self { index, count }
    }

    /// Human-readable fraction, 1-based: `"2/3"`.
    pub fn label(&self) -> String {
        format!("{}/{}", self.index + 1, self.count)
    }
}

/// One `>>...<<` block with its repetition count already applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainSegment {
    pub text: String,
    pub repetition_count: usize,
}

/// One unit of the deck: optional main text paired with optional sub text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_text: Option<String>,
    /// Which repetition of the main segment this card belongs to.
    pub main_progress: Progress,
    /// Position within the current run of identical sub segments.
    /// Absent on main-only cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_progress: Option<Progress>,
    /// Flat position across every card emitted for the block.
    pub secondary_progress: Progress,
}

impl Card {
    /// The card used when the text contains no markers at all.
    pub fn plain(text: &str) -> Self {
        Self {
            main_text: None,
            sub_text: Some(text.to_string()),
            main_progress: Progress::new(0, 1),
            sub_progress: Some(Progress::new(0, 1)),
            secondary_progress: Progress::new(0, 1),
        }
    }

    /// Main text, treating absent and empty the same way.
    pub fn has_main_text(&self) -> bool {
        self.main_text.as_deref().is_some_and(|t| !t.is_empty())
    }

    pub fn has_sub_text(&self) -> bool {
        self.sub_text.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Navigation events a reader can issue against a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationAction {
    NextCard,
    PrevCard,
    NextMain,
    PrevMain,
    GoTo(usize),
}
