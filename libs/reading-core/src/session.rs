//! Reading session: a deck plus the reader's current position.

use serde::{Deserialize, Serialize};

use crate::deck::Deck;
use crate::error::{Result, SessionError};
use crate::types::{Card, NavigationAction};

/// Label and progress-bar values for one panel of the reading screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelProgress {
    /// Repetition fraction, e.g. `"2/3"`.
    pub label: String,
    pub bar_max: usize,
    pub bar_position: usize,
}

/// Everything a reading screen needs to lay out the current card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_panel: Option<PanelProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_panel: Option<PanelProgress>,
    pub show_main_text: bool,
    pub show_sub_text: bool,
    pub show_separator: bool,
    pub show_navigation: bool,
}

#[derive(Debug, Clone)]
pub struct ReadingSession {
    deck: Deck,
    position: usize,
}

impl ReadingSession {
    pub fn new(deck: Deck) -> Self {
        Self { deck, position: 0 }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn current(&self) -> &Card {
        &self.deck.cards()[self.position]
    }

    pub fn next_card(&mut self) -> usize {
        self.move_to(self.deck.next_card(self.position))
    }

    pub fn prev_card(&mut self) -> usize {
        self.move_to(self.deck.prev_card(self.position))
    }

    pub fn next_main(&mut self) -> usize {
        self.move_to(self.deck.next_distinct_main(self.position))
    }

    pub fn prev_main(&mut self) -> usize {
        self.move_to(self.deck.prev_distinct_main(self.position))
    }

    pub fn go_to(&mut self, index: usize) -> Result<usize> {
        if index >= self.deck.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.deck.len(),
            });
        }
        Ok(self.move_to(Some(index)))
    }

    pub fn apply(&mut self, action: NavigationAction) -> Result<usize> {
        match action {
            NavigationAction::NextCard => Ok(self.next_card()),
            NavigationAction::PrevCard => Ok(self.prev_card()),
            NavigationAction::NextMain => Ok(self.next_main()),
            NavigationAction::PrevMain => Ok(self.prev_main()),
            NavigationAction::GoTo(index) => self.go_to(index),
        }
    }

    /// Progress view of the current card.
    pub fn view(&self) -> CardView {
        let card = self.current();

        let main_panel = card.main_text.as_ref().map(|_| PanelProgress {
            label: card.main_progress.label(),
            bar_max: self.deck.last_index(),
            bar_position: self.position,
        });

        // Sub progress is always set alongside sub text.
        let sub_panel = card
            .sub_text
            .as_ref()
            .zip(card.sub_progress)
            .map(|(_, sub)| PanelProgress {
                label: sub.label(),
                bar_max: card.secondary_progress.count.saturating_sub(1),
                bar_position: card.secondary_progress.index,
            });

        CardView {
            main_panel,
            sub_panel,
            show_main_text: card.has_main_text(),
            show_sub_text: card.has_sub_text(),
            show_separator: card.has_main_text() && card.has_sub_text(),
            show_navigation: self.deck.len() > 1,
        }
    }

    fn move_to(&mut self, target: Option<usize>) -> usize {
        if let Some(index) = target {
            tracing::trace!(from = self.position, to = index, "moved");
            self.position = index;
        }
        self.position
    }
}
