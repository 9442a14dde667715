//! The ordered card sequence and its navigation helpers.

use serde::Serialize;

use crate::types::Card;

/// Cards in emission order. Never empty when produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub(crate) fn new(cards: Vec<Card>) -> Self {
        debug_assert!(!cards.is_empty(), "deck must hold at least one card");
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.cards.len().saturating_sub(1)
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// First card after `from` that starts another main block or another
    /// repetition of the same one. Cards without main text are skipped.
    pub fn next_distinct_main(&self, from: usize) -> Option<usize> {
        let reference = self.cards.get(from)?;
        (from..self.cards.len()).find(|&i| starts_distinct_main(reference, &self.cards[i]))
    }

    /// Mirror of [`Deck::next_distinct_main`], scanning back to index 0.
    pub fn prev_distinct_main(&self, from: usize) -> Option<usize> {
        let reference = self.cards.get(from)?;
        (0..=from)
            .rev()
            .find(|&i| starts_distinct_main(reference, &self.cards[i]))
    }

    pub fn next_card(&self, from: usize) -> Option<usize> {
        (from + 1 < self.cards.len()).then_some(from + 1)
    }

    pub fn prev_card(&self, from: usize) -> Option<usize> {
        (from > 0 && from < self.cards.len()).then(|| from - 1)
    }
}

fn starts_distinct_main(reference: &Card, candidate: &Card) -> bool {
    let differs = candidate.main_text != reference.main_text
        || candidate.main_progress.index != reference.main_progress.index;
    differs && candidate.has_main_text()
}
