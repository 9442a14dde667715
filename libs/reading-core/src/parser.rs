//! Annotated text to deck, in one forward pass.
//!
//! # Format
//! ```text
//! >>3^Main text<<|sub one|2^sub two>>Another main<<
//! ```
//!
//! Parsing never fails. Malformed repetition prefixes fall back to a count of
//! 1, a missing `<<` closes at end of text, and text without markers becomes a
//! single card.

use std::borrow::Cow;

use crate::deck::Deck;
use crate::expand::Accumulator;
use crate::repetition::parse_repetition;
use crate::scanner::{Scanner, Segment, MAIN_CLOSE, MAIN_OPEN};
use crate::types::Card;

/// Options applied before scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Turn `&gt;&gt;` and `&lt;&lt;` into markers first.
    pub decode_entities: bool,
}

/// Parse annotated text into a deck.
pub fn parse(text: &str) -> Deck {
    parse_with(text, ParseOptions::default())
}

/// Parse annotated text into a deck with explicit options.
pub fn parse_with(text: &str, options: ParseOptions) -> Deck {
    let text = prepare(text, options);

    let mut cards = Vec::new();
    let mut acc = Accumulator::new();

    for segment in Scanner::new(&text) {
        match segment {
            Segment::Main(fragment) => acc.start_main(fragment, &mut cards),
            Segment::Sub(fragment) => acc.push_sub(fragment),
        }
    }
    acc.finish(&mut cards);

    if cards.is_empty() {
        tracing::debug!(len = text.len(), "no markers found, using whole text as one card");
        cards.push(Card::plain(&text));
    }

    tracing::debug!(cards = cards.len(), "parsed deck");
    Deck::new(cards)
}

/// Number of cards `parse_with` would produce, without building them.
///
/// Saturates at `usize::MAX` instead of overflowing.
pub fn count_cards(text: &str, options: ParseOptions) -> usize {
    let text = prepare(text, options);

    let mut total: usize = 0;
    let mut main: Option<usize> = None;
    let mut subs: usize = 0;

    let block = |main: Option<usize>, subs: usize| match (main, subs) {
        (None, 0) => 0,
        (Some(repetitions), 0) => repetitions,
        (repetitions, subs) => repetitions.unwrap_or(1).saturating_mul(subs),
    };

    for segment in Scanner::new(&text) {
        match segment {
            Segment::Main(fragment) => {
                total = total.saturating_add(block(main, subs));
                subs = 0;
                main = Some(parse_repetition(fragment).count);
            }
            Segment::Sub(fragment) => {
                subs = subs.saturating_add(parse_repetition(fragment).count);
            }
        }
    }
    total = total.saturating_add(block(main, subs));

    total.max(1)
}

fn prepare(text: &str, options: ParseOptions) -> Cow<'_, str> {
    if options.decode_entities {
        decode_marker_entities(text)
    } else {
        Cow::Borrowed(text)
    }
}

/// Replace HTML-escaped main markers with the literal markers.
pub fn decode_marker_entities(text: &str) -> Cow<'_, str> {
    const OPEN_ENTITY: &str = "&gt;&gt;";
    const CLOSE_ENTITY: &str = "&lt;&lt;";

    if !text.contains(OPEN_ENTITY) && !text.contains(CLOSE_ENTITY) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.replace(OPEN_ENTITY, MAIN_OPEN)
            .replace(CLOSE_ENTITY, MAIN_CLOSE),
    )
}
