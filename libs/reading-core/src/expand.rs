//! Segment accumulation and cross expansion into cards.
//!
//! A main segment repeated `R` times with sub list `[s0, s1, ..]` expands to
//! `R × len` cards: the whole sub list once per repetition of the main
//! segment. Sub segments are stored physically duplicated, so a run of equal
//! neighbours is what drives sub progress, whatever the markup looked like.

use crate::repetition::parse_repetition;
use crate::types::{Card, MainSegment, Progress};

/// State collected since the last flush.
#[derive(Debug, Default)]
pub struct Accumulator {
    main: Option<MainSegment>,
    subs: Vec<String>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flush what came before and make `fragment` the active main segment.
    pub fn start_main(&mut self, fragment: &str, cards: &mut Vec<Card>) {
        self.flush(cards);

        let repetition = parse_repetition(fragment);
        self.main = Some(MainSegment {
            text: repetition.text.to_string(),
            repetition_count: repetition.count,
        });
    }

    /// Queue a sub segment, once per its own repetition count.
    pub fn push_sub(&mut self, fragment: &str) {
        let repetition = parse_repetition(fragment);
        self.subs
            .extend(std::iter::repeat(repetition.text.to_string()).take(repetition.count));
    }

    /// Expand the accumulated block into `cards` and clear the sub list.
    ///
    /// The active main segment stays in place; only the next `start_main`
    /// replaces it.
    pub fn flush(&mut self, cards: &mut Vec<Card>) {
        if self.main.is_none() && self.subs.is_empty() {
            return;
        }

        let before = cards.len();
        expand(self.main.as_ref(), &self.subs, cards);
        tracing::trace!(
            main = self.main.as_ref().map(|m| m.text.as_str()),
            subs = self.subs.len(),
            emitted = cards.len() - before,
            "flushed block"
        );
        self.subs.clear();
    }

    /// Final flush at end of input.
    pub fn finish(mut self, cards: &mut Vec<Card>) {
        self.flush(cards);
    }
}

/// Emit every card for one main segment and its sub list.
pub fn expand(main: Option<&MainSegment>, subs: &[String], cards: &mut Vec<Card>) {
    let repetitions = main.map_or(1, |m| m.repetition_count);
    let main_text = main.map(|m| m.text.clone());

    if subs.is_empty() {
        cards.extend((0..repetitions).map(|i| Card {
            main_text: main_text.clone(),
            sub_text: None,
            main_progress: Progress::new(i, repetitions),
            sub_progress: None,
            secondary_progress: Progress::new(i, repetitions),
        }));
        return;
    }

    let runs = run_progress(subs);
    let total = repetitions * subs.len();
    cards.reserve(total);

    for c in 0..repetitions {
        for (i, (sub, run)) in subs.iter().zip(&runs).enumerate() {
            cards.push(Card {
                main_text: main_text.clone(),
                sub_text: Some(sub.clone()),
                main_progress: Progress::new(c, repetitions),
                sub_progress: Some(*run),
                secondary_progress: Progress::new(c * subs.len() + i, total),
            });
        }
    }
}

/// Position of each entry within its run of identical neighbours.
fn run_progress(subs: &[String]) -> Vec<Progress> {
    let mut progress = Vec::with_capacity(subs.len());
    let mut start = 0;

    while start < subs.len() {
        let first = &subs[start];
        let len = subs[start..].iter().take_while(|s| *s == first).count();
        progress.extend((0..len).map(|i| Progress::new(i, len)));
        start += len;
    }

    progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn main_segment(text: &str, repetition_count: usize) -> MainSegment {
        MainSegment {
            text: text.to_string(),
            repetition_count,
        }
    }

    #[test]
    fn runs_of_equal_neighbours() {
        let runs = run_progress(&strings(&["x", "x", "y", "x"]));
        assert_eq!(
            runs,
            vec![
                Progress::new(0, 2),
                Progress::new(1, 2),
                Progress::new(0, 1),
                Progress::new(0, 1),
            ]
        );
    }

    #[test]
    fn main_only_block_repeats_main() {
        let mut cards = Vec::new();
        expand(Some(&main_segment("Hi", 3)), &[], &mut cards);

        assert_eq!(cards.len(), 3);
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.main_text.as_deref(), Some("Hi"));
            assert_eq!(card.sub_text, None);
            assert_eq!(card.sub_progress, None);
            assert_eq!(card.main_progress, Progress::new(i, 3));
            assert_eq!(card.secondary_progress, Progress::new(i, 3));
        }
    }

    #[test]
    fn sub_list_repeats_per_main_repetition() {
        let mut cards = Vec::new();
        expand(Some(&main_segment("A", 2)), &strings(&["x", "y"]), &mut cards);

        let subs: Vec<_> = cards.iter().map(|c| c.sub_text.as_deref()).collect();
        assert_eq!(subs, vec![Some("x"), Some("y"), Some("x"), Some("y")]);

        let main: Vec<_> = cards.iter().map(|c| c.main_progress.index).collect();
        assert_eq!(main, vec![0, 0, 1, 1]);

        let secondary: Vec<_> = cards.iter().map(|c| c.secondary_progress).collect();
        assert_eq!(
            secondary,
            (0..4).map(|i| Progress::new(i, 4)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn subs_without_main_use_single_repetition() {
        let mut cards = Vec::new();
        expand(None, &strings(&["a", "b"]), &mut cards);

        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|c| c.main_text.is_none()));
        assert!(cards.iter().all(|c| c.main_progress == Progress::new(0, 1)));
    }

    #[test]
    fn accumulator_duplicates_repeated_subs() {
        let mut acc = Accumulator::new();
        let mut cards = Vec::new();
        acc.start_main("A", &mut cards);
        acc.push_sub("3^x");
        acc.push_sub("x");
        acc.finish(&mut cards);

        assert_eq!(cards.len(), 4);
        let runs: Vec<_> = cards.iter().map(|c| c.sub_progress).collect();
        assert_eq!(
            runs,
            (0..4).map(|i| Some(Progress::new(i, 4))).collect::<Vec<_>>()
        );
    }

    #[test]
    fn flush_clears_subs_but_keeps_main() {
        let mut acc = Accumulator::new();
        let mut cards = Vec::new();
        acc.start_main("A", &mut cards);
        acc.push_sub("x");
        acc.flush(&mut cards);
        assert_eq!(cards.len(), 1);

        // Main segment is still active, so a second flush re-emits it alone.
        acc.flush(&mut cards);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].sub_text, None);
    }

    #[test]
    fn empty_accumulator_emits_nothing() {
        let mut cards = Vec::new();
        Accumulator::new().finish(&mut cards);
        assert!(cards.is_empty());
    }
}
