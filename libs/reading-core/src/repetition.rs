//! Inline repetition prefixes: `3^text` means "three times `text`".

use crate::types::MAX_REPETITIONS;

/// Separator between the repetition count and the segment text.
pub const REPETITION_MARKER: char = '^';

/// A fragment split into its repetition count and remaining text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repetition<'a> {
    pub count: usize,
    pub text: &'a str,
}

/// Extract an optional leading `<integer>^` prefix from a fragment.
///
/// A prefix that is not a base-10 integer leaves the fragment untouched
/// (caret included) with a count of 1. Integers are clamped to `1..=1000`,
/// including ones too large for any machine integer.
pub fn parse_repetition(fragment: &str) -> Repetition<'_> {
    let unchanged = Repetition {
        count: 1,
        text: fragment,
    };

    let Some(caret) = fragment.find(REPETITION_MARKER) else {
        return unchanged;
    };

    match parse_count(&fragment[..caret]) {
        Some(count) => Repetition {
            count,
            text: &fragment[caret + REPETITION_MARKER.len_utf8()..],
        },
        None => unchanged,
    }
}

fn parse_count(prefix: &str) -> Option<usize> {
    let (negative, digits) = match prefix.as_bytes().first()? {
        b'-' => (true, &prefix[1..]),
        b'+' => (false, &prefix[1..]),
        _ => (false, prefix),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if negative {
        return Some(1);
    }

    // Overflowing values are still well-formed integers, just large ones.
    let value = digits.parse::<usize>().unwrap_or(usize::MAX);
    Some(value.clamp(1, MAX_REPETITIONS))
}
