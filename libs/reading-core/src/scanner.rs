//! Forward scan over annotated text.
//!
//! # Markup
//! ```text
//! >>2^Main text<<|first sub|3^repeated sub>>Next main<<|...
//! ```
//!
//! `>>` opens a main segment, closed by `<<` or end of text. `|` opens a sub
//! segment that runs until the next `>>` or `|`. Text outside any segment is
//! skipped. There is no escaping: every marker occurrence is structural.

/// Opens a main segment.
pub const MAIN_OPEN: &str = ">>";
/// Closes a main segment. Optional; end of text closes it too.
pub const MAIN_CLOSE: &str = "<<";
/// Opens a sub segment.
pub const SUB_OPEN: &str = "|";

/// One raw unit found by the scanner, repetition prefix still attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Main(&'a str),
    Sub(&'a str),
}

/// Iterator over the segments of a raw text, in order of appearance.
pub struct Scanner<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: 0 }
    }

    /// Byte offset of the next occurrence of `marker` at or after `from`.
    fn find_marker(&self, marker: &str, from: usize) -> Option<usize> {
        self.text
            .get(from..)
            .and_then(|rest| rest.find(marker))
            .map(|offset| from + offset)
    }

    fn scan_main(&mut self, open: usize) -> Segment<'a> {
        let start = open + MAIN_OPEN.len();
        let (end, next) = match self.find_marker(MAIN_CLOSE, start) {
            Some(close) => (close, close + MAIN_CLOSE.len()),
            None => (self.text.len(), self.text.len()),
        };
        self.cursor = next;
        Segment::Main(&self.text[start..end])
    }

    fn scan_sub(&mut self, open: usize) -> Segment<'a> {
        let start = open + SUB_OPEN.len();
        let end = [self.find_marker(MAIN_OPEN, start), self.find_marker(SUB_OPEN, start)]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(self.text.len());
        self.cursor = end;
        Segment::Sub(&self.text[start..end])
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.text.len() {
            return None;
        }

        let main = self.find_marker(MAIN_OPEN, self.cursor);
        let sub = self.find_marker(SUB_OPEN, self.cursor);

        match (main, sub) {
            (None, None) => {
                self.cursor = self.text.len();
                None
            }
            (Some(main), None) => Some(self.scan_main(main)),
            // Main wins unless a sub marker comes strictly before it.
            (Some(main), Some(sub)) if main < sub => Some(self.scan_main(main)),
            (_, Some(sub)) => Some(self.scan_sub(sub)),
        }
    }
}
