//! Test fixtures and factory functions for creating request bodies.

use serde_json::{json, Value};

/// A text with two main blocks: one repeated with subs, one plain.
pub const PRAYER: &str = ">>2^Opening<<|3^Response|Amen>>Closing<<";

/// Body for deck parsing and session creation.
pub fn text_request(text: &str) -> Value {
    json!({ "text": text })
}
