//! Service configuration from environment variables.

use std::str::FromStr;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_SESSIONS: usize = 1024;
const DEFAULT_MAX_TEXT_BYTES: usize = 1024 * 1024;
const DEFAULT_MAX_CARDS: usize = 100_000;

/// JSON escaping can grow a string up to six times (`\uXXXX`), plus framing.
const BODY_ESCAPE_FACTOR: usize = 6;
const BODY_FRAMING_BYTES: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Sessions kept in memory before the least recently used one is dropped.
    pub max_sessions: usize,
    /// Largest annotated text accepted in a request body.
    pub max_text_bytes: usize,
    /// Largest deck a single text may expand into.
    pub max_cards: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_sessions: DEFAULT_MAX_SESSIONS,
            max_text_bytes: DEFAULT_MAX_TEXT_BYTES,
            max_cards: DEFAULT_MAX_CARDS,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Env vars:
    /// - HOST, PORT: listen address
    /// - MAX_SESSIONS: in-memory session limit
    /// - MAX_TEXT_BYTES: request text size limit
    /// - MAX_CARDS: expanded deck size limit
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            max_sessions: parse_or("MAX_SESSIONS", lookup("MAX_SESSIONS"), defaults.max_sessions)
                .max(1),
            max_text_bytes: parse_or(
                "MAX_TEXT_BYTES",
                lookup("MAX_TEXT_BYTES"),
                defaults.max_text_bytes,
            ),
            max_cards: parse_or("MAX_CARDS", lookup("MAX_CARDS"), defaults.max_cards).max(1),
        }
    }

    /// Request body limit large enough for any text within `max_text_bytes`.
    pub fn body_limit(&self) -> usize {
        self.max_text_bytes
            .saturating_mul(BODY_ESCAPE_FACTOR)
            .saturating_add(BODY_FRAMING_BYTES)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {}={:?}, using default {}", key, raw, default);
            default
        }),
        None => default,
    }
}
