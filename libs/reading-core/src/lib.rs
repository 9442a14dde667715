//! Core reading-drill library shared by the service and any other front end.
//!
//! Provides:
//! - Markup scanner for `>>main<<|sub` annotated texts with `N^` repetitions
//! - Cross expansion of main and sub segments into an ordered card deck
//! - Deck navigation (card steps, distinct main steps)
//! - Reading sessions with progress views for the reading screen

pub mod deck;
pub mod error;
pub mod expand;
pub mod parser;
pub mod repetition;
pub mod scanner;
pub mod session;
pub mod types;

pub use deck::Deck;
pub use error::{Result, SessionError};
pub use parser::{count_cards, parse, parse_with, ParseOptions};
pub use repetition::{parse_repetition, Repetition};
pub use session::{CardView, PanelProgress, ReadingSession};
pub use types::{Card, MainSegment, NavigationAction, Progress, MAX_REPETITIONS};
