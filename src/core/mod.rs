//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and carry no game state.

mod difficulty;
mod pattern;
mod word;

pub use difficulty::Difficulty;
pub use pattern::{HIDDEN, Pattern};
pub use word::{WordError, normalize_letter, normalize_word};
