//! Evil Hangman
//!
//! A hangman engine that never commits to a secret word. After every guess it
//! keeps the largest family of dictionary words consistent with the guesses so
//! far, so the player is always up against the hardest word still possible.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::core::Difficulty;
//! use evil_hangman::dictionary::Dictionary;
//! use evil_hangman::engine::{Round, RoundConfig};
//!
//! let dictionary = Dictionary::new(["cat", "car", "cow", "dog"]).unwrap();
//! let mut round = Round::start(&dictionary, RoundConfig::new(3, 5, Difficulty::Hard)).unwrap();
//!
//! round.guess('c').unwrap();
//! round.guess('z').unwrap();
//! println!("{} ({} guesses left)", round.current_pattern(), round.guesses_left());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Partitioning, selection and rounds
pub mod engine;

// Error taxonomy
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{ErrorKind, HangmanError};
