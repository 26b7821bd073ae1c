//! Errors raised by the hangman engine
//!
//! Every failure is local and synchronous. Callers decide whether to abort the
//! round or the process; nothing is retried inside the engine.

use crate::engine::RoundStatus;
use std::fmt;

/// Broad classification of a [`HangmanError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller broke a documented precondition
    Precondition,
    /// The request conflicts with the current round state
    StateConflict,
    /// Internal invariant breach, points at an engine bug
    Invariant,
}

/// Error type for dictionary construction and round operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangmanError {
    /// Dictionary built from no usable words
    EmptyDictionary,
    /// Round started with a wrong-guess budget below one
    InvalidGuessBudget(u32),
    /// Round started with a length the dictionary has no words for
    NoWordsOfLength(usize),
    /// Guess was not an ASCII letter
    InvalidLetter(char),
    /// Guess made after the round was already won or lost
    RoundOver(RoundStatus),
    /// Letter was already guessed this round
    AlreadyGuessed(char),
    /// No candidate words remain to reveal
    NoCandidates,
}

impl HangmanError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyDictionary
            | Self::InvalidGuessBudget(_)
            | Self::NoWordsOfLength(_)
            | Self::InvalidLetter(_)
            | Self::RoundOver(_) => ErrorKind::Precondition,
            Self::AlreadyGuessed(_) => ErrorKind::StateConflict,
            Self::NoCandidates => ErrorKind::Invariant,
        }
    }
}

impl fmt::Display for HangmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDictionary => write!(f, "Dictionary must contain at least one word"),
            Self::InvalidGuessBudget(budget) => {
                write!(f, "Number of wrong guesses must be at least 1, got {budget}")
            }
            Self::NoWordsOfLength(len) => write!(f, "Dictionary has no words of length {len}"),
            Self::InvalidLetter(c) => write!(f, "Guess must be a letter, got {c:?}"),
            Self::RoundOver(status) => write!(f, "Round is already over ({status})"),
            Self::AlreadyGuessed(c) => write!(f, "Letter '{c}' has already been guessed"),
            Self::NoCandidates => write!(f, "No candidate words remain in the active set"),
        }
    }
}

impl std::error::Error for HangmanError {}
