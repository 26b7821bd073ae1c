//! Dictionary word and guess normalization
//!
//! Hangman words are non-empty runs of lowercase ASCII letters. Guesses are
//! single letters, folded to lowercase before they reach the engine.

use std::fmt;

/// Error type for entries that cannot be used as hangman words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

/// Normalize a raw dictionary entry to a lowercase hangman word
///
/// Surrounding whitespace is trimmed, letters are lowercased.
///
/// # Errors
/// Returns `WordError` if the trimmed entry:
/// - is empty
/// - contains non-ASCII characters
/// - contains anything other than letters
///
/// # Examples
/// ```
/// use evil_hangman::core::normalize_word;
///
/// assert_eq!(normalize_word(" Castle ").unwrap(), "castle");
/// assert!(normalize_word("can't").is_err());
/// ```
pub fn normalize_word(raw: &str) -> Result<String, WordError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(WordError::Empty);
    }

    if !trimmed.is_ascii() {
        return Err(WordError::NonAscii);
    }

    if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(WordError::InvalidCharacters);
    }

    Ok(trimmed.to_ascii_lowercase())
}

/// Fold a guess to a lowercase ASCII letter, `None` for anything else
#[inline]
#[must_use]
pub const fn normalize_letter(guess: char) -> Option<char> {
    if guess.is_ascii_alphabetic() {
        Some(guess.to_ascii_lowercase())
    } else {
        None
    }
}
