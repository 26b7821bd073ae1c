//! Hangman reveal pattern derivation and representation
//!
//! A pattern holds one character per word position:
//! - `-` = position not revealed yet
//! - any lowercase letter = that letter was guessed and sits at this position
//!
//! Patterns order lexicographically by their string form, which is the final
//! tie-break when ranking word families.

use std::fmt;

/// Marker for an unrevealed position
pub const HIDDEN: char = '-';

/// Positional reveal pattern for a hangman word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(String);

impl Pattern {
    /// Pattern with every position hidden
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// assert_eq!(Pattern::blank(4).as_str(), "----");
    /// ```
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self(HIDDEN.to_string().repeat(len))
    }

    /// Derive the pattern `word` produces for `guess`, starting from `self`
    ///
    /// Positions where `word` holds `guess` show the guess, every other
    /// position keeps what the prior pattern had. Revealed letters therefore
    /// never revert to hidden.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// let prior: Pattern = "-a-".parse().unwrap();
    /// assert_eq!(prior.derive("cat", 'c').as_str(), "ca-");
    /// assert_eq!(prior.derive("cat", 'z').as_str(), "-a-");
    /// ```
    #[must_use]
    pub fn derive(&self, word: &str, guess: char) -> Self {
        debug_assert_eq!(
            word.chars().count(),
            self.len(),
            "word and pattern must have the same length"
        );

        let derived = word
            .chars()
            .zip(self.0.chars())
            .map(|(letter, shown)| if letter == guess { guess } else { shown })
            .collect();

        Self(derived)
    }

    /// Count the positions still hidden
    #[inline]
    #[must_use]
    pub fn unrevealed(&self) -> usize {
        self.0.chars().filter(|&c| c == HIDDEN).count()
    }

    /// Check whether `letter` is revealed anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        letter != HIDDEN && self.0.contains(letter)
    }

    /// Count the positions showing `letter`
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        if letter == HIDDEN {
            return 0;
        }
        self.0.chars().filter(|&c| c == letter).count()
    }

    /// True once no position is hidden
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.0.contains(HIDDEN)
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render with a space between positions, e.g. `c - -`
    #[must_use]
    pub fn spaced(&self) -> String {
        let mut result = String::with_capacity(self.len() * 2);
        for (i, c) in self.0.chars().enumerate() {
            if i > 0 {
                result.push(' ');
            }
            result.push(c);
        }
        result
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.chars().all(|c| c == HIDDEN || c.is_ascii_lowercase()) {
            Ok(Self(s.to_string()))
        } else {
            Err(format!("Invalid pattern string: {s}"))
        }
    }
}
