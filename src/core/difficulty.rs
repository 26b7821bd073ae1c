//! Round difficulty
//!
//! Difficulty decides how often the adversary settles for the second-hardest
//! word family instead of the hardest one.

use std::fmt;

/// How forgiving the adversary is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Second-hardest family on every even guess
    Easy,
    /// Second-hardest family on every fourth guess
    Medium,
    /// Hardest family on every guess
    #[default]
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Parse a difficulty name, case-insensitive
    ///
    /// Accepts "easy"/"e", "medium"/"m", "hard"/"h".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" | "1" => Some(Self::Easy),
            "medium" | "m" | "2" => Some(Self::Medium),
            "hard" | "h" | "3" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Guess cadence on which the second-hardest family is picked
    ///
    /// `None` means the adversary never eases off.
    #[must_use]
    pub const fn easing_interval(self) -> Option<u32> {
        match self {
            Self::Easy => Some(2),
            Self::Medium => Some(4),
            Self::Hard => None,
        }
    }

    /// Whether guess number `guess_count` (1-based) should get the
    /// second-hardest family
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Difficulty;
    ///
    /// assert!(Difficulty::Easy.eases_on(2));
    /// assert!(!Difficulty::Medium.eases_on(2));
    /// assert!(Difficulty::Medium.eases_on(8));
    /// assert!(!Difficulty::Hard.eases_on(4));
    /// ```
    #[must_use]
    pub const fn eases_on(self, guess_count: u32) -> bool {
        match self.easing_interval() {
            Some(interval) => guess_count % interval == 0,
            None => false,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown difficulty: {s} (use easy, medium or hard)"))
    }
}
