//! Formatting utilities for terminal output

use crate::engine::GuessOutcome;

/// Format guessed letters as `[a, c, e]`
#[must_use]
pub fn format_guesses(letters: &[char]) -> String {
    let joined: Vec<String> = letters.iter().map(char::to_string).collect();
    format!("[{}]", joined.join(", "))
}

/// Player-facing sentence describing a guess
///
/// # Examples
/// ```
/// use evil_hangman::core::Difficulty;
/// use evil_hangman::dictionary::Dictionary;
/// use evil_hangman::engine::{Round, RoundConfig};
/// use evil_hangman::output::formatters::guess_feedback;
///
/// let dictionary = Dictionary::new(["cat", "car", "cow", "dog"]).unwrap();
/// let mut round = Round::start(&dictionary, RoundConfig::new(3, 5, Difficulty::Hard)).unwrap();
///
/// assert_eq!(guess_feedback(&round.play('c').unwrap()), "Yes, there is one c.");
/// assert_eq!(guess_feedback(&round.play('z').unwrap()), "Sorry, there are no z's.");
/// ```
#[must_use]
pub fn guess_feedback(outcome: &GuessOutcome) -> String {
    let letter = outcome.letter;
    match outcome.occurrences {
        0 => format!("Sorry, there are no {letter}'s."),
        1 => format!("Yes, there is one {letter}."),
        n => format!("Yes, there are {n} {letter}'s."),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining wrong guesses as a bar
#[must_use]
pub fn budget_bar(left: u32, budget: u32, width: usize) -> String {
    create_progress_bar(f64::from(left), f64::from(budget), width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::dictionary::Dictionary;
    use crate::engine::{Round, RoundConfig};

    #[test]
    fn format_guesses_empty() {
        assert_eq!(format_guesses(&[]), "[]");
    }

    #[test]
    fn format_guesses_list() {
        assert_eq!(format_guesses(&['a', 'c', 'e', 's', 't', 'z']), "[a, c, e, s, t, z]");
    }

    #[test]
    fn feedback_counts_multiple_occurrences() {
        let dictionary = Dictionary::new(["geese"]).unwrap();
        let mut round =
            Round::start(&dictionary, RoundConfig::new(5, 3, Difficulty::Hard)).unwrap();

        let outcome = round.play('e').unwrap();
        assert_eq!(guess_feedback(&outcome), "Yes, there are 3 e's.");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn budget_bar_zero_budget() {
        assert_eq!(budget_bar(0, 0, 4), "░░░░");
    }
}
