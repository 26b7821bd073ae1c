//! Debug trace of a round's choices on stderr

use crate::engine::{Choice, RoundEvent, RoundObserver};
use colored::Colorize;

/// Writes `DEBUGGING:` lines for every round event
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    /// The line(s) printed for `event`, without colour
    #[must_use]
    pub fn describe(event: &RoundEvent<'_>) -> Vec<String> {
        match event {
            RoundEvent::Started {
                word_length,
                guess_budget,
                difficulty,
                candidates,
            } => vec![format!(
                "{candidates} words of length {word_length}, {guess_budget} wrong guesses, {difficulty} difficulty."
            )],
            RoundEvent::FamilyChosen {
                choice,
                pattern,
                family_size,
                family_count,
                ..
            } => {
                let mut lines = Vec::with_capacity(2);
                if *family_count > 1 {
                    lines.push(match choice {
                        Choice::Hardest => "Picking hardest list.".to_string(),
                        Choice::SecondHardest => "Picking second hardest list.".to_string(),
                    });
                }
                lines.push(format!(
                    "New pattern is: {pattern}. New family has {family_size} words."
                ));
                lines
            }
            RoundEvent::Finished {
                status,
                guess_count,
            } => vec![format!("Round {status} after {guess_count} guesses.")],
        }
    }
}

impl RoundObserver for ConsoleObserver {
    fn observe(&self, event: &RoundEvent<'_>) {
        for line in Self::describe(event) {
            eprintln!("{} {}", "DEBUGGING:".bright_black().bold(), line.bright_black());
        }
    }
}
