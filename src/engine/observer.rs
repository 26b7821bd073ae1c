//! Optional hook for watching a round make its choices

use super::round::RoundStatus;
use super::selector::Choice;
use crate::core::{Difficulty, Pattern};

/// Something a round reports to its observer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent<'e> {
    Started {
        word_length: usize,
        guess_budget: u32,
        difficulty: Difficulty,
        candidates: usize,
    },
    FamilyChosen {
        guess_count: u32,
        letter: char,
        choice: Choice,
        pattern: &'e Pattern,
        family_size: usize,
        family_count: usize,
    },
    Finished {
        status: RoundStatus,
        guess_count: u32,
    },
}

/// Receives [`RoundEvent`]s from a round it was attached to at start
pub trait RoundObserver {
    fn observe(&self, event: &RoundEvent<'_>);
}

impl<F> RoundObserver for F
where
    F: Fn(&RoundEvent<'_>),
{
    fn observe(&self, event: &RoundEvent<'_>) {
        self(event);
    }
}
