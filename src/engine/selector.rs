//! Adversarial family ranking and difficulty-driven selection
//!
//! Families are ranked hardest first by:
//! 1. more words (more ambiguity kept alive)
//! 2. more hidden positions
//! 3. lexicographically smaller pattern
//!
//! The selector then takes the hardest family, or the second hardest when the
//! round's difficulty eases off on the current guess.

use super::partition::Families;
use crate::core::{Difficulty, Pattern};
use std::cmp::Reverse;

/// A family's standing in the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedFamily<'p> {
    pub pattern: &'p Pattern,
    pub size: usize,
    pub unrevealed: usize,
}

impl<'p> RankedFamily<'p> {
    /// Sort key, hardest family sorts first
    #[must_use]
    pub fn sort_key(&self) -> (Reverse<usize>, Reverse<usize>, &'p Pattern) {
        (Reverse(self.size), Reverse(self.unrevealed), self.pattern)
    }
}

/// Which ranked family the adversary settled on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Hardest,
    SecondHardest,
}

impl Choice {
    /// Position in the hardest-first ranking
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Hardest => 0,
            Self::SecondHardest => 1,
        }
    }
}

/// Rank families hardest first
///
/// The order is total: two families never share a pattern, so the final
/// tie-break always decides.
#[must_use]
pub fn rank_families<'p>(families: &'p Families<'_>) -> Vec<RankedFamily<'p>> {
    let mut ranked: Vec<RankedFamily<'p>> = families
        .iter()
        .map(|(pattern, words)| RankedFamily {
            pattern,
            size: words.len(),
            unrevealed: pattern.unrevealed(),
        })
        .collect();

    ranked.sort_unstable_by_key(RankedFamily::sort_key);
    ranked
}

/// Decide which rank to take
///
/// A lone family is always taken. Otherwise the difficulty cadence on the
/// 1-based `guess_count` decides between the hardest and second hardest.
#[must_use]
pub const fn choose(family_count: usize, difficulty: Difficulty, guess_count: u32) -> Choice {
    if family_count > 1 && difficulty.eases_on(guess_count) {
        Choice::SecondHardest
    } else {
        Choice::Hardest
    }
}

/// Pick the surviving family from a hardest-first ranking
///
/// Returns `None` only for an empty ranking.
#[must_use]
pub fn select_family<'r, 'p>(
    ranked: &'r [RankedFamily<'p>],
    difficulty: Difficulty,
    guess_count: u32,
) -> Option<(Choice, &'r RankedFamily<'p>)> {
    let choice = choose(ranked.len(), difficulty, guess_count);
    ranked.get(choice.index()).map(|family| (choice, family))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::partition::partition;

    fn pattern(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    fn ranked_patterns(families: &Families<'_>) -> Vec<String> {
        rank_families(families)
            .iter()
            .map(|family| family.pattern.to_string())
            .collect()
    }

    #[test]
    fn larger_family_ranks_harder() {
        let words = ["cat", "car", "cow", "dog"];
        let families = partition(&words, &Pattern::blank(3), 'c');

        assert_eq!(ranked_patterns(&families), vec!["c--", "---"]);
    }

    #[test]
    fn more_hidden_positions_break_size_ties() {
        // "aa" and "bc" each form a family of one
        let words = ["aa", "bc"];
        let families = partition(&words, &Pattern::blank(2), 'a');

        assert_eq!(ranked_patterns(&families), vec!["--", "aa"]);
    }

    #[test]
    fn lexicographic_order_breaks_remaining_ties() {
        let words = ["ab", "ba"];
        let families = partition(&words, &Pattern::blank(2), 'a');

        assert_eq!(ranked_patterns(&families), vec!["-a", "a-"]);
    }

    #[test]
    fn full_ranking_uses_all_three_keys() {
        let words = ["bee", "see", "eel", "eve", "ewe", "pet", "tab", "axe"];
        let families = partition(&words, &Pattern::blank(3), 'e');
        let ranked = rank_families(&families);

        // -ee (2), e-e (2), then singletons by hidden count and pattern
        assert_eq!(ranked[0].pattern, &pattern("-ee"));
        assert_eq!(ranked[1].pattern, &pattern("e-e"));
        assert_eq!(ranked[2].pattern, &pattern("---"));
        assert_eq!(ranked[3].pattern, &pattern("--e"));
        assert_eq!(ranked[4].pattern, &pattern("-e-"));
        assert_eq!(ranked[5].pattern, &pattern("ee-"));
        assert!(ranked.windows(2).all(|w| w[0].sort_key() < w[1].sort_key()));
    }

    #[test]
    fn single_family_always_taken() {
        for difficulty in Difficulty::ALL {
            for guess_count in 1..=8 {
                assert_eq!(choose(1, difficulty, guess_count), Choice::Hardest);
            }
        }
    }

    #[test]
    fn hard_always_takes_hardest() {
        assert!((1..=16).all(|n| choose(3, Difficulty::Hard, n) == Choice::Hardest));
    }

    #[test]
    fn medium_eases_every_fourth_guess() {
        assert_eq!(choose(2, Difficulty::Medium, 3), Choice::Hardest);
        assert_eq!(choose(2, Difficulty::Medium, 4), Choice::SecondHardest);
        assert_eq!(choose(2, Difficulty::Medium, 6), Choice::Hardest);
        assert_eq!(choose(2, Difficulty::Medium, 8), Choice::SecondHardest);
    }

    #[test]
    fn easy_eases_every_second_guess() {
        assert_eq!(choose(2, Difficulty::Easy, 1), Choice::Hardest);
        assert_eq!(choose(2, Difficulty::Easy, 2), Choice::SecondHardest);
        assert_eq!(choose(2, Difficulty::Easy, 3), Choice::Hardest);
        assert_eq!(choose(2, Difficulty::Easy, 4), Choice::SecondHardest);
    }

    #[test]
    fn select_family_returns_ranked_entry() {
        let words = ["cat", "car", "cow", "dog"];
        let families = partition(&words, &Pattern::blank(3), 'c');
        let ranked = rank_families(&families);

        let (choice, family) = select_family(&ranked, Difficulty::Easy, 2).unwrap();
        assert_eq!(choice, Choice::SecondHardest);
        assert_eq!(family.pattern, &pattern("---"));
        assert_eq!(family.size, 1);

        let (choice, family) = select_family(&ranked, Difficulty::Easy, 1).unwrap();
        assert_eq!(choice, Choice::Hardest);
        assert_eq!(family.size, 3);
    }

    #[test]
    fn select_family_on_empty_ranking() {
        assert!(select_family(&[], Difficulty::Hard, 1).is_none());
    }
}
