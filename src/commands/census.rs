//! Dictionary census command
//!
//! Counts dictionary words per length, the query front ends use to decide
//! which word lengths can start a round.

use crate::dictionary::Dictionary;

/// Word counts of a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusResult {
    pub total_words: usize,
    /// `(length, count)`, shortest first
    pub by_length: Vec<(usize, usize)>,
}

impl CensusResult {
    /// Length with the most words, shortest on ties
    #[must_use]
    pub fn most_common_length(&self) -> Option<usize> {
        self.by_length
            .iter()
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
            .map(|&(length, _)| length)
    }
}

#[must_use]
pub fn run_census(dictionary: &Dictionary) -> CensusResult {
    CensusResult {
        total_words: dictionary.len(),
        by_length: dictionary.length_census(),
    }
}
