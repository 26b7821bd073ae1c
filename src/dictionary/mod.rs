//! Hangman dictionary indexed by word length
//!
//! The dictionary is built once and is read-only afterwards, so any number of
//! rounds may borrow it at the same time, from any thread.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::normalize_word;
use crate::error::HangmanError;
use rustc_hash::{FxHashMap, FxHashSet};

/// Immutable, ordered collection of lowercase words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
    by_length: FxHashMap<usize, Vec<usize>>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Entries are trimmed and lowercased. Entries that are not plain ASCII
    /// words are skipped, as are repeats of an earlier entry; the first
    /// occurrence keeps its place in the order.
    ///
    /// # Errors
    /// Returns `HangmanError::EmptyDictionary` if no usable word remains.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["cat", "Car", "cow", "dog", "horse"]).unwrap();
    /// assert_eq!(dictionary.count_of_length(3), 4);
    /// assert_eq!(dictionary.count_of_length(7), 0);
    /// ```
    pub fn new<I, S>(entries: I) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let words: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| normalize_word(entry.as_ref()).ok())
            .filter(|word| seen.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(HangmanError::EmptyDictionary);
        }

        let mut by_length: FxHashMap<usize, Vec<usize>> = FxHashMap::default();
        for (i, word) in words.iter().enumerate() {
            by_length.entry(word.len()).or_default().push(i);
        }

        Ok(Self { words, by_length })
    }

    /// Dictionary compiled into the binary
    ///
    /// # Errors
    /// Returns `HangmanError::EmptyDictionary` only if the embedded list was
    /// generated empty.
    pub fn embedded() -> Result<Self, HangmanError> {
        Self::new(WORDS)
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty dictionaries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words with exactly `length` letters
    #[must_use]
    pub fn count_of_length(&self, length: usize) -> usize {
        self.by_length.get(&length).map_or(0, Vec::len)
    }

    /// All words with exactly `length` letters, in dictionary order
    pub fn words_of_length(&self, length: usize) -> impl Iterator<Item = &str> + '_ {
        self.by_length
            .get(&length)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(move |&i| self.words[i].as_str())
    }

    /// Every word, in dictionary order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// `(length, count)` pairs for every length present, shortest first
    #[must_use]
    pub fn length_census(&self) -> Vec<(usize, usize)> {
        let mut census: Vec<(usize, usize)> = self
            .by_length
            .iter()
            .map(|(&length, indices)| (length, indices.len()))
            .collect();
        census.sort_unstable();
        census
    }

    /// Length of the longest word
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.by_length.keys().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dictionary = Dictionary::embedded().unwrap();
        assert!(!dictionary.is_empty());
        assert!(dictionary.count_of_length(5) > 0);
    }

    #[test]
    fn empty_input_is_rejected() {
        let entries: [&str; 0] = [];
        assert_eq!(
            Dictionary::new(entries).unwrap_err(),
            HangmanError::EmptyDictionary
        );
    }

    #[test]
    fn only_invalid_input_is_rejected() {
        let result = Dictionary::new(["", "don't", "42"]);
        assert_eq!(result.unwrap_err(), HangmanError::EmptyDictionary);
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let dictionary = Dictionary::new(["cat", "ice-cream", "DOG", ""]).unwrap();
        let words: Vec<&str> = dictionary.iter().collect();
        assert_eq!(words, vec!["cat", "dog"]);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let dictionary = Dictionary::new(["cow", "cat", "COW", "car"]).unwrap();
        let words: Vec<&str> = dictionary.iter().collect();
        assert_eq!(words, vec!["cow", "cat", "car"]);
    }

    #[test]
    fn words_of_length_preserves_order() {
        let dictionary = Dictionary::new(["dog", "horse", "cat", "zebra", "cow"]).unwrap();
        let three: Vec<&str> = dictionary.words_of_length(3).collect();
        let five: Vec<&str> = dictionary.words_of_length(5).collect();

        assert_eq!(three, vec!["dog", "cat", "cow"]);
        assert_eq!(five, vec!["horse", "zebra"]);
        assert_eq!(dictionary.words_of_length(9).count(), 0);
    }

    #[test]
    fn census_sorted_by_length() {
        let dictionary = Dictionary::new(["horse", "a", "cat", "dog", "zebra", "by"]).unwrap();
        assert_eq!(dictionary.length_census(), vec![(1, 1), (2, 1), (3, 2), (5, 2)]);
        assert_eq!(dictionary.max_length(), 5);
    }
}
