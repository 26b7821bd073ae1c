//! Round state machine
//!
//! A round owns everything that changes during one game: the surviving
//! candidates, the guessed letters, the wrong-guess budget and the pattern.
//! The dictionary is only borrowed, so rounds are cheap to start and many can
//! share one dictionary.

use super::observer::{RoundEvent, RoundObserver};
use super::partition::{family_sizes, partition};
use super::selector::{Choice, rank_families, select_family};
use crate::core::{Difficulty, Pattern, normalize_letter};
use crate::dictionary::Dictionary;
use crate::error::HangmanError;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Settings fixed for the lifetime of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub word_length: usize,
    pub guess_budget: u32,
    pub difficulty: Difficulty,
}

impl RoundConfig {
    #[must_use]
    pub const fn new(word_length: usize, guess_budget: u32, difficulty: Difficulty) -> Self {
        Self {
            word_length,
            guess_budget,
            difficulty,
        }
    }
}

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    Active,
    /// Every position revealed
    Won,
    /// Wrong-guess budget spent
    Lost,
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Everything a single guess decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub letter: char,
    /// The chosen pattern reveals the letter
    pub hit: bool,
    /// Positions the letter was revealed at by this guess
    pub occurrences: usize,
    pub pattern: Pattern,
    pub choice: Choice,
    pub status: RoundStatus,
    /// Word count of every family the guess produced
    pub families: BTreeMap<Pattern, usize>,
}

/// One game of evil hangman
pub struct Round<'a> {
    config: RoundConfig,
    guesses_left: u32,
    guess_count: u32,
    guessed: BTreeSet<char>,
    pattern: Pattern,
    active_words: Vec<&'a str>,
    status: RoundStatus,
    observer: Option<&'a dyn RoundObserver>,
}

impl<'a> Round<'a> {
    /// Start a round over every dictionary word of the configured length
    ///
    /// # Errors
    /// - `InvalidGuessBudget` if the budget is zero
    /// - `NoWordsOfLength` if the dictionary has no word of that length
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Difficulty;
    /// use evil_hangman::dictionary::Dictionary;
    /// use evil_hangman::engine::{Round, RoundConfig};
    ///
    /// let dictionary = Dictionary::new(["cat", "car", "cow", "dog"]).unwrap();
    /// let mut round = Round::start(&dictionary, RoundConfig::new(3, 5, Difficulty::Hard)).unwrap();
    ///
    /// let families = round.guess('c').unwrap();
    /// assert_eq!(families.len(), 2);
    /// assert_eq!(round.current_pattern().as_str(), "c--");
    /// assert_eq!(round.remaining_candidate_count(), 3);
    /// assert_eq!(round.guesses_left(), 5);
    /// ```
    pub fn start(dictionary: &'a Dictionary, config: RoundConfig) -> Result<Self, HangmanError> {
        Self::start_observed(dictionary, config, None)
    }

    /// Start a round that reports its choices to `observer`
    ///
    /// # Errors
    /// Same as [`Round::start`].
    pub fn start_observed(
        dictionary: &'a Dictionary,
        config: RoundConfig,
        observer: Option<&'a dyn RoundObserver>,
    ) -> Result<Self, HangmanError> {
        if config.guess_budget == 0 {
            return Err(HangmanError::InvalidGuessBudget(config.guess_budget));
        }

        let active_words: Vec<&'a str> = dictionary.words_of_length(config.word_length).collect();
        if active_words.is_empty() {
            return Err(HangmanError::NoWordsOfLength(config.word_length));
        }

        let round = Self {
            config,
            guesses_left: config.guess_budget,
            guess_count: 0,
            guessed: BTreeSet::new(),
            pattern: Pattern::blank(config.word_length),
            active_words,
            status: RoundStatus::Active,
            observer,
        };

        round.emit(&RoundEvent::Started {
            word_length: config.word_length,
            guess_budget: config.guess_budget,
            difficulty: config.difficulty,
            candidates: round.active_words.len(),
        });

        Ok(round)
    }

    /// Guess `letter` and return the word count of every resulting family
    ///
    /// # Errors
    /// See [`Round::play`].
    pub fn guess(&mut self, letter: char) -> Result<BTreeMap<Pattern, usize>, HangmanError> {
        self.play(letter).map(|outcome| outcome.families)
    }

    /// Guess `letter` and report everything the guess decided
    ///
    /// The letter is folded to lowercase. Nothing about the round changes when
    /// an error is returned.
    ///
    /// # Errors
    /// - `InvalidLetter` for anything but an ASCII letter
    /// - `RoundOver` once the round is won or lost
    /// - `AlreadyGuessed` if the letter was guessed before
    /// - `NoCandidates` if the active set is somehow empty
    pub fn play(&mut self, letter: char) -> Result<GuessOutcome, HangmanError> {
        let letter = normalize_letter(letter).ok_or(HangmanError::InvalidLetter(letter))?;

        if self.status != RoundStatus::Active {
            return Err(HangmanError::RoundOver(self.status));
        }
        if self.guessed.contains(&letter) {
            return Err(HangmanError::AlreadyGuessed(letter));
        }

        let guess_count = self.guess_count + 1;
        let mut families = partition(&self.active_words, &self.pattern, letter);
        let sizes = family_sizes(&families);

        let (choice, chosen) = {
            let ranked = rank_families(&families);
            let (choice, family) = select_family(&ranked, self.config.difficulty, guess_count)
                .ok_or(HangmanError::NoCandidates)?;
            (choice, family.pattern.clone())
        };
        let active_words = families
            .remove(&chosen)
            .filter(|words| !words.is_empty())
            .ok_or(HangmanError::NoCandidates)?;

        self.guessed.insert(letter);
        self.guess_count = guess_count;
        self.active_words = active_words;

        let hit = chosen.contains(letter);
        let occurrences = chosen.occurrences(letter) - self.pattern.occurrences(letter);
        self.pattern = chosen;

        if !hit {
            self.guesses_left -= 1;
        }

        self.emit(&RoundEvent::FamilyChosen {
            guess_count,
            letter,
            choice,
            pattern: &self.pattern,
            family_size: self.active_words.len(),
            family_count: sizes.len(),
        });

        if self.pattern.is_complete() {
            self.finish(RoundStatus::Won);
        } else if self.guesses_left == 0 {
            self.finish(RoundStatus::Lost);
        }

        Ok(GuessOutcome {
            letter,
            hit,
            occurrences,
            pattern: self.pattern.clone(),
            choice,
            status: self.status,
            families: sizes,
        })
    }

    /// Commit to a secret word using the thread-local RNG
    ///
    /// # Errors
    /// Returns `NoCandidates` if the active set is empty.
    pub fn reveal_secret_word(&self) -> Result<&'a str, HangmanError> {
        self.reveal_secret_word_with(&mut rand::rng())
    }

    /// Commit to a secret word using `rng`
    ///
    /// The only candidate is returned when one remains, otherwise a uniform
    /// pick among all of them. The round itself is left untouched.
    ///
    /// # Errors
    /// Returns `NoCandidates` if the active set is empty.
    pub fn reveal_secret_word_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<&'a str, HangmanError> {
        match self.active_words.as_slice() {
            [] => Err(HangmanError::NoCandidates),
            [only] => Ok(*only),
            words => words.choose(rng).copied().ok_or(HangmanError::NoCandidates),
        }
    }

    /// Check whether `letter` was guessed this round, case-insensitive
    #[must_use]
    pub fn already_guessed(&self, letter: char) -> bool {
        normalize_letter(letter).is_some_and(|letter| self.guessed.contains(&letter))
    }

    /// Wrong guesses the player can still afford
    #[must_use]
    pub const fn guesses_left(&self) -> u32 {
        self.guesses_left
    }

    /// Guessed letters in alphabetical order
    #[must_use]
    pub fn guesses_made_sorted(&self) -> Vec<char> {
        self.guessed.iter().copied().collect()
    }

    #[must_use]
    pub const fn current_pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Number of words still consistent with every guess
    #[must_use]
    pub fn remaining_candidate_count(&self) -> usize {
        self.active_words.len()
    }

    /// Words still consistent with every guess, in dictionary order
    #[must_use]
    pub fn candidates(&self) -> &[&'a str] {
        &self.active_words
    }

    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::Active
    }

    /// Guesses made so far, right or wrong
    #[must_use]
    pub const fn guess_count(&self) -> u32 {
        self.guess_count
    }

    #[must_use]
    pub const fn config(&self) -> RoundConfig {
        self.config
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.config.word_length
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    fn finish(&mut self, status: RoundStatus) {
        self.status = status;
        self.emit(&RoundEvent::Finished {
            status,
            guess_count: self.guess_count,
        });
    }

    fn emit(&self, event: &RoundEvent<'_>) {
        if let Some(observer) = self.observer {
            observer.observe(event);
        }
    }
}

impl fmt::Debug for Round<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Round")
            .field("config", &self.config)
            .field("status", &self.status)
            .field("pattern", &self.pattern)
            .field("guesses_left", &self.guesses_left)
            .field("guess_count", &self.guess_count)
            .field("guessed", &self.guessed)
            .field("candidates", &self.active_words.len())
            .finish_non_exhaustive()
    }
}
