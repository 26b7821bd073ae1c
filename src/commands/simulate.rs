//! Difficulty simulation
//!
//! Plays many rounds per difficulty with random letter orders and compares how
//! the adversary fares. Every difficulty sees the same letter order for a given
//! round index, so the comparison is like for like.

use crate::core::Difficulty;
use crate::dictionary::Dictionary;
use crate::engine::{Round, RoundConfig, RoundStatus};
use crate::error::HangmanError;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub word_length: usize,
    pub guess_budget: u32,
    pub rounds: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(word_length: usize, guess_budget: u32, rounds: usize) -> Self {
        Self {
            word_length,
            guess_budget,
            rounds,
            seed: 0,
            show_progress: false,
        }
    }
}

/// How a single simulated round went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    pub won: bool,
    pub guesses: u32,
    pub candidates_left: usize,
    /// Guess count at which a single candidate was left, if reached
    pub narrowed_at: Option<u32>,
}

/// Aggregated results for one difficulty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyStats {
    pub difficulty: Difficulty,
    pub rounds: usize,
    pub wins: usize,
    pub total_guesses: u64,
    pub total_candidates_left: u64,
    pub narrowed_rounds: usize,
    pub total_guesses_to_narrow: u64,
}

impl DifficultyStats {
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rounds: 0,
            wins: 0,
            total_guesses: 0,
            total_candidates_left: 0,
            narrowed_rounds: 0,
            total_guesses_to_narrow: 0,
        }
    }

    pub fn record(&mut self, record: &RoundRecord) {
        self.rounds += 1;
        self.wins += usize::from(record.won);
        self.total_guesses += u64::from(record.guesses);
        self.total_candidates_left += record.candidates_left as u64;
        if let Some(at) = record.narrowed_at {
            self.narrowed_rounds += 1;
            self.total_guesses_to_narrow += u64::from(at);
        }
    }

    /// Share of rounds the player won, 0 to 1
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        ratio(self.wins as f64, self.rounds)
    }

    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        ratio(self.total_guesses as f64, self.rounds)
    }

    #[must_use]
    pub fn average_candidates_left(&self) -> f64 {
        ratio(self.total_candidates_left as f64, self.rounds)
    }

    /// Average guesses to get down to one candidate, over rounds that did
    #[must_use]
    pub fn average_guesses_to_narrow(&self) -> Option<f64> {
        (self.narrowed_rounds > 0)
            .then(|| self.total_guesses_to_narrow as f64 / self.narrowed_rounds as f64)
    }
}

fn ratio(total: f64, count: usize) -> f64 {
    if count == 0 { 0.0 } else { total / count as f64 }
}

/// Result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub word_length: usize,
    pub guess_budget: u32,
    pub candidates: usize,
    /// One entry per difficulty, easiest first
    pub stats: Vec<DifficultyStats>,
    pub duration: Duration,
}

/// Alphabet shuffled deterministically for round `index`
#[must_use]
pub fn letter_order(seed: u64, index: usize) -> Vec<char> {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
    let mut letters: Vec<char> = ('a'..='z').collect();
    letters.shuffle(&mut rng);
    letters
}

/// Play one round, guessing `letters` in order until it ends
///
/// # Errors
/// Propagates round start failures.
pub fn play_round(
    dictionary: &Dictionary,
    config: RoundConfig,
    letters: &[char],
) -> Result<RoundRecord, HangmanError> {
    let mut round = Round::start(dictionary, config)?;
    let mut narrowed_at = (round.remaining_candidate_count() == 1).then_some(0);

    for &letter in letters {
        if round.is_over() {
            break;
        }
        round.guess(letter)?;
        if narrowed_at.is_none() && round.remaining_candidate_count() == 1 {
            narrowed_at = Some(round.guess_count());
        }
    }

    Ok(RoundRecord {
        won: round.status() == RoundStatus::Won,
        guesses: round.guess_count(),
        candidates_left: round.remaining_candidate_count(),
        narrowed_at,
    })
}

/// Run the simulation for every difficulty
///
/// Rounds run in parallel; each borrows the shared dictionary.
///
/// # Errors
/// Returns the round start error if the configuration cannot start a round.
pub fn run_simulation(
    dictionary: &Dictionary,
    config: SimulationConfig,
) -> Result<SimulationReport, HangmanError> {
    // Surface configuration errors before spinning up workers
    let probe = Round::start(
        dictionary,
        RoundConfig::new(config.word_length, config.guess_budget, Difficulty::Hard),
    )?;
    let candidates = probe.remaining_candidate_count();

    let pb = progress_bar(config.rounds, config.show_progress);
    let start = Instant::now();

    let records: Vec<Vec<RoundRecord>> = (0..config.rounds)
        .into_par_iter()
        .map(|index| {
            let letters = letter_order(config.seed, index);
            let records = Difficulty::ALL
                .iter()
                .map(|&difficulty| {
                    let round_config =
                        RoundConfig::new(config.word_length, config.guess_budget, difficulty);
                    play_round(dictionary, round_config, &letters)
                })
                .collect::<Result<Vec<_>, _>>();
            pb.inc(1);
            records
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    let mut stats: Vec<DifficultyStats> =
        Difficulty::ALL.iter().map(|&d| DifficultyStats::new(d)).collect();
    for per_round in &records {
        for (entry, record) in stats.iter_mut().zip(per_round) {
            entry.record(record);
        }
    }

    Ok(SimulationReport {
        word_length: config.word_length,
        guess_budget: config.guess_budget,
        candidates,
        stats,
        duration: start.elapsed(),
    })
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_letter() -> Dictionary {
        Dictionary::new([
            "cat", "car", "cow", "dog", "dig", "pig", "pin", "pan", "tan", "ten", "hen", "hat",
            "bat", "bag", "big", "bog",
        ])
        .unwrap()
    }

    #[test]
    fn letter_order_is_a_permutation() {
        let mut letters = letter_order(3, 11);
        letters.sort_unstable();
        assert_eq!(letters, ('a'..='z').collect::<Vec<_>>());
    }

    #[test]
    fn letter_order_is_deterministic() {
        assert_eq!(letter_order(9, 4), letter_order(9, 4));
        assert_ne!(letter_order(9, 4), letter_order(9, 5));
    }

    #[test]
    fn play_round_with_whole_alphabet_finishes() {
        let dictionary = three_letter();
        let letters: Vec<char> = ('a'..='z').collect();
        let config = RoundConfig::new(3, 26, Difficulty::Hard);

        let record = play_round(&dictionary, config, &letters).unwrap();
        assert!(record.won);
        assert_eq!(record.candidates_left, 1);
        assert!(record.narrowed_at.is_some());
        assert!(record.guesses <= 26);
    }

    #[test]
    fn play_round_runs_out_of_budget() {
        let dictionary = three_letter();
        let letters = ['x', 'q', 'z', 'j', 'k'];
        let config = RoundConfig::new(3, 2, Difficulty::Hard);

        let record = play_round(&dictionary, config, &letters).unwrap();
        assert!(!record.won);
        assert_eq!(record.guesses, 2);
        assert_eq!(record.candidates_left, 16);
        assert_eq!(record.narrowed_at, None);
    }

    #[test]
    fn simulation_counts_every_round() {
        let dictionary = three_letter();
        let config = SimulationConfig::new(3, 6, 25);
        let report = run_simulation(&dictionary, config).unwrap();

        assert_eq!(report.candidates, 16);
        assert_eq!(report.stats.len(), 3);
        for (stats, difficulty) in report.stats.iter().zip(Difficulty::ALL) {
            assert_eq!(stats.difficulty, difficulty);
            assert_eq!(stats.rounds, 25);
            assert!(stats.wins <= stats.rounds);
            assert!(stats.average_guesses() >= 1.0);
            assert!((0.0..=1.0).contains(&stats.win_rate()));
        }
    }

    #[test]
    fn harder_difficulties_never_help_the_player() {
        let dictionary = Dictionary::embedded().unwrap();
        let mut config = SimulationConfig::new(5, 10, 300);
        config.seed = 1;

        let report = run_simulation(&dictionary, config).unwrap();
        let [easy, medium, hard] = report.stats.as_slice() else {
            panic!("expected one entry per difficulty");
        };

        assert_eq!(easy.difficulty, Difficulty::Easy);
        assert_eq!(hard.difficulty, Difficulty::Hard);
        assert!(hard.win_rate() <= medium.win_rate());
        assert!(medium.win_rate() <= easy.win_rate());
        assert!(hard.average_candidates_left() >= medium.average_candidates_left());
        assert!(hard.average_candidates_left() >= easy.average_candidates_left());
    }

    #[test]
    fn simulation_is_reproducible() {
        let dictionary = three_letter();
        let mut config = SimulationConfig::new(3, 5, 12);
        config.seed = 77;

        let first = run_simulation(&dictionary, config).unwrap();
        let second = run_simulation(&dictionary, config).unwrap();
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn simulation_rejects_unknown_length() {
        let dictionary = three_letter();
        let err = run_simulation(&dictionary, SimulationConfig::new(7, 5, 3)).unwrap_err();
        assert_eq!(err, HangmanError::NoWordsOfLength(7));
    }

    #[test]
    fn empty_stats_average_to_zero() {
        let stats = DifficultyStats::new(Difficulty::Easy);
        assert!(stats.average_guesses().abs() < f64::EPSILON);
        assert_eq!(stats.average_guesses_to_narrow(), None);
    }
}
