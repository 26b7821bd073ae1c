//! Evil Hangman - CLI
//!
//! Hangman against an adversary that keeps dodging your guesses, in a plain
//! text loop or a TUI, plus dictionary and difficulty statistics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{SimulationConfig, run_census, run_play, run_simulation},
    core::Difficulty,
    dictionary::{Dictionary, loader::load_from_file},
    engine::{RoundConfig, RoundObserver},
    interactive::{App, DebugLog, run_tui},
    output::{ConsoleObserver, print_census, print_simulation_report},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against an opponent that never commits to a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Print the adversary's choices as they happen
    #[arg(short, long, global = true)]
    debug: bool,

    /// Seed for secret word reveals and simulated letter orders
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simple text mode (default)
    Play,

    /// Interactive TUI mode
    Tui {
        /// Word length
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Wrong guesses allowed
        #[arg(short, long, default_value = "8")]
        guesses: u32,

        /// Difficulty: easy, medium or hard
        #[arg(short = 'D', long, default_value = "hard")]
        difficulty: String,
    },

    /// Count dictionary words per length
    Census,

    /// Compare difficulties over many automated rounds
    Simulate {
        /// Word length
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Wrong guesses allowed
        #[arg(short, long, default_value = "8")]
        guesses: u32,

        /// Rounds per difficulty
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,
    },
}

/// Load the dictionary named by the --dictionary flag
fn load_dictionary(source: &str) -> Result<Dictionary> {
    if source == "embedded" {
        return Dictionary::embedded().context("embedded dictionary is empty");
    }

    let entries =
        load_from_file(source).with_context(|| format!("failed to read dictionary {source}"))?;
    Dictionary::new(entries).with_context(|| format!("no usable words in {source}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.dictionary)?;

    // Default to text mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, cli.debug, cli.seed),
        Commands::Tui {
            length,
            guesses,
            difficulty,
        } => run_tui_command(&dictionary, length, guesses, &difficulty, cli.debug, cli.seed),
        Commands::Census => {
            print_census(&run_census(&dictionary));
            Ok(())
        }
        Commands::Simulate {
            length,
            guesses,
            rounds,
        } => run_simulate_command(&dictionary, length, guesses, rounds, cli.seed),
    }
}

fn run_play_command(dictionary: &Dictionary, debug: bool, seed: Option<u64>) -> Result<()> {
    let console = ConsoleObserver;
    let observer = debug.then_some(&console as &dyn RoundObserver);
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    run_play(dictionary, observer, &mut rng, &mut input, &mut output)?;
    Ok(())
}

fn run_tui_command(
    dictionary: &Dictionary,
    length: usize,
    guesses: u32,
    difficulty: &str,
    debug: bool,
    seed: Option<u64>,
) -> Result<()> {
    let difficulty: Difficulty = difficulty.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let log = DebugLog::default();
    let config = RoundConfig::new(length, guesses, difficulty);
    let app = App::new(dictionary, config, seed, debug.then_some(&log))?;
    run_tui(app)
}

fn run_simulate_command(
    dictionary: &Dictionary,
    length: usize,
    guesses: u32,
    rounds: usize,
    seed: Option<u64>,
) -> Result<()> {
    println!("Simulating {rounds} rounds per difficulty...");

    let mut config = SimulationConfig::new(length, guesses, rounds);
    config.seed = seed.unwrap_or_default();
    config.show_progress = true;

    let report = run_simulation(dictionary, config)?;
    print_simulation_report(&report);
    Ok(())
}
