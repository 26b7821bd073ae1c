//! TUI application state and logic

use crate::core::{Pattern, normalize_letter};
use crate::dictionary::Dictionary;
use crate::engine::{Choice, GuessOutcome, Round, RoundConfig, RoundEvent, RoundObserver, RoundStatus};
use crate::error::HangmanError;
use crate::output::console::ConsoleObserver;
use crate::output::formatters::guess_feedback;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::RefCell;
use std::io;

/// Collects the debug trace of rounds until the app drains it into messages
#[derive(Debug, Default)]
pub struct DebugLog {
    lines: RefCell<Vec<String>>,
}

impl DebugLog {
    #[must_use]
    pub fn drain(&self) -> Vec<String> {
        self.lines.borrow_mut().drain(..).collect()
    }
}

impl RoundObserver for DebugLog {
    fn observe(&self, event: &RoundEvent<'_>) {
        self.lines
            .borrow_mut()
            .extend(ConsoleObserver::describe(event));
    }
}

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: RoundConfig,
    pub round: Round<'a>,
    pub last_guess: Option<LastGuess>,
    pub secret: Option<&'a str>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    debug_log: Option<&'a DebugLog>,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

/// Families the last guess split the candidates into
#[derive(Debug, Clone)]
pub struct LastGuess {
    pub letter: char,
    pub choice: Choice,
    pub chosen: Pattern,
    /// `(pattern, size)`, largest first
    pub families: Vec<(Pattern, usize)>,
}

impl LastGuess {
    fn from_outcome(outcome: &GuessOutcome) -> Self {
        let mut families: Vec<(Pattern, usize)> = outcome
            .families
            .iter()
            .map(|(pattern, &size)| (pattern.clone(), size))
            .collect();
        families.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Self {
            letter: outcome.letter,
            choice: outcome.choice,
            chosen: outcome.pattern.clone(),
            families,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
    Debug,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    /// Share of games won, 0 to 100
    #[must_use]
    pub fn win_percent(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Start the first round
    ///
    /// With a `debug_log`, every round reports to it and its lines show up in
    /// the message log.
    ///
    /// # Errors
    /// Fails if `config` cannot start a round on `dictionary`.
    pub fn new(
        dictionary: &'a Dictionary,
        config: RoundConfig,
        seed: Option<u64>,
        debug_log: Option<&'a DebugLog>,
    ) -> Result<Self, HangmanError> {
        let round = Round::start_observed(dictionary, config, Self::observer(debug_log))?;
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let mut app = Self {
            dictionary,
            config,
            round,
            last_guess: None,
            secret: None,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            debug_log,
            rng,
        };
        app.announce_round();
        Ok(app)
    }

    fn observer(debug_log: Option<&'a DebugLog>) -> Option<&'a dyn RoundObserver> {
        debug_log.map(|log| log as &dyn RoundObserver)
    }

    fn announce_round(&mut self) {
        self.add_message(
            &format!(
                "New {}-letter word, {} wrong guesses allowed. Type a letter!",
                self.config.word_length, self.config.guess_budget
            ),
            MessageStyle::Info,
        );
        self.flush_debug();
    }

    /// Guess `key` if it is a letter
    pub fn handle_letter(&mut self, key: char) {
        let Some(letter) = normalize_letter(key) else {
            self.add_message("Please enter a single letter.", MessageStyle::Error);
            return;
        };
        if self.round.already_guessed(letter) {
            self.add_message(
                &format!("You already guessed {letter}! Try again."),
                MessageStyle::Error,
            );
            return;
        }

        match self.round.play(letter) {
            Ok(outcome) => self.record_outcome(&outcome),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn record_outcome(&mut self, outcome: &GuessOutcome) {
        let style = if outcome.hit {
            MessageStyle::Success
        } else {
            MessageStyle::Info
        };
        self.add_message(&guess_feedback(outcome), style);
        self.flush_debug();
        self.last_guess = Some(LastGuess::from_outcome(outcome));

        if outcome.status != RoundStatus::Active {
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        self.stats.total_games += 1;
        self.input_mode = InputMode::RoundOver;
        self.secret = self.round.reveal_secret_word_with(&mut self.rng).ok();
        let secret = self.secret.unwrap_or("?");

        if self.round.status() == RoundStatus::Won {
            self.stats.games_won += 1;
            self.add_message(
                &format!("You beat me! The word was {secret}."),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("Out of guesses. The secret word was {secret}."),
                MessageStyle::Error,
            );
        }
        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
    }

    /// Abandon the current round and start another with the same settings
    ///
    /// # Errors
    /// Fails if the round cannot start.
    pub fn new_round(&mut self) -> Result<(), HangmanError> {
        if self.input_mode == InputMode::Guessing && self.round.guess_count() > 0 {
            self.stats.total_games += 1;
        }
        self.round =
            Round::start_observed(self.dictionary, self.config, Self::observer(self.debug_log))?;
        self.last_guess = None;
        self.secret = None;
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.announce_round();
        Ok(())
    }

    /// Apply one key press
    ///
    /// # Errors
    /// Fails if a new round cannot start.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<(), HangmanError> {
        match (self.input_mode, code) {
            (_, KeyCode::Char('c')) if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (_, KeyCode::Esc) => self.should_quit = true,
            (InputMode::RoundOver, KeyCode::Char('q')) => self.should_quit = true,
            (InputMode::RoundOver, KeyCode::Char('n')) | (_, KeyCode::Tab) => self.new_round()?,
            (InputMode::Guessing, KeyCode::Char(c)) => self.handle_letter(c),
            _ => {}
        }
        Ok(())
    }

    fn flush_debug(&mut self) {
        let Some(log) = self.debug_log else {
            return;
        };
        for line in log.drain() {
            self.add_message(&format!("DEBUGGING: {line}"), MessageStyle::Debug);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 12 messages
        if self.messages.len() > 12 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers)?;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
