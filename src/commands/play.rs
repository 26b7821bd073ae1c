//! Simple interactive CLI mode
//!
//! Text-based hangman without TUI. Reads answers line by line, so it runs just
//! as well against a script as against a terminal.

use crate::core::{Difficulty, normalize_letter};
use crate::dictionary::Dictionary;
use crate::engine::{Round, RoundConfig, RoundObserver, RoundStatus};
use crate::output::formatters::{budget_bar, format_guesses, guess_feedback};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Rounds finished during a play session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayTally {
    pub played: usize,
    pub won: usize,
}

/// Run the simple interactive CLI mode
///
/// Keeps starting rounds until the player declines another one or `input`
/// runs dry.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails, or if the
/// engine reports an error the prompts should have ruled out.
pub fn run_play<'a, R, W, G>(
    dictionary: &'a Dictionary,
    observer: Option<&'a dyn RoundObserver>,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> Result<PlayTally>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(output, "\n{}", "Welcome to the hangman game.".bright_cyan().bold())?;
    writeln!(
        output,
        "I know {} words. Pick a length and I'll pick a word.\n",
        dictionary.len()
    )?;

    let mut tally = PlayTally::default();

    while let Some(config) = read_round_config(dictionary, input, output)? {
        let mut round = Round::start_observed(dictionary, config, observer)?;

        if !play_until_over(&mut round, input, output)? {
            break;
        }

        tally.played += 1;
        let secret = round.reveal_secret_word_with(rng)?;
        if round.status() == RoundStatus::Won {
            tally.won += 1;
            writeln!(
                output,
                "\n{}",
                format!("Yay, you beat me! The word was {secret}.").green().bold()
            )?;
        } else {
            writeln!(
                output,
                "\n{}",
                format!("Sorry, you lose. The secret word was {secret}.").red().bold()
            )?;
        }

        match prompt(input, output, "\nDo you want to play again? (y/n)")? {
            Some(answer) if answer.to_ascii_lowercase().starts_with('y') => {}
            _ => break,
        }
    }

    writeln!(
        output,
        "\nYou won {} out of {} games.",
        tally.won, tally.played
    )?;
    writeln!(output, "Thanks for playing!")?;

    Ok(tally)
}

fn read_round_config<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    input: &mut R,
    output: &mut W,
) -> Result<Option<RoundConfig>> {
    let Some(word_length) =
        prompt_until(input, output, "What length word do you want to use?", |answer| {
            let length: usize = answer
                .parse()
                .map_err(|_| format!("'{answer}' is not a number."))?;
            if dictionary.count_of_length(length) == 0 {
                return Err(format!(
                    "I don't know any words with {length} letters. My longest word has {} letters.",
                    dictionary.max_length()
                ));
            }
            Ok(length)
        })?
    else {
        return Ok(None);
    };

    let Some(guess_budget) =
        prompt_until(input, output, "How many wrong answers allowed?", |answer| {
            match answer.parse::<u32>() {
                Ok(budget) if budget >= 1 => Ok(budget),
                _ => Err("Enter a whole number of at least 1.".to_string()),
            }
        })?
    else {
        return Ok(None);
    };

    let Some(difficulty) = prompt_until(
        input,
        output,
        "What difficulty level do you want? (easy, medium, hard)",
        |answer| answer.parse::<Difficulty>(),
    )?
    else {
        return Ok(None);
    };

    Ok(Some(RoundConfig::new(word_length, guess_budget, difficulty)))
}

/// Returns false if input ran out before the round ended
fn play_until_over<R: BufRead, W: Write>(
    round: &mut Round<'_>,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    while !round.is_over() {
        writeln!(
            output,
            "\n{} {} {}",
            "Guesses left:".cyan(),
            round.guesses_left(),
            budget_bar(round.guesses_left(), round.config().guess_budget, 10).bright_black()
        )?;
        writeln!(
            output,
            "{} {}",
            "Guessed so far:".cyan(),
            format_guesses(&round.guesses_made_sorted())
        )?;
        writeln!(
            output,
            "{} {}",
            "Current word:".cyan(),
            round.current_pattern().spaced().bold()
        )?;

        let current: &Round<'_> = round;
        let Some(letter) = prompt_until(input, output, "Your guess?", |answer| {
            parse_letter(answer, current)
        })?
        else {
            return Ok(false);
        };

        let outcome = round.play(letter)?;
        let feedback = guess_feedback(&outcome);
        if outcome.hit {
            writeln!(output, "{}", feedback.green())?;
        } else {
            writeln!(output, "{}", feedback.yellow())?;
        }
    }

    Ok(true)
}

fn parse_letter(answer: &str, round: &Round<'_>) -> Result<char, String> {
    let mut chars = answer.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) => normalize_letter(c),
        _ => None,
    }
    .ok_or_else(|| "Please enter a single letter.".to_string())?;

    if round.already_guessed(letter) {
        return Err("You already guessed that! Try again.".to_string());
    }
    Ok(letter)
}

/// Ask until `parse` accepts an answer, `None` once input runs dry
fn prompt_until<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    question: &str,
    parse: F,
) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        let Some(answer) = prompt(input, output, question)? else {
            return Ok(None);
        };
        match parse(&answer) {
            Ok(value) => return Ok(Some(value)),
            Err(message) => writeln!(output, "{}", message.yellow())?,
        }
    }
}

/// Get user input with a prompt
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(output, "{question} ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
